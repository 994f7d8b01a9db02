// src/cli/menu.rs
use console::style;
use inquire::{Confirm, Text};

use crate::cli::handlers::{parse_length, CliError};
use crate::core::config::Config;
use crate::models::GenerationRequest;

pub fn print_banner() {
    println!("╔══════════════════════════════════════╗");
    println!("║      🦀 {}       ║", style("RUST PASSWORD GENERATOR").bold());
    println!("╚══════════════════════════════════════╝");
    println!("Welcome to the Password Generator!");
}

/// Ask for a length and the four character types, in that order.
///
/// A bad length is reported before any character type is asked for. Every
/// character type defaults to "no", so pressing enter skips it.
pub fn prompt_request(config: &Config) -> Result<GenerationRequest, CliError> {
    let default_length = config.default_password_length.to_string();
    let length = Text::new("Enter the desired password length:")
        .with_default(&default_length)
        .prompt()?;
    let length = parse_length(&length)?;

    let include_uppercase = ask("Include uppercase letters?")?;
    let include_lowercase = ask("Include lowercase letters?")?;
    let include_digits = ask("Include numbers?")?;
    let include_special = ask("Include special characters?")?;

    let request = GenerationRequest {
        length,
        include_uppercase,
        include_lowercase,
        include_digits,
        include_special,
    };
    request.validate()?;
    Ok(request)
}

fn ask(question: &str) -> Result<bool, CliError> {
    Ok(Confirm::new(question).with_default(false).prompt()?)
}
