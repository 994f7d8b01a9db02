// src/cli/handlers.rs
use std::io::{self, Write};

use console::style;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{GenerationRequest, GenerationResponse};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Password length must be a whole number, got '{0}'.")]
    InvalidNumber(String),

    #[error("Password count must fit in memory, got {0}.")]
    InvalidCount(u64),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Errors caused by what the user asked for, as opposed to failures of the
    /// terminal or output stream.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CliError::InvalidNumber(_) | CliError::InvalidCount(_) | CliError::Generator(_)
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            CliError::Prompt(
                inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted
            )
        )
    }
}

/// Parse a length typed by the user. Zero and negative values are rejected
/// with the generator's own length error.
pub fn parse_length(input: &str) -> Result<usize, CliError> {
    let input = input.trim();
    let value: i64 = input
        .parse()
        .map_err(|_| CliError::InvalidNumber(input.to_string()))?;
    length_from_signed(value)
}

pub fn length_from_signed(value: i64) -> Result<usize, CliError> {
    if value <= 0 {
        return Err(GeneratorError::InvalidLength.into());
    }
    usize::try_from(value).map_err(|_| CliError::InvalidNumber(value.to_string()))
}

/// Resolve the number of passwords to print, falling back to the configured
/// default when `--count` is absent.
pub fn resolve_count(count: Option<u64>, default: usize) -> Result<usize, CliError> {
    match count {
        Some(count) => usize::try_from(count).map_err(|_| CliError::InvalidCount(count)),
        None => Ok(default),
    }
}

pub fn build_request(
    length: i64,
    uppercase: bool,
    lowercase: bool,
    digits: bool,
    special: bool,
) -> Result<GenerationRequest, CliError> {
    let request = GenerationRequest {
        length: length_from_signed(length)?,
        include_uppercase: uppercase,
        include_lowercase: lowercase,
        include_digits: digits,
        include_special: special,
    };
    request.validate()?;
    Ok(request)
}

/// Generate `count` passwords. Each one is an independent draw; with a seed
/// the whole batch is reproducible.
pub fn generate_passwords(
    request: &GenerationRequest,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<String>, GeneratorError> {
    let generator = PasswordGenerator::new();
    match seed {
        Some(seed) => {
            log::debug!("Using seeded generator");
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| generator.generate_with_rng(&mut rng, request))
                .collect()
        }
        None => (0..count).map(|_| generator.generate(request)).collect(),
    }
}

pub fn print_passwords<W: Write>(
    out: &mut W,
    request: &GenerationRequest,
    passwords: &[String],
    json: bool,
) -> Result<(), CliError> {
    if json {
        let response = GenerationResponse::ok(*request, passwords.to_vec());
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
        return Ok(());
    }

    match passwords {
        [password] => writeln!(
            out,
            "Your generated password is: {}",
            style(password).bold().green()
        )?,
        _ => {
            writeln!(out, "Your generated passwords are:")?;
            for password in passwords {
                writeln!(out, "{}", style(password).bold().green())?;
            }
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: &CliError, json: bool) -> Result<(), CliError> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&GenerationResponse::failed(error))?)?;
    } else if error.is_validation() {
        writeln!(out, "{} {}", style("Error:").red().bold(), error)?;
    } else {
        writeln!(
            out,
            "{} {}",
            style("An unexpected error occurred:").red().bold(),
            error
        )?;
    }
    Ok(())
}
