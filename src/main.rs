use clap::Parser;
use std::io;
use std::path::Path;

use rust_passgen::cli::{handlers, menu, Args, CliCommand, CliError};
use rust_passgen::core::config::Config;
use rust_passgen::logging;
use rust_passgen::models::GenerationRequest;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let outcome = build_request(&args, &config).and_then(|request| {
        let count = handlers::resolve_count(args.count, config.default_password_count)?;
        let passwords = handlers::generate_passwords(&request, count, args.seed)?;
        Ok((request, passwords))
    });

    match outcome {
        Ok((request, passwords)) => {
            log::info!("Generated {} password(s)", passwords.len());
            handlers::print_passwords(&mut io::stdout().lock(), &request, &passwords, args.json)?;
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            log::info!("Prompt cancelled by user");
            Ok(())
        }
        Err(e) => {
            if e.is_validation() {
                log::warn!("Rejected request: {}", e);
            } else {
                log::error!("Password generation failed: {:?}", e);
            }
            if args.json {
                handlers::print_error(&mut io::stdout().lock(), &e, true)?;
            } else {
                handlers::print_error(&mut io::stderr().lock(), &e, false)?;
            }
            std::process::exit(1);
        }
    }
}

fn build_request(args: &Args, config: &Config) -> Result<GenerationRequest, CliError> {
    match &args.command {
        Some(CliCommand::Generate {
            length,
            uppercase,
            lowercase,
            digits,
            special,
            all,
        }) => {
            let length = length.unwrap_or(config.default_password_length as i64);
            handlers::build_request(
                length,
                *uppercase || *all,
                *lowercase || *all,
                *digits || *all,
                *special || *all,
            )
        }
        Some(CliCommand::Interactive) | None => {
            if !args.json {
                menu::print_banner();
            }
            menu::prompt_request(config)
        }
    }
}
