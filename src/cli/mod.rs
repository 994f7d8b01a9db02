// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;
pub use handlers::CliError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of passwords to generate (default: DEFAULT_PASSWORD_COUNT or 1)
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Command to execute (prompts interactively when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
