// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords from command line flags
    Generate {
        /// Password length (default: DEFAULT_PASSWORD_LENGTH or 16)
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Include special characters
        #[arg(long)]
        special: bool,

        /// Include every character type
        #[arg(long, short)]
        all: bool,
    },

    /// Answer prompts for length and character types
    Interactive,
}
