// src/cli/commands.rs
use clap::Subcommand;

use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Score the strength of a password
    Check {
        /// Password to check (prompted for when omitted)
        password: Option<String>,

        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Generate a random password
    Generate(GenerateArgs),

    /// Interactive menu
    Interactive,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (defaults to WEB_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude look-alike characters (O 0 I l 1 |)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Copy the generated password to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    pub fn to_options(&self, config: &Config) -> PasswordGenerationOptions {
        let defaults = config.default_generation_options();
        PasswordGenerationOptions {
            length: self.length.unwrap_or(defaults.length),
            include_lowercase: !self.no_lowercase,
            include_uppercase: !self.no_uppercase,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
            exclude_ambiguous: self.exclude_ambiguous || defaults.exclude_ambiguous,
        }
    }
}
