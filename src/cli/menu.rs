// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::error::Error;

use crate::cli::clipboard::CopyTicket;
use crate::cli::handlers;
use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;
use crate::utils::render_report;

const CHECK: &str = "🔍  Check a password";
const GENERATE: &str = "🎲  Generate a password";
const EXIT: &str = "🚪  Exit";

fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

pub fn run_cli_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSMETER                ║");
    println!("╚══════════════════════════════════════╝");

    let mut copies: Vec<CopyTicket> = Vec::new();
    let result = menu_loop(config, &mut copies);

    // Pending clears and selection holds must finish before the process exits
    if copies.iter().any(CopyTicket::is_pending) {
        println!("🧹 Waiting on the clipboard (Ctrl+C to stop)...");
    }
    for ticket in copies {
        ticket.finish();
    }

    println!("👋 Goodbye!");
    result
}

fn menu_loop(config: &Config, copies: &mut Vec<CopyTicket>) -> Result<(), Box<dyn Error>> {
    loop {
        let choice = match Select::new("What would you like to do?", vec![CHECK, GENERATE, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(Box::new(e)),
        };

        let result = match choice {
            CHECK => check_password(config, copies),
            GENERATE => generate_password(config, copies),
            _ => return Ok(()),
        };

        match result {
            Ok(()) => {}
            // Esc inside a sub-flow only returns to the menu
            Err(e) if is_cancel(&e) => continue,
            Err(e) => return Err(Box::new(e)),
        }
    }
}

fn check_password(config: &Config, copies: &mut Vec<CopyTicket>) -> Result<(), InquireError> {
    let password = Password::new("Password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .with_help_message("Ctrl+R shows or hides the password")
        .without_confirmation()
        .prompt()?;

    let report = handlers::handle_check(&password);
    println!("\n{}\n", render_report(&report));

    offer_copy(&password, config, copies)
}

fn generate_password(config: &Config, copies: &mut Vec<CopyTicket>) -> Result<(), InquireError> {
    let defaults = config.default_generation_options();
    let max = config.max_password_length;

    let length = Text::new("Password length:")
        .with_default(&defaults.length.to_string())
        .with_help_message(&format!("Between 1 and {}", max))
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| InquireError::Custom("Invalid number".into()))
        })?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(defaults.include_lowercase)
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(defaults.include_uppercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(defaults.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(defaults.include_symbols)
        .prompt()?;

    let exclude_ambiguous = Confirm::new("Exclude look-alike characters (O, 0, I, l, 1, |)?")
        .with_default(defaults.exclude_ambiguous)
        .prompt()?;

    let options = PasswordGenerationOptions {
        length,
        include_lowercase,
        include_uppercase,
        include_numbers,
        include_symbols,
        exclude_ambiguous,
    };

    match handlers::handle_generate(&options, config) {
        Ok(generated) => {
            if let Err(e) = handlers::print_generated(&generated, false) {
                eprintln!("❌ {}", e);
            }
            println!();
            if !generated.password.is_empty() {
                offer_copy(&generated.password, config, copies)?;
            }
        }
        Err(e) => eprintln!("❌ {}", e),
    }

    Ok(())
}

fn offer_copy(password: &str, config: &Config, copies: &mut Vec<CopyTicket>) -> Result<(), InquireError> {
    if password.is_empty() {
        return Ok(());
    }
    let copy = Confirm::new("Copy to clipboard?")
        .with_default(false)
        .prompt()?;
    if copy {
        copies.push(handlers::handle_copy(password, config, true));
    }
    Ok(())
}
