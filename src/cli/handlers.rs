// src/cli/handlers.rs
use std::error::Error;

use crate::cli::clipboard::{self, CopyTicket};
use crate::core::config::Config;
use crate::core::strength;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{GeneratedPassword, PasswordGenerationOptions, StrengthReport};
use crate::utils::render_report;

// Handlers for CLI commands
pub fn handle_check(password: &str) -> StrengthReport {
    let report = strength::analyze(password);
    log::info!("Checked password: score {}, rated {}", report.score, report.rating.label);
    report
}

pub fn handle_generate(
    options: &PasswordGenerationOptions,
    config: &Config,
) -> Result<GeneratedPassword, GeneratorError> {
    options.validate(config.max_password_length)?;

    let mut generator = PasswordGenerator::new();
    let password = generator.generate_password(options);
    let strength = generator.analyze_password_strength(&password);

    log::info!(
        "Generated password: length {}, classes {}, exclude ambiguous {}, score {}",
        options.length,
        options.enabled_class_count(),
        options.exclude_ambiguous,
        strength.score
    );

    Ok(GeneratedPassword { password, strength })
}

/// Copy and report the outcome. `hold` is for callers that exit right
/// after copying; they must `finish()` the returned ticket.
pub fn handle_copy(text: &str, config: &Config, hold: bool) -> CopyTicket {
    let ticket = clipboard::copy_to_clipboard(text, config.clipboard_clear_after, hold);
    eprintln!("{}", ticket.outcome.message());
    if ticket.outcome.is_copied() {
        match config.clipboard_clear_after {
            Some(after) => eprintln!("🧹 Clipboard will be cleared in {}s", after.as_secs()),
            None if hold && clipboard::HOLDS_UNTIL_REPLACED => {
                eprintln!("📋 Keeping it on the clipboard until something else is copied (Ctrl+C to stop)")
            }
            None => {}
        }
    }
    ticket
}

pub fn print_report(report: &StrengthReport, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}

pub fn print_generated(generated: &GeneratedPassword, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(generated)?);
    } else {
        if generated.password.is_empty() {
            println!("⚠️  No character classes left to draw from; nothing generated.");
        } else {
            println!("Generated Password: {}", generated.password);
        }
        println!("Strength: {}", generated.strength.rating.label);
    }
    Ok(())
}
