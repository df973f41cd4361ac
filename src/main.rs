use clap::Parser;
use std::error::Error;
use std::path::Path;

mod cli;
mod api;
mod core;
mod utils;
mod models;
mod crypto;
mod generators;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    for rejected in &config.rejected {
        log::warn!("{}, using default", rejected);
    }
    log::debug!("Loaded config: {:?}", config);

    // Interrupts a clipboard hold or the API server; prompts handle Ctrl+C themselves
    ctrlc::set_handler(|| {
        log::info!("🔴 Ctrl+C received. Shutting down...");
        std::process::exit(0);
    })?;

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Check { password, copy } => {
            let password = match password {
                Some(password) => password,
                None => inquire::Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .with_display_toggle_enabled()
                    .without_confirmation()
                    .prompt()?,
            };
            let report = cli::handlers::handle_check(&password);
            cli::handlers::print_report(&report, args.json)?;
            if copy {
                cli::handlers::handle_copy(&password, &config, true).finish();
            }
        }
        CliCommand::Generate(generate_args) => {
            let options = generate_args.to_options(&config);
            let generated = cli::handlers::handle_generate(&options, &config)?;
            cli::handlers::print_generated(&generated, args.json)?;
            if generate_args.copy && !generated.password.is_empty() {
                cli::handlers::handle_copy(&generated.password, &config, true).finish();
            }
        }
        CliCommand::Interactive => {
            cli::menu::run_cli_menu(&config)?;
        }
        CliCommand::Serve { port } => {
            let port = port.unwrap_or(config.web_port);
            println!("🚀 API server starting on {}:{}", config.web_address, port);
            api::start_server(config, port).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
        }
    }

    Ok(())
}
