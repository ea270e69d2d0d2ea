//! dw - dolar-wallet operator CLI
//!
//! # Examples
//!
//! ```bash
//! # Backend reachability and cache health
//! dw doctor --pretty
//!
//! # Wipe the local cache
//! dw cache clear --yes
//!
//! # Phone-aware contact search against the backend
//! dw contacts search "+598 99 123 456" --currency USD
//! ```

use dw_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match dw_config::Config::load().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cli.verbose() || log_file.is_some() {
        if let Err(e) =
            dw_app::logger::initialize(config.logging.level, log_file, config.logging.colored)
        {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        config.log_summary();
    }

    match dw_cli::run(&cli, config).await {
        Ok(value) => {
            let output = if cli.pretty() {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
