//! # ITPS Command Line
//!
//! The `itps` binary: quotes International Tracked Packet Service postage and
//! exports receipts.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    itps CLI Architecture                                │
//! │                                                                         │
//! │  main.rs ──► run()                                                      │
//! │                │                                                        │
//! │                ├── init_tracing()        RUST_LOG → stderr              │
//! │                ├── AppConfig::from_env() + flag overrides               │
//! │                ├── AppState::load()      rate table                     │
//! │                └── execute()                                            │
//! │                      ├── countries  ──► commands::countries             │
//! │                      ├── quote      ──► commands::quote::get_quote      │
//! │                      ├── check      ──► commands::quote::check_weight   │
//! │                      └── receipt    ──► commands::receipt               │
//! │                                                                         │
//! │  stdout: command output (text or --json)                                │
//! │  stderr: logs and text-mode errors                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::countries::{list_countries, CountriesResponse};
use commands::quote::{check_weight, get_quote, CheckResponse, QuoteResponse};
use commands::receipt::{export_receipt, ReceiptResponse};
use config::AppConfig;
use error::ApiError;
use state::AppState;

/// India Post ITPS postage calculator.
#[derive(Parser, Debug)]
#[command(name = "itps", version, about, long_about = None)]
pub struct Cli {
    /// Rate table JSON file (overrides ITPS_RATES_PATH).
    #[arg(long, global = true)]
    pub rates: Option<PathBuf>,

    /// GST percentage, e.g. 18 (overrides ITPS_TAX_RATE).
    #[arg(long, global = true)]
    pub tax_rate: Option<String>,

    /// Print machine-readable JSON, errors included.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List destination countries and their maximum weights.
    Countries,

    /// Calculate postage for a packet.
    Quote(PacketArgs),

    /// Check a weight against the destination's limit.
    Check(PacketArgs),

    /// Calculate postage and write an HTML receipt.
    Receipt {
        #[command(flatten)]
        packet: PacketArgs,

        /// Output directory (overrides ITPS_RECEIPT_DIR).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

/// Destination and weight, as typed by the user.
#[derive(Args, Debug, Clone)]
pub struct PacketArgs {
    /// Destination country, exactly as listed by `itps countries`.
    #[arg(short, long)]
    pub country: String,

    /// Packet weight in grams.
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: String,
}

/// Output of any subcommand.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Countries(CountriesResponse),
    Quote(QuoteResponse),
    Check(CheckResponse),
    Receipt(ReceiptResponse),
}

impl CommandOutput {
    pub fn to_text(&self) -> String {
        match self {
            CommandOutput::Countries(r) => r.to_text(),
            CommandOutput::Quote(r) => r.to_text(),
            CommandOutput::Check(r) => r.to_text(),
            CommandOutput::Receipt(r) => r.to_text(),
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,itps_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolves configuration, loads the rate table and runs one subcommand.
pub fn execute(cli: Cli) -> Result<CommandOutput, ApiError> {
    let mut config = AppConfig::from_env()?;
    config.apply_overrides(cli.rates, cli.tax_rate.as_deref())?;

    let state = AppState::load(config)?;
    info!(
        countries = state.rates.len(),
        tax_rate = %state.config.tax_rate,
        "itps ready"
    );

    dispatch(&state, cli.command)
}

/// Runs a subcommand against already loaded state.
pub fn dispatch(state: &AppState, command: Commands) -> Result<CommandOutput, ApiError> {
    match command {
        Commands::Countries => Ok(CommandOutput::Countries(list_countries(state))),
        Commands::Quote(p) => get_quote(state, &p.country, &p.weight).map(CommandOutput::Quote),
        Commands::Check(p) => check_weight(state, &p.country, &p.weight).map(CommandOutput::Check),
        Commands::Receipt { packet, out_dir } => {
            export_receipt(state, &packet.country, &packet.weight, out_dir.as_deref())
                .map(CommandOutput::Receipt)
        }
    }
}

/// Entry point used by `main`: parse, run, print, pick the exit status.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let json = cli.json;
    match execute(cli) {
        Ok(output) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", output.to_text());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&err)?);
            } else {
                eprintln!("error: {}", err.message);
            }
            Ok(ExitCode::from(err.code.exit_code()))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use clap::CommandFactory;
    use itps_core::RateTable;

    fn builtin_state() -> AppState {
        AppState::new(AppConfig::default(), RateTable::builtin().unwrap())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "itps", "quote", "--country", "France", "--weight", "120", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Quote(p) => {
                assert_eq!(p.country, "France");
                assert_eq!(p.weight, "120");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_weight_reaches_validation() {
        let cli = Cli::try_parse_from(["itps", "quote", "-c", "France", "-w", "-5"]).unwrap();
        let err = dispatch(&builtin_state(), cli.command).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_parse_receipt_with_global_flags() {
        let cli = Cli::try_parse_from([
            "itps",
            "receipt",
            "-c",
            "Japan",
            "-w",
            "300",
            "--out-dir",
            "out",
            "--tax-rate",
            "12",
            "--rates",
            "rates.json",
        ])
        .unwrap();
        assert_eq!(cli.tax_rate.as_deref(), Some("12"));
        assert_eq!(cli.rates, Some(PathBuf::from("rates.json")));
        match cli.command {
            Commands::Receipt { packet, out_dir } => {
                assert_eq!(packet.country, "Japan");
                assert_eq!(out_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_quote_json() {
        let output = dispatch(
            &builtin_state(),
            Commands::Quote(PacketArgs {
                country: "France".to_string(),
                weight: "120".to_string(),
            }),
        )
        .unwrap();

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["quote"]["breakdown"]["total"], 41300);
        assert_eq!(json["view"]["total"], "Rs.413.00");
    }

    #[test]
    fn test_dispatch_countries_text() {
        let output = dispatch(&builtin_state(), Commands::Countries).unwrap();
        let text = output.to_text();
        assert!(text.lines().any(|l| l.starts_with("France") && l.ends_with("max 2 kg")));
    }
}
