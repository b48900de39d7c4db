// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! txflow - Transaction processing pipeline.
//!
//! This is the binary entry point for txflow.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commission;
mod run;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use txflow_config::TxflowConfig;

/// txflow - Transaction processing pipeline.
#[derive(Parser, Debug)]
#[command(name = "txflow", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the pipeline over a batch of transactions.
    Run {
        /// CSV or JSON file of transactions. Uses the built-in sample batch when omitted.
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
        /// Seed the simulated validator for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compute the commission for an amount in a currency.
    Commission {
        currency: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => txflow_config::load_and_validate_path(path),
        None => txflow_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            txflow_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Run { input, json, seed }) => {
            let shutdown = shutdown::install_signal_handler();
            let options = run::RunOptions { input, json, seed };
            let result = run::run_pipeline(config, &options, shutdown).await;
            log_memory_stats();
            result
        }
        Some(Commands::Commission { currency, amount }) => {
            Ok(commission::render_commission(&config, &currency, amount))
        }
        Some(Commands::Config) => render_config(&config),
        None => Ok("txflow: use --help for available commands\n".to_string()),
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Serialize the effective configuration back to TOML.
fn render_config(config: &TxflowConfig) -> Result<String, txflow_core::TxflowError> {
    toml::to_string_pretty(config)
        .map_err(|e| txflow_core::TxflowError::Internal(format!("failed to render config: {e}")))
}

/// Log jemalloc heap figures once a run has finished.
#[cfg(not(target_env = "msvc"))]
fn log_memory_stats() {
    // Stats are cached until the epoch advances.
    let _ = tikv_jemalloc_ctl::epoch::advance();
    let allocated = tikv_jemalloc_ctl::stats::allocated::read().unwrap_or(0);
    let resident = tikv_jemalloc_ctl::stats::resident::read().unwrap_or(0);
    debug!(
        allocated_kb = allocated / 1024,
        resident_kb = resident / 1024,
        "memory after run"
    );
}

#[cfg(target_env = "msvc")]
fn log_memory_stats() {
    debug!("allocator stats unavailable on this target");
}

/// Initialize the tracing subscriber. Logs go to stderr so report output stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("txflow={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
