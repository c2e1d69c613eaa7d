// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tickscan: checklist receipt analyzer.
//
// Entry point. Initialises logging, parses arguments, and dispatches to the
// command handlers. Logs go to stderr; stdout carries JSON only.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tickscan_core::FailureResponse;

#[derive(Parser)]
#[command(name = "tickscan")]
#[command(about = "Decide which checkboxes were marked on a photographed checklist receipt")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze receipt photos and print one JSON result per photo.
    Analyze(AnalyzeArgs),

    /// Print the canonical checklist layout and default thresholds.
    Layout,
}

#[derive(Debug, Clone, Args)]
struct AnalyzeArgs {
    /// Receipt photos (JPEG, PNG, ...). Several photos are analyzed in parallel.
    #[arg(required = true)]
    photos: Vec<PathBuf>,

    /// Checklist label, in printed order. Repeat once per item.
    #[arg(long = "item", short = 'i')]
    items: Vec<String>,

    /// Opaque receipt identifier echoed into the result.
    #[arg(long)]
    receipt_id: Option<String>,

    /// Receipt date echoed into the result (not validated).
    #[arg(long)]
    date: Option<String>,

    /// JSON file overriding the calibration thresholds.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Analyze(args) => commands::analyze(args).await,
        Commands::Layout => commands::layout(),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let response = FailureResponse::from_error(&err);
            tracing::error!(error = %err, status_code = response.status_code, "tickscan failed");
            match serde_json::to_string(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!(error = %e, "could not serialize failure response"),
            }
            ExitCode::FAILURE
        }
    }
}
