// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command handlers. Each returns `Ok(true)` when everything succeeded and
// `Ok(false)` when at least one photo produced a failure response.

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;
use tickscan_core::{AnalysisConfig, FailureResponse, Layout, Result, TickscanError};
use tickscan_scan::Analyzer;
use tracing::{info, warn};

use crate::AnalyzeArgs;

/// Analyze every photo in `args` and print the results to stdout.
pub async fn analyze(args: AnalyzeArgs) -> Result<bool> {
    let mut stdout = std::io::stdout();
    analyze_to(args, &mut stdout).await
}

/// Analyze every photo in `args`, writing one JSON document per photo to `out`
/// in input order.
///
/// Photos run concurrently on the blocking pool; each analysis is itself
/// single-threaded and shares nothing but the read-only `Analyzer`.
pub async fn analyze_to<W: Write>(args: AnalyzeArgs, out: &mut W) -> Result<bool> {
    let config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    let analyzer = Arc::new(Analyzer::new(Layout::DAILY_CHECKLIST, config)?);
    let items = Arc::new(args.items);

    if items.len() > analyzer.layout().max_items {
        warn!(
            requested = items.len(),
            max_items = analyzer.layout().max_items,
            "More labels than checkboxes; extra labels are ignored"
        );
    }

    let mut tasks = Vec::with_capacity(args.photos.len());
    for photo in args.photos {
        let analyzer = Arc::clone(&analyzer);
        let items = Arc::clone(&items);
        let receipt_id = args.receipt_id.clone();
        let date = args.date.clone();
        let task = tokio::task::spawn_blocking(move || {
            analyzer.analyze_path(&photo, items.as_slice(), receipt_id.as_deref(), date.as_deref())
        });
        tasks.push(task);
    }

    let mut all_ok = true;
    for task in tasks {
        let outcome = task
            .await
            .map_err(|err| TickscanError::Unexpected(format!("analysis task failed: {err}")))
            .and_then(|result| result);

        match outcome {
            Ok(result) => {
                info!(checked = ?result.checked_labels(), "Photo analyzed");
                write_json(out, &result, args.pretty)?;
            }
            Err(err) => {
                all_ok = false;
                let response = FailureResponse::from_error(&err);
                warn!(error = %err, status_code = response.status_code, "Photo rejected");
                write_json(out, &response, args.pretty)?;
            }
        }
    }

    Ok(all_ok)
}

#[derive(Serialize)]
struct LayoutReport<'a> {
    layout: &'a Layout,
    config: AnalysisConfig,
}

/// Print the canonical layout and default calibration as JSON.
pub fn layout() -> Result<bool> {
    let report = LayoutReport {
        layout: &Layout::DAILY_CHECKLIST,
        config: AnalysisConfig::default(),
    };
    write_json(&mut std::io::stdout(), &report, true)?;
    Ok(true)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
