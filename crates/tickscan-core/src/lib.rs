// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tickscan: Core types, calibration config, and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod layout;
pub mod types;

pub use config::AnalysisConfig;
pub use error::{Result, TickscanError};
pub use human_errors::FailureResponse;
pub use layout::Layout;
pub use types::*;
