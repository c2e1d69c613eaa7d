// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tickscan.

use thiserror::Error;

/// Top-level error type for all Tickscan operations.
#[derive(Debug, Error)]
pub enum TickscanError {
    // -- Photo problems (the caller can fix these by retaking the photo) --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("could not detect the receipt")]
    NoReceiptDetected,

    #[error("receipt too small: bounding box area {area} is below {min_area}")]
    ReceiptTooSmall { area: u64, min_area: u64 },

    // -- Internal problems --
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid raster: expected {expected} bytes for {width}x{height}, got {actual}")]
    InvalidRaster {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("invalid analysis config: {0}")]
    InvalidConfig(String),

    #[error("unexpected failure: {0}")]
    Unexpected(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TickscanError {
    /// Whether the failure is caused by the submitted photo rather than by
    /// the system. These map to a 400 response; everything else is a 500.
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::NoReceiptDetected | Self::ReceiptTooSmall { .. }
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TickscanError>;
