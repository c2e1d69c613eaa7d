// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Calibration configuration for the analysis pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TickscanError};

/// Pixels strictly darker than this count towards the receipt bounding box.
pub const BBOX_PIXEL_THRESHOLD: u8 = 240;
/// A sampled checkbox mean strictly below this is classified as checked.
pub const CHECKED_PIXEL_THRESHOLD: u8 = 170;
/// Smallest bounding box area (in source pixels) accepted as a receipt.
pub const MIN_BBOX_AREA: u64 = 5000;
/// Side of the sampled square relative to the printed checkbox side.
pub const SAMPLE_RATIO: f64 = 0.6;

/// Thresholds used by the boundary detector and the checkbox sampler.
///
/// The defaults are part of the wire contract: results produced with
/// different values are not comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Darkness threshold for the receipt bounding box scan.
    pub bbox_pixel_threshold: u8,
    /// Mean intensity below which a checkbox counts as marked.
    pub checked_pixel_threshold: u8,
    /// Minimum bounding box area in source pixels.
    pub min_bbox_area: u64,
    /// Sampled square side as a fraction of the checkbox side, in (0, 1].
    pub sample_ratio: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bbox_pixel_threshold: BBOX_PIXEL_THRESHOLD,
            checked_pixel_threshold: CHECKED_PIXEL_THRESHOLD,
            min_bbox_area: MIN_BBOX_AREA,
            sample_ratio: SAMPLE_RATIO,
        }
    }
}

impl AnalysisConfig {
    /// Read a config from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        info!(path = %path.display(), ?config, "Analysis config loaded");
        Ok(config)
    }

    /// Reject values that would make the pipeline meaningless.
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_ratio > 0.0 && self.sample_ratio <= 1.0) {
            return Err(TickscanError::InvalidConfig(format!(
                "sample_ratio must be in (0, 1], got {}",
                self.sample_ratio
            )));
        }
        if self.min_bbox_area == 0 {
            return Err(TickscanError::InvalidConfig(
                "min_bbox_area must be positive".into(),
            ));
        }
        debug!("Analysis config valid");
        Ok(())
    }
}
