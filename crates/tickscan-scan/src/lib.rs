// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// tickscan-scan: Receipt photo analysis for Tickscan.
//
// Normalizes a photo (EXIF auto-rotate, portrait, grayscale), finds the
// receipt by its dark-pixel bounding box, maps the canonical checklist layout
// onto it, and samples each checkbox to decide whether it was marked.

pub mod analyze;
pub mod normalize;
pub mod scan;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the primary entry points so callers can use `tickscan_scan::Analyzer` etc.
pub use analyze::{Analyzer, analyze};
pub use normalize::{PhotoNormalizer, normalize, normalize_path};
pub use scan::{CoordinateMapper, detect_bounding_box};
