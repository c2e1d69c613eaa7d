// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Analysis orchestrator: photo bytes in, per-checkbox verdicts plus the
// diagnostic block out.

use std::path::Path;

use tickscan_core::{
    AnalysisConfig, AnalysisResult, DebugBoundingBox, DebugInfo, Layout, RasterImage,
    ResponseStatus, Result, SourceSize,
};
use tracing::{info, instrument};

use crate::normalize::{normalize, normalize_path};
use crate::scan::{CoordinateMapper, detect_bounding_box, sample_checkbox};

/// Runs the full pipeline for one receipt layout and one set of thresholds.
///
/// Holds no per-call state, so a single `Analyzer` can be shared across
/// threads and used for any number of concurrent analyses.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    layout: Layout,
    config: AnalysisConfig,
}

impl Analyzer {
    /// Validate `layout` and `config` and build an analyzer from them.
    pub fn new(layout: Layout, config: AnalysisConfig) -> Result<Self> {
        layout.validate()?;
        config.validate()?;
        Ok(Self { layout, config })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze an encoded photo (JPEG, PNG, ...).
    #[instrument(skip(self, data, items), fields(data_len = data.len(), items = items.len()))]
    pub fn analyze_bytes<S: AsRef<str>>(
        &self,
        data: &[u8],
        items: &[S],
        receipt_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<AnalysisResult> {
        let raster = normalize(data)?;
        self.analyze_raster(&raster, items, receipt_id, date)
    }

    /// Analyze a photo stored on disk.
    #[instrument(skip(self, path, items), fields(path = %path.as_ref().display()))]
    pub fn analyze_path<S: AsRef<str>>(
        &self,
        path: impl AsRef<Path>,
        items: &[S],
        receipt_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<AnalysisResult> {
        let raster = normalize_path(path)?;
        self.analyze_raster(&raster, items, receipt_id, date)
    }

    /// Analyze an already-normalized raster.
    ///
    /// Labels beyond `layout.max_items` are dropped. A detection failure fails
    /// the whole call; no partial item list is ever returned.
    pub fn analyze_raster<S: AsRef<str>>(
        &self,
        raster: &RasterImage,
        items: &[S],
        receipt_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<AnalysisResult> {
        let bbox = detect_bounding_box(
            raster,
            self.config.bbox_pixel_threshold,
            self.config.min_bbox_area,
        )?;
        let mapper = CoordinateMapper::new(&self.layout, &bbox);

        let results: Vec<_> = items
            .iter()
            .take(self.layout.max_items)
            .enumerate()
            .map(|(index, label)| {
                sample_checkbox(
                    raster,
                    &mapper,
                    &self.layout,
                    &self.config,
                    index,
                    label.as_ref(),
                )
            })
            .collect();

        let checked = results.iter().filter(|item| item.checked).count();
        info!(
            layout = self.layout.layout_id,
            requested = items.len(),
            sampled = results.len(),
            checked,
            "Receipt analyzed"
        );

        Ok(AnalysisResult {
            status: ResponseStatus::Ok,
            receipt_id: receipt_id.map(str::to_owned),
            date: date.map(str::to_owned),
            layout: self.layout.layout_id.to_owned(),
            items: results,
            warnings: Vec::new(),
            debug: DebugInfo {
                bounding_box: DebugBoundingBox::new(bbox, self.config.bbox_pixel_threshold),
                source: SourceSize {
                    width: raster.width(),
                    height: raster.height(),
                },
                scale: mapper.scale(),
            },
        })
    }
}

/// Analyze `data` with the daily checklist layout and default thresholds.
pub fn analyze<S: AsRef<str>>(
    data: &[u8],
    items: &[S],
    receipt_id: Option<&str>,
    date: Option<&str>,
) -> Result<AnalysisResult> {
    Analyzer::default().analyze_bytes(data, items, receipt_id, date)
}

// -- Tests --------------------------------------------------------------------
