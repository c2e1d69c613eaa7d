// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Checkbox sampling: mean intensity of a small square at each mapped
// checkbox center, classified against a fixed threshold.

use tickscan_core::{AnalysisConfig, CheckboxResult, Layout, RasterImage, SampleBox};
use tracing::debug;

use super::mapper::CoordinateMapper;

/// Mean reported for a sample square that falls entirely outside the image.
pub const EMPTY_REGION_MEAN: f64 = 255.0;

/// Sample checkbox `index` of `layout` and classify it.
///
/// The sampled square is `checkbox_size * sample_ratio` canonical pixels on a
/// side, smaller than the printed box so its border never leaks into the mean.
pub fn sample_checkbox(
    raster: &RasterImage,
    mapper: &CoordinateMapper,
    layout: &Layout,
    config: &AnalysisConfig,
    index: usize,
    label: &str,
) -> CheckboxResult {
    let (cx, cy) = layout.checkbox_center(index);
    let (px, py) = mapper.map(cx, cy);

    let canonical_side = layout.checkbox_size as f64 * config.sample_ratio;
    let side = mapper.map_length(canonical_side).round().max(1.0) as u32;
    let half = side as f64 / 2.0;
    let x = (px - half).round() as i64;
    let y = (py - half).round() as i64;

    let mean = region_mean(raster, x, y, side);
    let checked = mean < config.checked_pixel_threshold as f64;

    debug!(index, label, x, y, side, mean, checked, "Checkbox sampled");

    CheckboxResult {
        label: label.to_owned(),
        checked,
        mean: mean.round(),
        threshold: config.checked_pixel_threshold,
        sample_box: SampleBox { x, y, size: side },
    }
}

/// Mean intensity of the `size`x`size` square with top-left `(x, y)`, clipped
/// to the image. Returns [`EMPTY_REGION_MEAN`] when nothing is left after
/// clipping.
pub fn region_mean(raster: &RasterImage, x: i64, y: i64, size: u32) -> f64 {
    let width = raster.width() as i64;
    let height = raster.height() as i64;

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + size as i64).min(width);
    let y1 = (y + size as i64).min(height);

    if x0 >= x1 || y0 >= y1 {
        return EMPTY_REGION_MEAN;
    }

    let pixels = raster.pixels();
    let stride = width as usize;
    let (x0, x1) = (x0 as usize, x1 as usize);

    let mut sum: u64 = 0;
    for row in y0 as usize..y1 as usize {
        let start = row * stride;
        sum += pixels[start + x0..start + x1]
            .iter()
            .map(|&p| p as u64)
            .sum::<u64>();
    }

    let count = (x1 - x0) as u64 * (y1 - y0) as u64;
    sum as f64 / count as f64
}
