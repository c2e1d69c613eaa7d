// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Receipt boundary detection: smallest axis-aligned box around every dark
// pixel. Other dark objects in frame (a dark table, a thumb) are not
// separated from the receipt; they simply widen the box.

use tickscan_core::{BoundingBox, RasterImage, Result, TickscanError};
use tracing::{debug, instrument, warn};

/// Scan `raster` once and bound every pixel strictly darker than
/// `pixel_threshold`.
///
/// Fails with `NoReceiptDetected` when no pixel qualifies and with
/// `ReceiptTooSmall` when the box area is below `min_area`.
#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn detect_bounding_box(
    raster: &RasterImage,
    pixel_threshold: u8,
    min_area: u64,
) -> Result<BoundingBox> {
    let width = raster.width() as usize;
    let height = raster.height() as usize;
    let pixels = raster.pixels();

    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;

    for y in 0..height {
        let row_start = y * width;
        let row = &pixels[row_start..row_start + width];
        for (x, &value) in row.iter().enumerate() {
            if value < pixel_threshold {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
    }

    if min_x > max_x || min_y > max_y {
        warn!(pixel_threshold, "No pixel darker than threshold");
        return Err(TickscanError::NoReceiptDetected);
    }

    let bbox = BoundingBox {
        min_x: min_x as u32,
        min_y: min_y as u32,
        max_x: max_x as u32,
        max_y: max_y as u32,
    };

    let area = bbox.area();
    if area < min_area {
        warn!(area, min_area, ?bbox, "Receipt bounding box too small");
        return Err(TickscanError::ReceiptTooSmall { area, min_area });
    }

    debug!(?bbox, area, "Receipt bounding box detected");
    Ok(bbox)
}
