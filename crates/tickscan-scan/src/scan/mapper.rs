// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canonical layout -> photograph coordinate mapping.

use tickscan_core::{BoundingBox, Layout, Scale};

/// Axis-aligned affine map from canonical layout pixels into the detected
/// receipt bounding box. X and Y scale independently; there is no rotation or
/// perspective term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    origin_x: f64,
    origin_y: f64,
    scale: Scale,
}

impl CoordinateMapper {
    pub fn new(layout: &Layout, bbox: &BoundingBox) -> Self {
        Self {
            origin_x: bbox.min_x as f64,
            origin_y: bbox.min_y as f64,
            scale: Scale {
                x: bbox.width() as f64 / layout.width_px as f64,
                y: bbox.height() as f64 / layout.height_px as f64,
            },
        }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Map a canonical point `(lx, ly)` into photograph pixels.
    pub fn map(&self, lx: f64, ly: f64) -> (f64, f64) {
        (
            self.origin_x + lx * self.scale.x,
            self.origin_y + ly * self.scale.y,
        )
    }

    /// Map a canonical length into photograph pixels using the tighter axis.
    pub fn map_length(&self, length: f64) -> f64 {
        length * self.scale.x.min(self.scale.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_matching_layout_is_identity() {
        let layout = Layout::DAILY_CHECKLIST;
        let bbox = BoundingBox {
            min_x: 0,
            min_y: 0,
            max_x: 384,
            max_y: 800,
        };
        let mapper = CoordinateMapper::new(&layout, &bbox);
        assert_eq!(mapper.scale(), Scale { x: 1.0, y: 1.0 });
        assert_eq!(mapper.map(40.0, 136.0), (40.0, 136.0));
    }

    #[test]
    fn scales_are_independent_and_offset_by_origin() {
        let layout = Layout::DAILY_CHECKLIST;
        let bbox = BoundingBox {
            min_x: 100,
            min_y: 50,
            max_x: 100 + 768,
            max_y: 50 + 1200,
        };
        let mapper = CoordinateMapper::new(&layout, &bbox);
        let scale = mapper.scale();
        assert!((scale.x - 2.0).abs() < 1e-12);
        assert!((scale.y - 1.5).abs() < 1e-12);

        let (px, py) = mapper.map(40.0, 136.0);
        assert!((px - 180.0).abs() < 1e-9);
        assert!((py - 254.0).abs() < 1e-9);

        assert!((mapper.map_length(20.0) - 30.0).abs() < 1e-9);
    }
}
