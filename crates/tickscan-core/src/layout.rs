// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canonical print geometry of the checklist receipt.

use serde::Serialize;

use crate::error::{Result, TickscanError};

/// Print-time pixel geometry of a checklist receipt.
///
/// Checkboxes form a single column: box `i` has its top-left corner at
/// `(checkbox_left, checkbox_top + i * checkbox_spacing)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub width_px: u32,
    pub height_px: u32,
    pub checkbox_left: u32,
    pub checkbox_top: u32,
    pub checkbox_size: u32,
    pub checkbox_spacing: u32,
    pub max_items: usize,
    pub layout_id: &'static str,
}

impl Layout {
    /// Daily checklist printed on a 58 mm thermal roll (384 dots wide at 203 dpi).
    pub const DAILY_CHECKLIST: Layout = Layout {
        width_px: 384,
        height_px: 800,
        checkbox_left: 24,
        checkbox_top: 120,
        checkbox_size: 32,
        checkbox_spacing: 64,
        max_items: 8,
        layout_id: "daily-checklist-v1",
    };

    /// Check that every value is positive and the last checkbox fits on the page.
    pub fn validate(&self) -> Result<()> {
        if self.width_px == 0
            || self.height_px == 0
            || self.checkbox_size == 0
            || self.checkbox_spacing == 0
            || self.max_items == 0
            || self.layout_id.is_empty()
        {
            return Err(TickscanError::InvalidLayout(format!(
                "{}: all dimensions must be positive",
                self.layout_id
            )));
        }

        let last_bottom = self.checkbox_top as u64
            + (self.max_items as u64 - 1) * self.checkbox_spacing as u64
            + self.checkbox_size as u64;
        if last_bottom > self.height_px as u64 {
            return Err(TickscanError::InvalidLayout(format!(
                "{}: last checkbox ends at {last_bottom}px, page is {}px tall",
                self.layout_id, self.height_px
            )));
        }
        if self.checkbox_left + self.checkbox_size > self.width_px {
            return Err(TickscanError::InvalidLayout(format!(
                "{}: checkbox column overflows page width",
                self.layout_id
            )));
        }
        Ok(())
    }

    /// Canonical top-left corner of checkbox `index`.
    pub fn checkbox_origin(&self, index: usize) -> (u32, u32) {
        (
            self.checkbox_left,
            self.checkbox_top + index as u32 * self.checkbox_spacing,
        )
    }

    /// Canonical center of checkbox `index`.
    pub fn checkbox_center(&self, index: usize) -> (f64, f64) {
        let (left, top) = self.checkbox_origin(index);
        let half = self.checkbox_size as f64 / 2.0;
        (left as f64 + half, top as f64 + half)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DAILY_CHECKLIST
    }
}
