// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Tickscan analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TickscanError};

/// Single-channel 8-bit image stored as a flat row-major buffer.
///
/// `pixels[y * width + x]` is the intensity at column `x`, row `y`, where
/// 0 is black and 255 is white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl RasterImage {
    /// Wrap a raw buffer. The length must equal `width * height`.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TickscanError::InvalidRaster {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }
}

/// Axis-aligned rectangle in source-image pixel coordinates (inclusive corners).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// `(max_x - min_x) * (max_y - min_y)`.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Wire status tag shared by success and failure payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Sampled square in photograph pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBox {
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

/// Classification of one checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxResult {
    pub label: String,
    pub checked: bool,
    /// Mean intensity of the sampled square, rounded to a whole value.
    pub mean: f64,
    pub threshold: u8,
    #[serde(rename = "box")]
    pub sample_box: SampleBox,
}

/// Bounding box as reported in the debug block, with the threshold that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugBoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_threshold: u8,
}

impl DebugBoundingBox {
    pub fn new(bbox: BoundingBox, pixel_threshold: u8) -> Self {
        Self {
            min_x: bbox.min_x,
            min_y: bbox.min_y,
            max_x: bbox.max_x,
            max_y: bbox.max_y,
            pixel_threshold,
        }
    }
}

/// Dimensions of the normalized source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSize {
    pub width: u32,
    pub height: u32,
}

/// Canonical-to-photograph scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

/// Diagnostic payload returned with every successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    #[serde(rename = "boundingBox")]
    pub bounding_box: DebugBoundingBox,
    pub source: SourceSize,
    pub scale: Scale,
}

/// Full result of analyzing one receipt photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub layout: String,
    pub items: Vec<CheckboxResult>,
    pub warnings: Vec<String>,
    pub debug: DebugInfo,
}

impl AnalysisResult {
    /// Labels whose checkbox was classified as checked, in input order.
    pub fn checked_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.label.as_str())
            .collect()
    }
}
