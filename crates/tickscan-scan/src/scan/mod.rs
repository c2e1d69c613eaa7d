// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Receipt scanning stages: boundary detection, coordinate mapping, and
// checkbox sampling over a normalized grayscale raster.

pub mod boundary;
pub mod mapper;
pub mod sampler;

pub use boundary::detect_bounding_box;
pub use mapper::CoordinateMapper;
pub use sampler::{region_mean, sample_checkbox};
