// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synthetic receipt fixtures shared by the unit tests.

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use tickscan_core::Layout;

pub(crate) const LABELS: [&str; 8] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Meds AM",
    "Meds PM",
    "Hydrate x8",
    "Exercise",
    "Notes",
];

const BORDER_PX: u32 = 4;

/// Canonical-size white receipt with a solid dark border (so the bounding box
/// is the full image), every checkbox outlined, and `checked` boxes filled.
pub(crate) fn synthetic_receipt(layout: &Layout, checked: &[usize]) -> GrayImage {
    let (width, height) = (layout.width_px, layout.height_px);
    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));

    let black = Luma([0u8]);
    draw_filled_rect_mut(&mut img, Rect::at(0, 0).of_size(width, BORDER_PX), black);
    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, (height - BORDER_PX) as i32).of_size(width, BORDER_PX),
        black,
    );
    draw_filled_rect_mut(&mut img, Rect::at(0, 0).of_size(BORDER_PX, height), black);
    draw_filled_rect_mut(
        &mut img,
        Rect::at((width - BORDER_PX) as i32, 0).of_size(BORDER_PX, height),
        black,
    );

    for index in 0..layout.max_items {
        let (left, top) = layout.checkbox_origin(index);
        let rect = Rect::at(left as i32, top as i32).of_size(layout.checkbox_size, layout.checkbox_size);
        if checked.contains(&index) {
            draw_filled_rect_mut(&mut img, rect, black);
        } else {
            draw_hollow_rect_mut(&mut img, rect, black);
        }
    }

    img
}

/// Encode a grayscale image as PNG bytes, the way an upload would arrive.
pub(crate) fn encode_png(img: &GrayImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    DynamicImage::ImageLuma8(img.clone())
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("PNG encoding of an in-memory fixture");
    buffer
}
