// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the receipt analysis hot paths: the full-image
// boundary scan and the end-to-end analysis of an encoded photo.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use tickscan_core::{Layout, RasterImage};
use tickscan_scan::{Analyzer, detect_bounding_box};

const LABELS: [&str; 8] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Meds AM",
    "Meds PM",
    "Hydrate x8",
    "Exercise",
    "Notes",
];

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A receipt printed at 3x the canonical layout on a light 1500x2800 photo,
/// roughly the pixel count of a downscaled phone picture.
fn synthetic_photo(layout: &Layout) -> GrayImage {
    let factor = 3;
    let mut photo = GrayImage::from_pixel(1500, 2800, Luma([250u8]));
    let (x0, y0) = (120i32, 160i32);
    let (w, h) = (layout.width_px * factor, layout.height_px * factor);

    draw_filled_rect_mut(&mut photo, Rect::at(x0, y0).of_size(w, h), Luma([235u8]));
    draw_hollow_rect_mut(&mut photo, Rect::at(x0, y0).of_size(w, h), Luma([0u8]));

    for index in 0..layout.max_items {
        let (left, top) = layout.checkbox_origin(index);
        let rect = Rect::at(x0 + (left * factor) as i32, y0 + (top * factor) as i32)
            .of_size(layout.checkbox_size * factor, layout.checkbox_size * factor);
        if index % 3 == 0 {
            draw_filled_rect_mut(&mut photo, rect, Luma([20u8]));
        } else {
            draw_hollow_rect_mut(&mut photo, rect, Luma([0u8]));
        }
    }
    photo
}

fn encode_png(img: &GrayImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    DynamicImage::ImageLuma8(img.clone())
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("PNG encoding failed");
    buffer
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_bounding_box(c: &mut Criterion) {
    let photo = synthetic_photo(&Layout::DAILY_CHECKLIST);
    let (width, height) = photo.dimensions();
    let raster = RasterImage::new(photo.into_raw(), width, height).expect("raster");

    c.bench_function("detect_bounding_box (1500x2800)", |b| {
        b.iter(|| {
            let bbox = detect_bounding_box(black_box(&raster), 240, 5000);
            black_box(bbox.expect("receipt present"));
        });
    });
}

fn bench_analyze_bytes(c: &mut Criterion) {
    let png = encode_png(&synthetic_photo(&Layout::DAILY_CHECKLIST));
    let analyzer = Analyzer::default();

    c.bench_function("analyze_bytes (png, 8 items)", |b| {
        b.iter(|| {
            let result = analyzer.analyze_bytes(black_box(&png), &LABELS, None, None);
            black_box(result.expect("analysis succeeds"));
        });
    });
}

criterion_group!(benches, bench_bounding_box, bench_analyze_bytes);
criterion_main!(benches);
