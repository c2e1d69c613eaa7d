// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo normalizer: decode, EXIF auto-rotate, force portrait, and reduce to a
// single-channel grayscale raster. Resolution is preserved; nothing is scaled
// or cropped here.

use std::io::Cursor;

use image::{DynamicImage, ImageError};
use tickscan_core::{RasterImage, Result, TickscanError};
use tracing::{debug, info, instrument};

/// EXIF orientation value meaning "already upright".
pub const ORIENTATION_NORMAL: u32 = 1;

/// Normalization pipeline operating on a single decoded photo.
///
/// Each step consumes `self` and returns a new `PhotoNormalizer`, so the
/// pipeline reads as a chain:
///
/// ```ignore
/// let raster = PhotoNormalizer::from_bytes(&upload)?
///     .auto_orient()
///     .ensure_portrait()
///     .into_raster()?;
/// ```
pub struct PhotoNormalizer {
    /// The current working image.
    image: DynamicImage,
    /// EXIF orientation tag read from the encoded bytes (1 when absent).
    orientation: u32,
}

impl PhotoNormalizer {
    // -- Construction ---------------------------------------------------------

    /// Decode raw encoded bytes (JPEG, PNG, etc.) and read their EXIF orientation.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data).map_err(map_decode_error)?;
        let orientation = read_exif_orientation(data);
        debug!(
            width = image.width(),
            height = image.height(),
            orientation,
            "Photo decoded from bytes"
        );
        Ok(Self { image, orientation })
    }

    /// Read and decode a photo from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(&data)
    }

    /// Wrap an already-decoded image that carries no orientation metadata.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image,
            orientation: ORIENTATION_NORMAL,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn orientation(&self) -> u32 {
        self.orientation
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Apply the EXIF orientation so pixels match what a viewer would show.
    pub fn auto_orient(self) -> Self {
        if self.orientation != ORIENTATION_NORMAL {
            debug!(orientation = self.orientation, "Applying EXIF orientation");
        }
        Self {
            image: apply_orientation(self.image, self.orientation),
            orientation: ORIENTATION_NORMAL,
        }
    }

    /// Rotate 90 degrees clockwise when the image is wider than tall.
    pub fn ensure_portrait(self) -> Self {
        if self.image.width() <= self.image.height() {
            return self;
        }
        info!(
            width = self.image.width(),
            height = self.image.height(),
            "Landscape photo, rotating to portrait"
        );
        Self {
            image: self.image.rotate90(),
            orientation: self.orientation,
        }
    }

    /// Reduce to 8-bit luma and hand back the flat pixel buffer.
    pub fn into_raster(self) -> Result<RasterImage> {
        let gray = self.image.to_luma8();
        let (width, height) = gray.dimensions();
        RasterImage::new(gray.into_raw(), width, height)
    }
}

/// Full normalization: decode, auto-rotate, force portrait, grayscale.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn normalize(data: &[u8]) -> Result<RasterImage> {
    let raster = PhotoNormalizer::from_bytes(data)?
        .auto_orient()
        .ensure_portrait()
        .into_raster()?;
    info!(
        width = raster.width(),
        height = raster.height(),
        "Photo normalized"
    );
    Ok(raster)
}

/// [`normalize`] for a photo on disk.
pub fn normalize_path(path: impl AsRef<std::path::Path>) -> Result<RasterImage> {
    PhotoNormalizer::open(path)?
        .auto_orient()
        .ensure_portrait()
        .into_raster()
}

/// Read the EXIF orientation tag (0x0112) from encoded bytes.
///
/// Returns [`ORIENTATION_NORMAL`] when there is no EXIF block or no tag.
pub fn read_exif_orientation(data: &[u8]) -> u32 {
    let mut cursor = Cursor::new(data);
    let Ok(reader) = exif::Reader::new().read_from_container(&mut cursor) else {
        return ORIENTATION_NORMAL;
    };
    reader
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(ORIENTATION_NORMAL)
}

/// Apply an EXIF orientation value to a decoded image.
///
/// 1 = normal, 2 = mirrored, 3 = 180, 4 = flipped vertically,
/// 5 = mirrored + 90 CW, 6 = 90 CW, 7 = mirrored + 270 CW, 8 = 270 CW.
/// Unknown values leave the image untouched.
pub fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}

/// Photo-level codec failures become `Decode`; encoder or parameter failures
/// cannot come from user input and are reported as unexpected.
fn map_decode_error(err: ImageError) -> TickscanError {
    match err {
        ImageError::Encoding(_) | ImageError::Parameter(_) => {
            TickscanError::Unexpected(format!("image codec failure: {err}"))
        }
        _ => TickscanError::Decode(err.to_string()),
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::encode_png;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn marked_corner(width: u32, height: u32) -> DynamicImage {
        // Single dark pixel at the top-left so rotations are observable.
        let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
        img.put_pixel(0, 0, Luma([0u8]));
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn garbage_bytes_are_decode_errors() {
        let err = normalize(b"definitely not an image").unwrap_err();
        assert!(matches!(err, TickscanError::Decode(_)), "got {err:?}");
        assert!(err.is_user_actionable());
    }

    #[test]
    fn empty_buffer_is_decode_error() {
        assert!(matches!(normalize(&[]), Err(TickscanError::Decode(_))));
    }

    #[test]
    fn portrait_photo_keeps_dimensions() {
        let png = encode_png(&GrayImage::from_pixel(30, 50, Luma([200u8])));
        let raster = normalize(&png).unwrap();
        assert_eq!((raster.width(), raster.height()), (30, 50));
        assert_eq!(raster.pixels().len(), 30 * 50);
    }

    #[test]
    fn landscape_photo_is_rotated_clockwise() {
        let landscape = marked_corner(50, 30);
        let raster = PhotoNormalizer::from_dynamic(landscape)
            .ensure_portrait()
            .into_raster()
            .unwrap();
        assert_eq!((raster.width(), raster.height()), (30, 50));
        // Clockwise rotation moves the top-left pixel to the top-right.
        assert_eq!(raster.get(29, 0), Some(0));
        assert_eq!(raster.get(0, 0), Some(255));
    }

    #[test]
    fn square_photo_is_left_alone() {
        let raster = PhotoNormalizer::from_dynamic(marked_corner(40, 40))
            .ensure_portrait()
            .into_raster()
            .unwrap();
        assert_eq!(raster.get(0, 0), Some(0));
    }

    #[test]
    fn color_photo_is_reduced_to_luma() {
        let rgb = RgbImage::from_pixel(10, 20, Rgb([255, 255, 255]));
        let raster = PhotoNormalizer::from_dynamic(DynamicImage::ImageRgb8(rgb))
            .into_raster()
            .unwrap();
        assert!(raster.pixels().iter().all(|&p| p == 255));
    }

    #[test]
    fn png_without_exif_reads_normal_orientation() {
        let png = encode_png(&GrayImage::from_pixel(10, 10, Luma([128u8])));
        assert_eq!(read_exif_orientation(&png), ORIENTATION_NORMAL);
    }

    #[test]
    fn orientation_six_swaps_dimensions() {
        let result = apply_orientation(marked_corner(10, 20), 6);
        assert_eq!((result.width(), result.height()), (20, 10));
    }

    #[test]
    fn orientation_eight_moves_corner_to_bottom_left() {
        let result = apply_orientation(marked_corner(10, 20), 8).to_luma8();
        assert_eq!((result.width(), result.height()), (20, 10));
        assert_eq!(result.get_pixel(0, 9).0[0], 0);
    }

    #[test]
    fn orientation_mirror_keeps_dimensions() {
        let result = apply_orientation(marked_corner(10, 20), 2).to_luma8();
        assert_eq!((result.width(), result.height()), (10, 20));
        assert_eq!(result.get_pixel(9, 0).0[0], 0);
    }

    #[test]
    fn unknown_orientation_is_identity() {
        let result = apply_orientation(marked_corner(10, 20), 99).to_luma8();
        assert_eq!(result.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = normalize_path(dir.path().join("missing.jpg")).unwrap_err();
        assert!(matches!(err, TickscanError::Io(_)));
        assert!(!err.is_user_actionable());
    }
}
