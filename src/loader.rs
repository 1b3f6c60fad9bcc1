//! Image file decoding for the preview window.
//!
//! Decoded pixels are repacked into the B,G,R byte layout the quantizer
//! reads, so a dropped file and a raw 24-bit buffer go through the same
//! pipeline.

use std::path::Path;

use image::DynamicImage;
use indexed_shade::{FrameError, RgbFrame};

use crate::error::ViewerError;

/// A decoded image held in the B,G,R byte layout.
#[derive(Debug)]
pub struct LoadedFrame {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
}

impl LoadedFrame {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow the pixel data as a frame ready for quantization.
    pub fn as_frame(&self) -> Result<RgbFrame<'_>, FrameError> {
        RgbFrame::from_bgr24(&self.bytes, self.width, self.height)
    }
}

/// Decode an image file into a 24-bit B,G,R frame.
///
/// Only 8-bit RGB sources are accepted. Anything else (RGBA, grayscale,
/// 16-bit) is reported as a format mismatch rather than silently
/// converted, matching the strictness of [`RgbFrame::new`].
pub fn load_bgr24(path: &Path) -> Result<LoadedFrame, ViewerError> {
    let decoded = image::open(path)?;
    let rgb = match decoded {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            return Err(FrameError::FormatMismatch {
                bits_per_pixel: other.color().bits_per_pixel(),
            }
            .into())
        }
    };

    let (width, height) = rgb.dimensions();
    let mut bytes = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        bytes.extend_from_slice(&[b, g, r]);
    }

    Ok(LoadedFrame {
        bytes,
        width: width as usize,
        height: height as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb as ImageRgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_load_repacks_to_bgr() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, ImageRgb([10, 20, 30]));
        img.put_pixel(1, 0, ImageRgb([200, 100, 50]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.png");
        img.save(&path).unwrap();

        let loaded = load_bgr24(&path).unwrap();
        assert_eq!(loaded.width(), 2);
        assert_eq!(loaded.height(), 1);
        assert_eq!(loaded.bytes, vec![30, 20, 10, 50, 100, 200]);
    }

    #[test]
    fn test_load_rejects_rgba_source() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 128]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        img.save(&path).unwrap();

        let error = load_bgr24(&path).unwrap_err();
        assert!(error.to_string().contains("32"), "got: {error}");
    }

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let error = load_bgr24(Path::new("/nonexistent/nope.png")).unwrap_err();
        match error {
            ViewerError::Decode(_) => {}
            other => panic!("Expected Decode variant, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_frame_feeds_quantizer() {
        let mut img = RgbImage::new(1, 1);
        img.put_pixel(0, 0, ImageRgb([255, 0, 0]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        img.save(&path).unwrap();

        let loaded = load_bgr24(&path).unwrap();
        let frame = loaded.as_frame().unwrap();
        assert_eq!(frame.pixel(0), indexed_shade::Rgb::new(255, 0, 0));
    }
}
