//! Common test infrastructure for shadeview integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::path::PathBuf;

use image::{Rgb as ImageRgb, RgbImage};
use indexed_shade::{Palette, Rgb};
use tempfile::TempDir;

/// A temp directory holding generated test images. Files are removed when
/// the fixture is dropped.
pub struct ImageFixture {
    dir: TempDir,
}

impl ImageFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write a PNG with the given row-major (r, g, b) pixels.
    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        pixels: &[(u8, u8, u8)],
    ) -> PathBuf {
        assert_eq!(pixels.len(), (width * height) as usize);
        let mut img = RgbImage::new(width, height);
        for (i, &(r, g, b)) in pixels.iter().enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;
            img.put_pixel(x, y, ImageRgb([r, g, b]));
        }
        let path = self.dir.path().join(name);
        img.save(&path).expect("Failed to write test image");
        path
    }

    /// Write a PNG with an alpha channel, for format-rejection tests.
    pub fn write_rgba_png(&self, name: &str) -> PathBuf {
        let mut img = image::RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([1, 2, 3, 200]));
        let path = self.dir.path().join(name);
        img.save(&path).expect("Failed to write test image");
        path
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

/// 256-entry palette where entry N is the gray (N, N, N), except entry 255
/// which stays black. Makes quantization results easy to predict: gray
/// (v, v, v) maps straight to index v for v < 255.
pub fn gray_ramp_palette() -> Palette {
    let mut colors: Vec<Rgb> = (0..=255u16).map(|v| Rgb::new(v as u8, v as u8, v as u8)).collect();
    colors[255] = Rgb::new(0, 0, 0);
    Palette::new(&colors).expect("gray ramp is a valid palette")
}
