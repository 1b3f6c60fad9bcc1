//! Nearest-color quantization of RGB frames.

use super::frame::RgbFrame;
use crate::output::IndexedImage;
use crate::palette::Palette;

/// Quantize a 24-bit RGB frame to palette indices.
///
/// Every pixel is mapped to the nearest palette entry under the palette's
/// luminance-weighted distance metric ([`Palette::find_nearest`]). The
/// output buffer has the same dimensions as the frame.
///
/// Runs in O(width * height * 256): a plain linear scan per pixel, which
/// is fine at the frame sizes an interactive preview deals with.
///
/// # Example
///
/// ```
/// use indexed_shade::{quantize, Palette, RgbFrame};
///
/// let palette = Palette::built_in();
/// // Two pixels, B,G,R bytes: pure black and pure white.
/// let bytes = [0u8, 0, 0, 255, 255, 255];
/// let frame = RgbFrame::from_bgr24(&bytes, 2, 1).unwrap();
///
/// let image = quantize(&frame, &palette);
/// assert_eq!(image.indices(), &[0, 15]);
/// ```
pub fn quantize(frame: &RgbFrame<'_>, palette: &Palette) -> IndexedImage {
    let mut indices = Vec::with_capacity(frame.pixel_count());
    for i in 0..frame.pixel_count() {
        indices.push(palette.find_nearest(frame.pixel(i)));
    }
    IndexedImage::new(indices, frame.width(), frame.height())
}
