//! IndexedImage: palette indices with dimension metadata.

use crate::palette::Palette;

/// An 8-bit indexed pixel buffer.
///
/// Stores one `u8` palette index per pixel in row-major order. This is
/// the working representation throughout the pipeline: the quantizer
/// produces one, the lighting transforms consume and produce them, and
/// presentation flattens one to RGB via [`to_rgb()`](IndexedImage::to_rgb).
///
/// Unlike the source frame, an `IndexedImage` owns its buffer; the base
/// image outlives the decoded bytes it was quantized from.
///
/// # Example
///
/// ```
/// use indexed_shade::{IndexedImage, Palette};
///
/// let image = IndexedImage::new(vec![0, 15, 15, 0], 2, 2);
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
///
/// let rgb = image.to_rgb(&Palette::built_in());
/// assert_eq!(rgb.len(), 2 * 2 * 3);
/// assert_eq!(&rgb[3..6], &[255, 255, 255]); // entry 15 is white
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl IndexedImage {
    /// Create a new `IndexedImage` from palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// Returns the palette indices as a slice.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flatten to RGB bytes by looking up each index in the palette.
    ///
    /// Produces a `[R, G, B, R, G, B, ...]` buffer of length
    /// `width * height * 3`, suitable for handing to a presentation
    /// surface.
    pub fn to_rgb(&self, palette: &Palette) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let [r, g, b] = palette.color(idx).to_bytes();
            rgb.push(r);
            rgb.push(g);
            rgb.push(b);
        }
        rgb
    }
}
