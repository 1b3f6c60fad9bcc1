//! Validated view of a decoded 24-bit pixel buffer.
//!
//! Source images store three bytes per pixel in **B,G,R** order, row-major
//! with no padding. [`RgbFrame`] checks the format and dimensions once at
//! construction and then hands out whole [`Rgb`](crate::Rgb) pixels, so no
//! downstream code does offset arithmetic on the raw bytes.

use std::fmt;

use crate::color::Rgb;

/// Bits per pixel the quantizer accepts. Anything else is a caller bug,
/// not a recoverable condition.
const FRAME_BPP: u16 = 24;

/// Error type for pixel-buffer validation.
///
/// Both variants indicate caller-input bugs: the operation is rejected and
/// must not be retried with the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Source buffer is not 24-bit RGB
    FormatMismatch {
        /// Bits per pixel actually supplied
        bits_per_pixel: u16,
    },
    /// Byte count does not agree with the stated dimensions
    DimensionMismatch {
        /// Pixel count implied by width and height
        expected: usize,
        /// Pixel count the byte buffer actually holds
        actual: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::FormatMismatch { bits_per_pixel } => {
                write!(
                    f,
                    "source buffer is {}-bit, expected {}-bit RGB",
                    bits_per_pixel, FRAME_BPP
                )
            }
            FrameError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimensions require {} pixels but buffer holds {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// A borrowed, validated view of a 24-bit pixel buffer.
///
/// Byte layout is B,G,R per pixel, row-major, no row padding. The view
/// does not own the bytes; it lives no longer than the decoded image it
/// was created from.
///
/// # Example
///
/// ```
/// use indexed_shade::{Rgb, RgbFrame};
///
/// // One blue pixel followed by one red pixel.
/// let bytes = [255u8, 0, 0, 0, 0, 255];
/// let frame = RgbFrame::from_bgr24(&bytes, 2, 1).unwrap();
///
/// assert_eq!(frame.pixel(0), Rgb::new(0, 0, 255));
/// assert_eq!(frame.pixel(1), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbFrame<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbFrame<'a> {
    /// Create a frame view, validating format and dimensions.
    ///
    /// # Errors
    ///
    /// - [`FrameError::FormatMismatch`] if `bits_per_pixel` is not 24
    /// - [`FrameError::DimensionMismatch`] if `bytes` does not hold
    ///   exactly `width * height` pixels
    pub fn new(
        bytes: &'a [u8],
        width: usize,
        height: usize,
        bits_per_pixel: u16,
    ) -> Result<Self, FrameError> {
        if bits_per_pixel != FRAME_BPP {
            return Err(FrameError::FormatMismatch { bits_per_pixel });
        }

        let expected = width * height;
        let actual = bytes.len() / 3;
        if bytes.len() % 3 != 0 || actual != expected {
            return Err(FrameError::DimensionMismatch { expected, actual });
        }

        Ok(Self {
            bytes,
            width,
            height,
        })
    }

    /// Create a frame view over bytes known to be B,G,R-packed 24-bit.
    ///
    /// Dimension validation still applies.
    pub fn from_bgr24(bytes: &'a [u8], width: usize, height: usize) -> Result<Self, FrameError> {
        Self::new(bytes, width, height, FRAME_BPP)
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Read the pixel at the given row-major position.
    ///
    /// Bytes are stored B,G,R; the returned [`Rgb`] has the channels in
    /// their conventional order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= pixel_count()`.
    #[inline]
    pub fn pixel(&self, i: usize) -> Rgb {
        let offset = i * 3;
        Rgb::new(
            self.bytes[offset + 2],
            self.bytes[offset + 1],
            self.bytes[offset],
        )
    }
}
