//! Unified error type for the indexed-shade public API.
//!
//! [`ShadeError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::palette::{PaletteError, ParseColorError};
use crate::quantize::FrameError;
use crate::shade::InvalidLevelError;

/// Unified error type for the indexed-shade public API.
///
/// Every variant is a caller-input-validation failure: nothing here is
/// transient, nothing should be retried, and the state that existed
/// before the failing call is always preserved.
///
/// # Example
///
/// ```
/// use indexed_shade::{Palette, ShadeError};
///
/// fn palette_from_config(hex: &[&str]) -> Result<Palette, ShadeError> {
///     let palette = Palette::from_hex(hex)?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum ShadeError {
    /// Palette validation error (wrong length, bad sentinel, parse failure)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Pixel-buffer validation error (format or dimension mismatch)
    Frame(FrameError),
    /// Darkness level outside the valid range
    InvalidLevel(InvalidLevelError),
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeError::Palette(err) => write!(f, "palette error: {}", err),
            ShadeError::ParseColor(err) => write!(f, "color parse error: {}", err),
            ShadeError::Frame(err) => write!(f, "frame error: {}", err),
            ShadeError::InvalidLevel(err) => write!(f, "level error: {}", err),
        }
    }
}

impl std::error::Error for ShadeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShadeError::Palette(err) => Some(err),
            ShadeError::ParseColor(err) => Some(err),
            ShadeError::Frame(err) => Some(err),
            ShadeError::InvalidLevel(err) => Some(err),
        }
    }
}

impl From<PaletteError> for ShadeError {
    fn from(err: PaletteError) -> Self {
        ShadeError::Palette(err)
    }
}

impl From<ParseColorError> for ShadeError {
    fn from(err: ParseColorError) -> Self {
        ShadeError::ParseColor(err)
    }
}

impl From<FrameError> for ShadeError {
    fn from(err: FrameError) -> Self {
        ShadeError::Frame(err)
    }
}

impl From<InvalidLevelError> for ShadeError {
    fn from(err: InvalidLevelError) -> Self {
        ShadeError::InvalidLevel(err)
    }
}
