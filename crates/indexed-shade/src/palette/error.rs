//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;
use std::num::ParseIntError;

use crate::color::Rgb;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette validation.
///
/// Returned when the palette configuration is invalid: the wrong number of
/// entries, a non-black sentinel entry, or an unparseable color string.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Palette does not hold exactly the required number of entries
    WrongLength {
        /// Required entry count (always 256)
        expected: usize,
        /// Entry count actually supplied
        actual: usize,
    },
    /// The reserved sentinel entry (index 255) is not black
    SentinelNotBlack {
        /// The color found at the sentinel index
        color: Rgb,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongLength { expected, actual } => {
                write!(
                    f,
                    "palette must hold exactly {} entries, got {}",
                    expected, actual
                )
            }
            PaletteError::SentinelNotBlack { color } => {
                write!(
                    f,
                    "palette entry 255 is reserved as the black sentinel, got #{:02X}{:02X}{:02X}",
                    color.r, color.g, color.b
                )
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
