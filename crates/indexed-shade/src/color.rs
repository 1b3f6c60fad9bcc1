//! 24-bit RGB color type.
//!
//! [`Rgb`] is the input side of the pipeline: decoded image pixels and
//! palette entries are plain 8-bit-per-channel RGB triples. All arithmetic
//! on colors happens in the palette's distance metric; this type only
//! carries the channels.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// A 24-bit RGB color with 8-bit channels.
///
/// Use this type for palette entries and decoded pixels. Values map
/// directly to the 0..=255 byte range of the source image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use indexed_shade::Rgb;
    /// let white = Rgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white.r, 255);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an RGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_shade::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 255);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Length is counted in bytes and the digit pairs are sliced by
        // byte offset, so multi-byte characters must be rejected before
        // slicing can land inside one.
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let (r, g, b) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16)?,
                u8::from_str_radix(&s[2..4], 16)?,
                u8::from_str_radix(&s[4..6], 16)?,
            ),
            3 => {
                // Shorthand: each digit doubles, F00 -> FF0000
                let r = u8::from_str_radix(&s[0..1], 16)?;
                let g = u8::from_str_radix(&s[1..2], 16)?;
                let b = u8::from_str_radix(&s[2..3], 16)?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(ParseColorError::InvalidLength),
        };

        Ok(Rgb::new(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_bytes_round_trip() {
        let color = Rgb::new(12, 34, 56);
        assert_eq!(color.to_bytes(), [12, 34, 56]);
        assert_eq!(Rgb::from_bytes([12, 34, 56]), color);
    }

    #[test]
    fn test_parse_6digit() {
        let color: Rgb = "#1A2B3C".parse().unwrap();
        assert_eq!(color, Rgb::new(0x1A, 0x2B, 0x3C));
    }

    #[test]
    fn test_parse_without_hash() {
        let color: Rgb = "AABBCC".parse().unwrap();
        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_parse_shorthand() {
        let color: Rgb = "#F0A".parse().unwrap();
        assert_eq!(color, Rgb::new(255, 0, 0xAA));
    }

    #[test]
    fn test_parse_case_insensitive() {
        let upper: Rgb = "#ABCDEF".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let color: Rgb = "  #102030  ".parse().unwrap();
        assert_eq!(color, Rgb::new(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_parse_invalid_length() {
        let result = "#12345".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));
    }

    #[test]
    fn test_parse_invalid_hex() {
        let result = "#ZZZZZZ".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_multibyte_character_is_rejected() {
        // 5 characters but 6 bytes; slicing digit pairs by byte offset
        // would split the two-byte character. Must error, not panic.
        let result = "1\u{e9}234".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));

        // Same trap in the 3-digit shorthand path (2 chars, 3 bytes).
        let result = "\u{e9}4".parse::<Rgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));
    }
}
