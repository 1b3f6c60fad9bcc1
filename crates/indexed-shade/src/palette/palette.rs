//! Palette struct with nearest-color matching.
//!
//! This module provides the core `Palette` type: a fixed, ordered table of
//! 256 RGB entries with a luminance-weighted nearest-color search.

use std::str::FromStr;

use super::builtin::BUILT_IN;
use super::error::PaletteError;
use crate::color::Rgb;

/// Number of entries every palette must hold.
pub const PALETTE_SIZE: usize = 256;

/// The reserved sentinel index. Darkening saturates to this entry instead
/// of wrapping, so the entry must be black.
pub const BLACK_INDEX: u8 = 255;

// Channel weights for the distance metric, approximating human luminance
// sensitivity. Green dominates, blue matters least.
const WEIGHT_R: f64 = 0.30;
const WEIGHT_G: f64 = 0.59;
const WEIGHT_B: f64 = 0.11;

/// A fixed 256-entry color palette with weighted nearest-color matching.
///
/// Immutable after construction. Index values produced by the quantizer
/// and the lighting transforms always refer to entries of this table.
///
/// # Validation
///
/// Construction enforces the two structural invariants the index
/// transforms rely on:
///
/// - exactly [`PALETTE_SIZE`] entries, so every `u8` is a valid index;
/// - entry [`BLACK_INDEX`] is pure black, so saturating a darkened index
///   at 255 renders as black.
///
/// Duplicate colors are allowed: a darkness-banked layout legitimately
/// repeats colors across banks.
///
/// # Example
///
/// ```
/// use indexed_shade::{Palette, Rgb};
///
/// let palette = Palette::built_in();
/// assert_eq!(palette.len(), 256);
/// assert_eq!(palette.color(255), Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a new palette from RGB colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` does not hold exactly 256 entries
    ///   ([`PaletteError::WrongLength`])
    /// - entry 255 is not black ([`PaletteError::SentinelNotBlack`])
    ///
    /// # Example
    ///
    /// ```
    /// use indexed_shade::{Palette, Rgb};
    ///
    /// // Grayscale ramp with the final entry forced to the black sentinel.
    /// let mut colors: Vec<Rgb> = (0..=255u8).map(|v| Rgb::new(v, v, v)).collect();
    /// colors[255] = Rgb::new(0, 0, 0);
    /// let palette = Palette::new(&colors).unwrap();
    /// assert_eq!(palette.len(), 256);
    /// ```
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongLength {
                expected: PALETTE_SIZE,
                actual: colors.len(),
            });
        }

        let sentinel = colors[BLACK_INDEX as usize];
        if sentinel != Rgb::new(0, 0, 0) {
            return Err(PaletteError::SentinelNotBlack { color: sentinel });
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from 256 hex color strings.
    ///
    /// This is a convenience constructor that parses hex strings like
    /// `"#FF0000"` or `"#F00"` and creates a palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for validation failures.
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed: Vec<Rgb> = colors
            .iter()
            .map(|s| Rgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// The compiled-in default palette.
    ///
    /// Eight darkness banks of 16 base colors plus 16 underwater variants
    /// each; see the crate docs for the full layout. This is the table the
    /// preview harness ships with when no palette file is supplied.
    pub fn built_in() -> Self {
        Self {
            colors: BUILT_IN.iter().map(|&c| Rgb::from_bytes(c)).collect(),
        }
    }

    /// Returns the number of colors in the palette (always 256).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since the entry count is
    /// validated at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: u8) -> Rgb {
        self.colors[idx as usize]
    }

    /// Compute the weighted squared distance between two colors.
    ///
    /// The metric is a luminance-weighted squared Euclidean distance:
    /// `0.30 * dr^2 + 0.59 * dg^2 + 0.11 * db^2`. Green differences weigh
    /// most because human vision is most sensitive to them. The result is
    /// only meaningful for comparison; it is not a perceptual delta-E.
    #[inline]
    pub fn distance(a: Rgb, b: Rgb) -> f64 {
        let dr = f64::from(a.r) - f64::from(b.r);
        let dg = f64::from(a.g) - f64::from(b.g);
        let db = f64::from(a.b) - f64::from(b.b);
        WEIGHT_R * dr * dr + WEIGHT_G * dg * dg + WEIGHT_B * db * db
    }

    /// Find the nearest palette entry to the given color.
    ///
    /// Linear scan over all 256 entries; with a palette this small a
    /// spatial acceleration structure does not pay for itself. Ties are
    /// broken toward the lowest index: a later entry replaces the current
    /// best only when its distance is strictly lower.
    ///
    /// # Example
    ///
    /// ```
    /// use indexed_shade::{Palette, Rgb};
    ///
    /// let palette = Palette::built_in();
    /// // Pure black is entry 0 of the built-in table.
    /// assert_eq!(palette.find_nearest(Rgb::new(0, 0, 0)), 0);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> u8 {
        let mut best_idx = 0u8;
        let mut best_dist = f64::INFINITY;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = Self::distance(entry, color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i as u8;
            }
        }

        best_idx
    }
}
