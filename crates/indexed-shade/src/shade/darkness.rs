//! Progressive darkening of index buffers.
//!
//! Darkening shifts indices into higher (darker) palette banks by a fixed
//! stride per level, saturating at the black sentinel instead of wrapping.

use std::fmt;

use crate::palette::BLACK_INDEX;

/// Index offset added per darkness level. One level spans one palette
/// bank (16 dry + 16 underwater entries).
pub const LEVEL_STRIDE: u8 = 32;

/// Error type for out-of-range darkness levels.
///
/// A caller-input-validation failure; the previous level is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLevelError {
    /// The rejected level
    pub level: u8,
}

impl fmt::Display for InvalidLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "darkness level {} out of range (0..={})",
            self.level,
            DarknessLevel::MAX.get()
        )
    }
}

impl std::error::Error for InvalidLevelError {}

/// A validated darkness level in `0..=8`.
///
/// 0 is full brightness (identity mapping), 8 is fully dark (every index
/// maps to the black sentinel). The only way to obtain a value outside
/// the range is not to obtain one: [`DarknessLevel::new`] rejects it and
/// the stepping methods clamp.
///
/// # Example
///
/// ```
/// use indexed_shade::DarknessLevel;
///
/// let level = DarknessLevel::new(3).unwrap();
/// assert_eq!(level.darker().get(), 4);
/// assert_eq!(DarknessLevel::MAX.darker(), DarknessLevel::MAX);
/// assert!(DarknessLevel::new(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DarknessLevel(u8);

impl DarknessLevel {
    /// Full brightness.
    pub const MIN: DarknessLevel = DarknessLevel(0);
    /// Fully dark.
    pub const MAX: DarknessLevel = DarknessLevel(8);

    /// Create a level, rejecting values outside `0..=8`.
    pub fn new(level: u8) -> Result<Self, InvalidLevelError> {
        if level > Self::MAX.0 {
            return Err(InvalidLevelError { level });
        }
        Ok(Self(level))
    }

    /// The raw level value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// One step darker, clamped at [`DarknessLevel::MAX`].
    #[inline]
    pub fn darker(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One step brighter, clamped at [`DarknessLevel::MIN`].
    #[inline]
    pub fn brighter(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// The index offset this level adds to every pixel.
    ///
    /// `u16` because level 8 yields 256, which a `u8` cannot hold; that
    /// level forces every index past the saturation bound.
    #[inline]
    fn offset(self) -> u16 {
        u16::from(self.0) * u16::from(LEVEL_STRIDE)
    }
}

impl fmt::Display for DarknessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Darken an index buffer by the given level.
///
/// Each index `v` becomes `v + 32 * level`; any value that would pass 255
/// saturates at [`BLACK_INDEX`] instead of wrapping, which renders as
/// black. Level 0 is the identity; level 8 maps every pixel to the
/// sentinel.
///
/// Returns a fresh buffer; the input (the quantized base buffer) is left
/// untouched so later level changes can recompute from it.
///
/// # Example
///
/// ```
/// use indexed_shade::{apply_darkness, DarknessLevel};
///
/// let base = [5u8, 250, 0];
/// let level = DarknessLevel::new(2).unwrap();
/// assert_eq!(apply_darkness(&base, level), vec![69, 255, 64]);
/// ```
pub fn apply_darkness(indices: &[u8], level: DarknessLevel) -> Vec<u8> {
    let offset = level.offset();
    indices
        .iter()
        .map(|&v| {
            let shifted = u16::from(v) + offset;
            if shifted > u16::from(BLACK_INDEX) {
                BLACK_INDEX
            } else {
                shifted as u8
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        for level in 0..=8u8 {
            assert_eq!(DarknessLevel::new(level).unwrap().get(), level);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for level in [9u8, 10, 255] {
            assert_eq!(
                DarknessLevel::new(level),
                Err(InvalidLevelError { level })
            );
        }
    }

    #[test]
    fn test_darker_clamps_at_max() {
        let mut level = DarknessLevel::MIN;
        for _ in 0..20 {
            level = level.darker();
        }
        assert_eq!(level, DarknessLevel::MAX);
    }

    #[test]
    fn test_brighter_clamps_at_min() {
        let mut level = DarknessLevel::MAX;
        for _ in 0..20 {
            level = level.brighter();
        }
        assert_eq!(level, DarknessLevel::MIN);
    }

    #[test]
    fn test_level_zero_is_identity() {
        let indices: Vec<u8> = (0..=255).collect();
        assert_eq!(apply_darkness(&indices, DarknessLevel::MIN), indices);
    }

    #[test]
    fn test_level_eight_is_all_black() {
        let indices: Vec<u8> = (0..=255).collect();
        let lit = apply_darkness(&indices, DarknessLevel::MAX);
        assert!(lit.iter().all(|&v| v == BLACK_INDEX));
    }

    #[test]
    fn test_offset_and_saturation() {
        let base = [5u8, 250, 0];
        let lit = apply_darkness(&base, DarknessLevel::new(2).unwrap());
        // 5+64=69, 250+64 overflows -> sentinel, 0+64=64
        assert_eq!(lit, vec![69, 255, 64]);
    }

    #[test]
    fn test_saturation_boundary() {
        // At level 1 the boundary sits at 223: 223+32=255, 224+32 wraps.
        let level = DarknessLevel::new(1).unwrap();
        assert_eq!(apply_darkness(&[223], level), vec![255]);
        assert_eq!(apply_darkness(&[224], level), vec![255]);
        assert_eq!(apply_darkness(&[222], level), vec![254]);
    }

    #[test]
    fn test_monotone_in_level() {
        // Raising the level can never lower an output index.
        let indices: Vec<u8> = (0..=255).collect();
        let mut prev = apply_darkness(&indices, DarknessLevel::MIN);
        for raw in 1..=8u8 {
            let next = apply_darkness(&indices, DarknessLevel::new(raw).unwrap());
            for (a, b) in prev.iter().zip(next.iter()) {
                assert!(b >= a, "level {} lowered an index", raw);
            }
            prev = next;
        }
    }

    #[test]
    fn test_preserves_length() {
        let indices = vec![1u8; 97];
        let lit = apply_darkness(&indices, DarknessLevel::new(3).unwrap());
        assert_eq!(lit.len(), 97);
    }
}
