//! Underwater tint over index buffers.

/// Index bit selecting the underwater variant of a color. Within each
/// palette bank, entries 16..=31 are the underwater renditions of
/// entries 0..=15.
pub const UNDERWATER_BIT: u8 = 0x10;

/// Apply (or skip) the underwater tint.
///
/// When `enabled`, sets [`UNDERWATER_BIT`] on every index, switching each
/// pixel to the underwater variant of its color. When disabled the buffer
/// is returned unchanged: the transform only ever sets the bit, it never
/// clears it. Callers that want a symmetric toggle must recompute the lit
/// buffer from the base buffer before re-applying the tint, which is what
/// [`ShadeSession`](crate::ShadeSession) does on every state change.
///
/// Applying the tint twice is idempotent (`v | 0x10 | 0x10 == v | 0x10`).
///
/// # Example
///
/// ```
/// use indexed_shade::apply_underwater;
///
/// let lit = [0u8, 16, 255];
/// assert_eq!(apply_underwater(&lit, true), vec![16, 16, 255]);
/// assert_eq!(apply_underwater(&lit, false), vec![0, 16, 255]);
/// ```
pub fn apply_underwater(indices: &[u8], enabled: bool) -> Vec<u8> {
    if !enabled {
        return indices.to_vec();
    }
    indices.iter().map(|&v| v | UNDERWATER_BIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_bit_on_every_value() {
        let lit: Vec<u8> = (0..=255).collect();
        let tinted = apply_underwater(&lit, true);
        for (&before, &after) in lit.iter().zip(tinted.iter()) {
            assert_eq!(after, before | UNDERWATER_BIT);
        }
    }

    #[test]
    fn test_disabled_is_identity() {
        let lit = [0u8, 16, 31, 255];
        assert_eq!(apply_underwater(&lit, false), lit.to_vec());
    }

    #[test]
    fn test_already_tinted_values_unchanged() {
        let lit = [0u8, 16, 255];
        // 16 already has the bit set; 255 has every bit set.
        assert_eq!(apply_underwater(&lit, true), vec![16, 16, 255]);
    }

    #[test]
    fn test_idempotent() {
        let lit: Vec<u8> = (0..=255).step_by(7).collect();
        let once = apply_underwater(&lit, true);
        let twice = apply_underwater(&once, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_disabled_does_not_clear_bit() {
        // Toggle-off is deliberately not the inverse of toggle-on; the
        // session recomputes from the base buffer to untint.
        let tinted = apply_underwater(&[3u8], true);
        assert_eq!(tinted, vec![19]);
        assert_eq!(apply_underwater(&tinted, false), vec![19]);
    }

    #[test]
    fn test_preserves_length() {
        let lit = vec![7u8; 33];
        assert_eq!(apply_underwater(&lit, true).len(), 33);
    }
}
