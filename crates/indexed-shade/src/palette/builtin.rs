//! Compiled-in default color table.
//!
//! The table is laid out so the lighting transforms reduce to index
//! arithmetic. Index bits, high to low:
//!
//! ```text
//! bank (3 bits) | underwater (1 bit) | color (4 bits)
//! ```
//!
//! - Banks 0..=7 repeat the same 32 colors at `(8 - bank) / 8` brightness,
//!   so `index + 32 * level` selects the same color in a darker bank.
//! - Bit 4 selects the underwater variant of a color: red pulled down hard,
//!   green softened, blue lifted toward the water tint.
//! - Entry 255 (darkest underwater white) is replaced by pure black: it is
//!   the reserved sentinel that darkening saturates to.
//!
//! The 16 base colors are the classic EGA hardware palette.

/// 256 `[R, G, B]` entries, indexed by the bank/underwater/color layout
/// described in the module docs.
pub(super) const BUILT_IN: [[u8; 3]; 256] = [
    // Bank 0 (full brightness)
    [0, 0, 0], [0, 0, 170], [0, 170, 0], [0, 170, 170],
    [170, 0, 0], [170, 0, 170], [170, 85, 0], [170, 170, 170],
    [85, 85, 85], [85, 85, 255], [85, 255, 85], [85, 255, 255],
    [255, 85, 85], [255, 85, 255], [255, 255, 85], [255, 255, 255],
    [0, 0, 40], [0, 0, 193], [0, 119, 40], [0, 119, 193],
    [51, 0, 40], [51, 0, 193], [51, 59, 40], [51, 119, 193],
    [25, 59, 116], [25, 59, 255], [25, 178, 116], [25, 178, 255],
    [76, 59, 116], [76, 59, 255], [76, 178, 116], [76, 178, 255],
    // Bank 1
    [0, 0, 0], [0, 0, 148], [0, 148, 0], [0, 148, 148],
    [148, 0, 0], [148, 0, 148], [148, 74, 0], [148, 148, 148],
    [74, 74, 74], [74, 74, 223], [74, 223, 74], [74, 223, 223],
    [223, 74, 74], [223, 74, 223], [223, 223, 74], [223, 223, 223],
    [0, 0, 35], [0, 0, 168], [0, 104, 35], [0, 104, 168],
    [44, 0, 35], [44, 0, 168], [44, 51, 35], [44, 104, 168],
    [21, 51, 101], [21, 51, 223], [21, 155, 101], [21, 155, 223],
    [66, 51, 101], [66, 51, 223], [66, 155, 101], [66, 155, 223],
    // Bank 2
    [0, 0, 0], [0, 0, 127], [0, 127, 0], [0, 127, 127],
    [127, 0, 0], [127, 0, 127], [127, 63, 0], [127, 127, 127],
    [63, 63, 63], [63, 63, 191], [63, 191, 63], [63, 191, 191],
    [191, 63, 63], [191, 63, 191], [191, 191, 63], [191, 191, 191],
    [0, 0, 30], [0, 0, 144], [0, 89, 30], [0, 89, 144],
    [38, 0, 30], [38, 0, 144], [38, 44, 30], [38, 89, 144],
    [18, 44, 87], [18, 44, 191], [18, 133, 87], [18, 133, 191],
    [57, 44, 87], [57, 44, 191], [57, 133, 87], [57, 133, 191],
    // Bank 3
    [0, 0, 0], [0, 0, 106], [0, 106, 0], [0, 106, 106],
    [106, 0, 0], [106, 0, 106], [106, 53, 0], [106, 106, 106],
    [53, 53, 53], [53, 53, 159], [53, 159, 53], [53, 159, 159],
    [159, 53, 53], [159, 53, 159], [159, 159, 53], [159, 159, 159],
    [0, 0, 25], [0, 0, 120], [0, 74, 25], [0, 74, 120],
    [31, 0, 25], [31, 0, 120], [31, 36, 25], [31, 74, 120],
    [15, 36, 72], [15, 36, 159], [15, 111, 72], [15, 111, 159],
    [47, 36, 72], [47, 36, 159], [47, 111, 72], [47, 111, 159],
    // Bank 4
    [0, 0, 0], [0, 0, 85], [0, 85, 0], [0, 85, 85],
    [85, 0, 0], [85, 0, 85], [85, 42, 0], [85, 85, 85],
    [42, 42, 42], [42, 42, 127], [42, 127, 42], [42, 127, 127],
    [127, 42, 42], [127, 42, 127], [127, 127, 42], [127, 127, 127],
    [0, 0, 20], [0, 0, 96], [0, 59, 20], [0, 59, 96],
    [25, 0, 20], [25, 0, 96], [25, 29, 20], [25, 59, 96],
    [12, 29, 58], [12, 29, 127], [12, 89, 58], [12, 89, 127],
    [38, 29, 58], [38, 29, 127], [38, 89, 58], [38, 89, 127],
    // Bank 5
    [0, 0, 0], [0, 0, 63], [0, 63, 0], [0, 63, 63],
    [63, 0, 0], [63, 0, 63], [63, 31, 0], [63, 63, 63],
    [31, 31, 31], [31, 31, 95], [31, 95, 31], [31, 95, 95],
    [95, 31, 31], [95, 31, 95], [95, 95, 31], [95, 95, 95],
    [0, 0, 15], [0, 0, 72], [0, 44, 15], [0, 44, 72],
    [19, 0, 15], [19, 0, 72], [19, 22, 15], [19, 44, 72],
    [9, 22, 43], [9, 22, 95], [9, 66, 43], [9, 66, 95],
    [28, 22, 43], [28, 22, 95], [28, 66, 43], [28, 66, 95],
    // Bank 6
    [0, 0, 0], [0, 0, 42], [0, 42, 0], [0, 42, 42],
    [42, 0, 0], [42, 0, 42], [42, 21, 0], [42, 42, 42],
    [21, 21, 21], [21, 21, 63], [21, 63, 21], [21, 63, 63],
    [63, 21, 21], [63, 21, 63], [63, 63, 21], [63, 63, 63],
    [0, 0, 10], [0, 0, 48], [0, 29, 10], [0, 29, 48],
    [12, 0, 10], [12, 0, 48], [12, 14, 10], [12, 29, 48],
    [6, 14, 29], [6, 14, 63], [6, 44, 29], [6, 44, 63],
    [19, 14, 29], [19, 14, 63], [19, 44, 29], [19, 44, 63],
    // Bank 7 (darkest; final entry is the black sentinel)
    [0, 0, 0], [0, 0, 21], [0, 21, 0], [0, 21, 21],
    [21, 0, 0], [21, 0, 21], [21, 10, 0], [21, 21, 21],
    [10, 10, 10], [10, 10, 31], [10, 31, 10], [10, 31, 31],
    [31, 10, 10], [31, 10, 31], [31, 31, 10], [31, 31, 31],
    [0, 0, 5], [0, 0, 24], [0, 14, 5], [0, 14, 24],
    [6, 0, 5], [6, 0, 24], [6, 7, 5], [6, 14, 24],
    [3, 7, 14], [3, 7, 31], [3, 22, 14], [3, 22, 31],
    [9, 7, 14], [9, 7, 31], [9, 22, 14], [0, 0, 0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_256_entries() {
        assert_eq!(BUILT_IN.len(), 256);
    }

    #[test]
    fn test_sentinel_entry_is_black() {
        assert_eq!(BUILT_IN[255], [0, 0, 0]);
    }

    #[test]
    fn test_banks_darken_monotonically() {
        // For every color slot, the channel values must never increase
        // from one bank to the next. This is what makes the additive
        // darkness offset produce a darker rendition of the same color.
        for slot in 0..32 {
            for bank in 0..7 {
                let lighter = BUILT_IN[bank * 32 + slot];
                let darker = BUILT_IN[(bank + 1) * 32 + slot];
                // Slot 31 of bank 7 is the forced sentinel, skip it.
                if (bank + 1) * 32 + slot == 255 {
                    continue;
                }
                for ch in 0..3 {
                    assert!(
                        darker[ch] <= lighter[ch],
                        "slot {} channel {} brightens from bank {} to {}",
                        slot,
                        ch,
                        bank,
                        bank + 1
                    );
                }
            }
        }
    }

    #[test]
    fn test_underwater_half_suppresses_red() {
        // Every underwater variant must carry no more red than its dry
        // counterpart; the tint pulls colors toward blue-green.
        for bank in 0..8 {
            for color in 0..16 {
                let dry = BUILT_IN[bank * 32 + color];
                let wet = BUILT_IN[bank * 32 + 16 + color];
                if bank * 32 + 16 + color == 255 {
                    continue;
                }
                assert!(
                    wet[0] <= dry[0],
                    "underwater variant of bank {} color {} has more red",
                    bank,
                    color
                );
            }
        }
    }
}
