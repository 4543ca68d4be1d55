//! The 'block info' word of an ETC1 block.

use bitfield::bitfield;

bitfield! {
    /// Upper 32 bits of an ETC1 block; everything except the per-pixel indices.
    ///
    /// Bit layout:
    /// - Bit 0: Flip flag. Clear splits the block into left/right halves, set into top/bottom.
    /// - Bit 1: Differential mode flag.
    /// - Bits 2-4: Modifier table selector for sub-block 2.
    /// - Bits 5-7: Modifier table selector for sub-block 1.
    /// - Bits 8-31: Base colours, interpreted per mode:
    ///
    /// | Bits  | Individual mode | Differential mode     |
    /// |-------|-----------------|-----------------------|
    /// | 8-10  | B2 (8-11)       | dB (3-bit signed)     |
    /// | 11-15 | B1 (12-15)      | B (5-bit, 11-15)      |
    /// | 16-18 | G2 (16-19)      | dG (3-bit signed)     |
    /// | 19-23 | G1 (20-23)      | G (5-bit, 19-23)      |
    /// | 24-26 | R2 (24-27)      | dR (3-bit signed)     |
    /// | 27-31 | R1 (28-31)      | R (5-bit, 27-31)      |
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Etc1BlockInfo(u32);
    impl Debug;
    u32;

    /// Flip flag (bit 0)
    pub flip, _: 0;
    /// Differential mode flag (bit 1)
    pub differential, _: 1;
    /// Modifier table selector for sub-block 2 (bits 2-4)
    pub u8, table_selector_2, _: 4, 2;
    /// Modifier table selector for sub-block 1 (bits 5-7)
    pub u8, table_selector_1, _: 7, 5;

    /// Individual mode: blue of sub-block 2 (bits 8-11)
    pub u8, individual_b2, _: 11, 8;
    /// Individual mode: blue of sub-block 1 (bits 12-15)
    pub u8, individual_b1, _: 15, 12;
    /// Individual mode: green of sub-block 2 (bits 16-19)
    pub u8, individual_g2, _: 19, 16;
    /// Individual mode: green of sub-block 1 (bits 20-23)
    pub u8, individual_g1, _: 23, 20;
    /// Individual mode: red of sub-block 2 (bits 24-27)
    pub u8, individual_r2, _: 27, 24;
    /// Individual mode: red of sub-block 1 (bits 28-31)
    pub u8, individual_r1, _: 31, 28;

    /// Differential mode: raw 3-bit blue delta (bits 8-10)
    pub u8, delta_b, _: 10, 8;
    /// Differential mode: 5-bit blue base (bits 11-15)
    pub u8, base_b, _: 15, 11;
    /// Differential mode: raw 3-bit green delta (bits 16-18)
    pub u8, delta_g, _: 18, 16;
    /// Differential mode: 5-bit green base (bits 19-23)
    pub u8, base_g, _: 23, 19;
    /// Differential mode: raw 3-bit red delta (bits 24-26)
    pub u8, delta_r, _: 26, 24;
    /// Differential mode: 5-bit red base (bits 27-31)
    pub u8, base_r, _: 31, 27;
}

impl Etc1BlockInfo {
    /// Wraps a raw block info word.
    #[inline(always)]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw block info word.
    #[inline(always)]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Base colours of both sub-blocks, expanded to 8 bits per channel.
    ///
    /// Values are `i32` because in differential mode a malformed delta can push
    /// the second colour slightly outside `0..=255`; the final per-pixel clamp
    /// brings it back into range.
    pub fn base_colors(&self) -> [[i32; 3]; 2] {
        if self.differential() {
            let base = [self.base_r(), self.base_g(), self.base_b()].map(i32::from);
            let delta = [self.delta_r(), self.delta_g(), self.delta_b()].map(sign_extend_3);
            let second = [base[0] + delta[0], base[1] + delta[1], base[2] + delta[2]];
            [base.map(extend_5_to_8), second.map(extend_5_to_8)]
        } else {
            let first = [
                self.individual_r1(),
                self.individual_g1(),
                self.individual_b1(),
            ];
            let second = [
                self.individual_r2(),
                self.individual_g2(),
                self.individual_b2(),
            ];
            [first.map(extend_4_to_8), second.map(extend_4_to_8)]
        }
    }
}

/// Expands a 4-bit channel by replicating it into the low nibble.
#[inline(always)]
pub fn extend_4_to_8(value: u8) -> i32 {
    let value = i32::from(value);
    (value << 4) + value
}

/// Expands a 5-bit channel by replicating its top 3 bits into the low bits.
///
/// Accepts values outside `0..=31` (base + delta of a malformed block) and uses
/// arithmetic shifts, so `-1` becomes `-9` rather than wrapping.
#[inline(always)]
pub fn extend_5_to_8(value: i32) -> i32 {
    (value << 3) + (value >> 2)
}

/// Interprets a 3-bit two's complement value; `4..=7` map to `-4..=-1`.
#[inline(always)]
pub fn sign_extend_3(value: u8) -> i32 {
    i32::from(((value << 5) as i8) >> 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(4, -4)]
    #[case(5, -3)]
    #[case(7, -1)]
    fn sign_extend_3_matches_twos_complement(#[case] raw: u8, #[case] expected: i32) {
        assert_eq!(sign_extend_3(raw), expected);
    }

    #[test]
    fn extend_4_to_8_replicates_nibble() {
        for nibble in 0..16u8 {
            assert_eq!(extend_4_to_8(nibble), i32::from(nibble) * 17);
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(31, 255)]
    #[case(16, 132)]
    #[case(-1, -9)]
    #[case(32, 264)]
    fn extend_5_to_8_replicates_top_bits(#[case] raw: i32, #[case] expected: i32) {
        assert_eq!(extend_5_to_8(raw), expected);
    }

    #[test]
    fn flag_and_selector_bits() {
        // flip | differential | table2 = 0b101 | table1 = 0b011
        let info = Etc1BlockInfo(0b011_101_1_1);
        assert!(info.flip());
        assert!(info.differential());
        assert_eq!(info.table_selector_2(), 0b101);
        assert_eq!(info.table_selector_1(), 0b011);
    }

    #[test]
    fn individual_mode_base_colors() {
        // R1=0xA R2=0x5 G1=0x3 G2=0xC B1=0xF B2=0x0
        let info = Etc1BlockInfo(0xA5_3C_F0_00);
        assert!(!info.differential());
        assert_eq!(
            info.base_colors(),
            [[0xAA, 0x33, 0xFF], [0x55, 0xCC, 0x00]]
        );
    }

    #[test]
    fn differential_mode_applies_signed_delta_before_expansion() {
        // R: base 16, delta +3 | G: base 16, delta -4 | B: base 0, delta -1
        let r = (16u32 << 3) | 3;
        let g = (16u32 << 3) | 4;
        let b = 7u32;
        let info = Etc1BlockInfo((r << 24) | (g << 16) | (b << 8) | 0b10);
        assert!(info.differential());

        let [first, second] = info.base_colors();
        assert_eq!(first, [132, 132, 0]);
        assert_eq!(
            second,
            [extend_5_to_8(19), extend_5_to_8(12), extend_5_to_8(-1)]
        );
        assert_eq!(second, [156, 99, -9]);
    }
}
