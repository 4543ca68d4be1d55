//! ETC1 intensity modifier tables.

/// One row of the modifier table, indexed by a pixel's 2-bit modifier index.
///
/// Index bit 0 selects the small/large magnitude, bit 1 selects the sign.
pub type ModifierRow = [i32; 4];

/// The 8 intensity modifier rows, selected per sub-block by a 3-bit selector.
pub const MODIFIER_TABLES: [ModifierRow; 8] = [
    [2, 8, -2, -8],
    [5, 17, -5, -17],
    [9, 29, -9, -29],
    [13, 42, -13, -42],
    [18, 60, -18, -60],
    [24, 80, -24, -80],
    [33, 106, -33, -106],
    [47, 183, -47, -183],
];

/// Returns the modifier row for a 3-bit table selector.
///
/// Only the low 3 bits of `selector` are used.
#[inline(always)]
pub fn modifier_row(selector: u8) -> &'static ModifierRow {
    &MODIFIER_TABLES[usize::from(selector & 0b111)]
}
