#![no_main]

// Checks that every decoded ETC1 pixel is its sub-block's base colour plus one
// modifier of the sub-block's row, and that ETC1A4 decodes its colour half identically.

use libfuzzer_sys::{arbitrary, fuzz_target};
use mh4u_assets_etc1::{decode_etc1_block_from_slice, decode_etc1a4_block_from_slice, Etc1Block};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Etc1A4Bytes {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Etc1A4Bytes| {
    let color_bytes: [u8; 8] = block.bytes[8..].try_into().unwrap();
    let decoded = decode_etc1_block_from_slice(&color_bytes).unwrap();
    let decoded_a4 = decode_etc1a4_block_from_slice(&block.bytes).unwrap();
    assert_eq!(decoded, decoded_a4, "ETC1A4 colour differs from ETC1: {block:?}");

    let etc1 = Etc1Block::from_bytes(color_bytes);
    let sub_blocks = etc1.sub_blocks();
    for pixel in 0..16 {
        let color = decoded.pixel(pixel / 4, pixel % 4);
        assert_eq!(color.a, 255);

        let sub_block = &sub_blocks[if etc1.in_first_sub_block(pixel) { 0 } else { 1 }];
        let matches_some_modifier = sub_block.modifiers.iter().any(|modifier| {
            let [r, g, b] = sub_block.base.map(|c| (c + modifier).clamp(0, 255) as u8);
            [color.r, color.g, color.b] == [r, g, b]
        });
        assert!(
            matches_some_modifier,
            "Pixel {pixel} ({color:?}) is not base {:?} plus a modifier of {:?}",
            sub_block.base, sub_block.modifiers
        );
    }
});
