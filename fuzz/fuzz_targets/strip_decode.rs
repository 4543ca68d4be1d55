#![no_main]

// Checks strip rebasing: every index decoded against a base is the raw index minus
// that base, and strict mode never disagrees with lenient mode when it succeeds.

use libfuzzer_sys::{arbitrary, fuzz_target};
use mh4u_assets_mod::strips::{decode_strips, decode_strips_with_mode, StripError, StripMode};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct StripInput {
    pub indices: Vec<u16>,
    pub base: u16,
}

fuzz_target!(|input: StripInput| {
    let base = u32::from(input.base);
    let raw = decode_strips(&input.indices, 0).expect("base 0 cannot underflow");

    match decode_strips(&input.indices, base) {
        Ok(rebased) => {
            assert_eq!(raw.len(), rebased.len());
            for (raw_triangle, triangle) in raw.iter().zip(&rebased) {
                for (r, t) in raw_triangle.iter().zip(triangle) {
                    assert_eq!(*t, *r - base);
                }
            }
        }
        Err(StripError::IndexBelowBase { index, .. }) => {
            assert!(u32::from(index) < base);
            assert!(input.indices.contains(&index));
        }
        Err(error) => panic!("Lenient decoding reported {error:?}"),
    }

    if let Ok(strict) = decode_strips_with_mode(&input.indices, 0, StripMode::Strict) {
        assert_eq!(strict, raw);
    }
});
