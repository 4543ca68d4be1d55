#![no_main]

// Arbitrary bytes must decode or fail cleanly, and a decoded texture must cover
// exactly width x height opaque pixels.

use libfuzzer_sys::fuzz_target;
use mh4u_assets_tex::decode_texture;

fuzz_target!(|data: &[u8]| {
    if let Ok(texture) = decode_texture(data) {
        let (width, height) = (texture.header.width(), texture.header.height());
        assert_eq!(texture.pixels.width(), width);
        assert_eq!(texture.pixels.height(), height);
        assert_eq!(texture.pixels.pixels().len(), (width * height) as usize);
        assert!(texture.pixels.pixels().iter().all(|pixel| pixel[3] == 1.0));
    }
});
