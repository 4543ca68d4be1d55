//! Block level decoding helpers.

mod etc1_decode;
pub use etc1_decode::*;
