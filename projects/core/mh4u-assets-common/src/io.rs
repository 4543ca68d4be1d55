//! Bounded reads from byte sources.

use std::io::{self, Read};
use std::vec::Vec;

const INITIAL_CAPACITY_LIMIT: usize = 64 * 1024;

/// Reads up to `len` bytes from `reader`, stopping early only at end of input.
///
/// Callers compare the returned length against `len` to detect truncated input,
/// which lets them report how many bytes were actually available.
pub fn read_up_to<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    // Lengths come from untrusted headers; grow on demand past the first chunk.
    let mut buf = Vec::with_capacity(len.min(INITIAL_CAPACITY_LIMIT));
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
