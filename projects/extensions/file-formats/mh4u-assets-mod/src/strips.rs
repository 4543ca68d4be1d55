//! Triangle strip reconstruction.
//!
//! A submesh's index stream is a series of triangle strips separated by
//! [`STRIP_RESTART`]. The first two indices of each strip prime it; every further index
//! closes a triangle with the previous two, alternating the winding so that all
//! triangles of a strip face the same way.
//!
//! ```
//! use mh4u_assets_mod::strips::{decode_strips, STRIP_RESTART};
//!
//! let triangles = decode_strips(&[10, 11, 12, 13, STRIP_RESTART, 15, 16, 17], 10).unwrap();
//! assert_eq!(triangles, vec![[0, 1, 2], [1, 3, 2], [5, 6, 7]]);
//! ```

use alloc::vec::Vec;
use thiserror::Error;

/// Index value that ends the current strip.
pub const STRIP_RESTART: u16 = 0xFFFF;

/// Three zero-based vertex indices.
pub type Triangle = [u32; 3];

/// How to treat a strip with too few indices to prime it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StripMode {
    /// Stop without error; what the game's importer has always done.
    #[default]
    Lenient,
    /// Report [`StripError::MalformedIndexStream`].
    Strict,
}

/// Errors produced while decoding strips.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Fewer than 2 indices were left to start a strip. Only reported in [`StripMode::Strict`].
    #[error("Malformed index stream: strip starting at index {position} has fewer than 2 indices")]
    MalformedIndexStream {
        /// Position in the stream where the strip would have started.
        position: usize,
    },

    /// An index is smaller than the submesh's first vertex.
    #[error("Index {index} is below the submesh base index {base}")]
    IndexBelowBase {
        /// The raw index.
        index: u16,
        /// The base it is rebased against.
        base: u32,
    },
}

#[derive(Debug, Clone, Copy)]
enum StripState {
    /// Waiting for the two indices that start a strip.
    Priming,
    /// Inside a strip; `f1`, `f2` are the last two indices.
    InStrip { f1: u16, f2: u16, reverse: bool },
    Finished,
}

/// Iterator over the triangles of an index stream.
///
/// Yields `Err` at most once, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct StripDecoder<'a> {
    indices: &'a [u16],
    cursor: usize,
    base_index: u32,
    mode: StripMode,
    state: StripState,
}

impl<'a> StripDecoder<'a> {
    /// Creates a decoder that subtracts `base_index` from every emitted index.
    pub fn new(indices: &'a [u16], base_index: u32, mode: StripMode) -> Self {
        Self {
            indices,
            cursor: 0,
            base_index,
            mode,
            state: StripState::Priming,
        }
    }

    /// Position of the next unread index.
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn rebase(&self, index: u16) -> Result<u32, StripError> {
        u32::from(index)
            .checked_sub(self.base_index)
            .ok_or(StripError::IndexBelowBase {
                index,
                base: self.base_index,
            })
    }

    fn emit(&self, raw: [u16; 3]) -> Result<Triangle, StripError> {
        let triangle = [
            self.rebase(raw[0])?,
            self.rebase(raw[1])?,
            self.rebase(raw[2])?,
        ];
        Ok(triangle)
    }

    fn fail(&mut self, error: StripError) -> Option<Result<Triangle, StripError>> {
        self.state = StripState::Finished;
        Some(Err(error))
    }
}

impl Iterator for StripDecoder<'_> {
    type Item = Result<Triangle, StripError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                StripState::Finished => return None,
                StripState::Priming => {
                    let start = self.cursor;
                    match self.indices.get(start..start + 2) {
                        Some(&[f1, f2]) => {
                            tracing::trace!(position = start, f1, f2, "strip start");
                            self.cursor += 2;
                            self.state = StripState::InStrip {
                                f1,
                                f2,
                                reverse: true,
                            };
                        }
                        _ => {
                            // An empty stream has no strips at all, so nothing is malformed.
                            if self.mode == StripMode::Strict && !self.indices.is_empty() {
                                return self
                                    .fail(StripError::MalformedIndexStream { position: start });
                            }
                            self.state = StripState::Finished;
                            return None;
                        }
                    }
                }
                StripState::InStrip { f1, f2, reverse } => {
                    let Some(&f3) = self.indices.get(self.cursor) else {
                        self.state = StripState::Finished;
                        return None;
                    };
                    self.cursor += 1;

                    if f3 == STRIP_RESTART {
                        self.state = StripState::Priming;
                        continue;
                    }

                    let reverse = !reverse;
                    let raw = if reverse { [f1, f3, f2] } else { [f1, f2, f3] };
                    self.state = StripState::InStrip { f1: f2, f2: f3, reverse };

                    return match self.emit(raw) {
                        Ok(triangle) => Some(Ok(triangle)),
                        Err(error) => self.fail(error),
                    };
                }
            }
        }
    }
}

/// Decodes strips leniently; see [`decode_strips_with_mode`].
pub fn decode_strips(indices: &[u16], base_index: u32) -> Result<Vec<Triangle>, StripError> {
    decode_strips_with_mode(indices, base_index, StripMode::Lenient)
}

/// Turns an index stream into triangles, subtracting `base_index` from every index.
///
/// # Errors
///
/// - [`StripError::IndexBelowBase`] if an index is smaller than `base_index`.
/// - [`StripError::MalformedIndexStream`] in [`StripMode::Strict`] when a strip has
///   fewer than 2 indices.
pub fn decode_strips_with_mode(
    indices: &[u16],
    base_index: u32,
    mode: StripMode,
) -> Result<Vec<Triangle>, StripError> {
    StripDecoder::new(indices, base_index, mode).collect()
}

/// Reads little endian `u16` indices; a trailing odd byte is ignored.
pub fn index_stream_from_bytes(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
