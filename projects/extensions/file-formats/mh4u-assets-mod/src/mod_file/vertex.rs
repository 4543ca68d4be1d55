use super::constants::*;

/// Bone indices and weights of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkinInfluence {
    /// Indices into the model's bone table.
    pub bones: [u8; 4],
    /// Weight of each bone, `byte / 255`.
    pub weights: [f32; 4],
}

/// A borrowed vertex record of `stride` bytes.
///
/// The record must be at least [`POSITION_SIZE`] bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRecord<'a> {
    bytes: &'a [u8],
}

impl<'a> VertexRecord<'a> {
    /// Wraps a record, or [`None`] if it is too short to hold a position.
    pub fn new(bytes: &'a [u8]) -> Option<Self> {
        (bytes.len() >= POSITION_SIZE).then_some(Self { bytes })
    }

    /// The raw record.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Position from bytes 0..12.
    pub fn position(&self) -> [f32; 3] {
        [
            read_f32(self.bytes, 0),
            read_f32(self.bytes, 4),
            read_f32(self.bytes, 8),
        ]
    }

    /// UV from bytes 16..24, if the record is long enough.
    pub fn uv(&self) -> Option<[f32; 2]> {
        if self.bytes.len() < MIN_UV_STRIDE {
            return None;
        }
        Some([
            read_f32(self.bytes, UV_OFFSET),
            read_f32(self.bytes, UV_OFFSET + 4),
        ])
    }

    /// Bone indices from bytes 24, 25, 32, 34 and weights from bytes 26, 27, 33, 35,
    /// if the record is long enough.
    pub fn skin(&self) -> Option<SkinInfluence> {
        if self.bytes.len() < MIN_SKIN_STRIDE {
            return None;
        }
        Some(SkinInfluence {
            bones: BONE_BYTE_OFFSETS.map(|offset| self.bytes[offset]),
            weights: WEIGHT_BYTE_OFFSETS.map(|offset| f32::from(self.bytes[offset]) / 255.0),
        })
    }
}

#[inline(always)]
fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
