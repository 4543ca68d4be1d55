use super::constants::{BLOCK_SIZE, SUPER_TILE_SIZE, TEX_HEADER_SIZE};
use super::header::{parse_tex_header, TexHeader, TexPixelFormat};
use super::pixel_buffer::PixelBuffer;
use super::tiling::block_origin;
use crate::error::{TexError, TexResult};
use mh4u_assets_common::decoded_4x4_block::Decoded4x4Block;
use mh4u_assets_etc1::{decode_etc1_block_from_slice, decode_etc1a4_block_from_slice};

/// A fully decoded texture: its header and the level 0 image.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTexture {
    /// The container header.
    pub header: TexHeader,
    /// Encoding of the payload that was decoded.
    pub format: TexPixelFormat,
    /// Decoded pixels of mip level 0.
    pub pixels: PixelBuffer,
}

/// Checks that a texture's dimensions are a whole number of super-tiles.
pub fn validate_dimensions(width: u32, height: u32) -> TexResult<()> {
    let valid = |v: u32| v != 0 && v % SUPER_TILE_SIZE == 0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(TexError::InvalidDimensions { width, height })
    }
}

/// Decodes the `.tex` container in `data`.
///
/// Only mip level 0 is decoded; anything after it is ignored.
///
/// # Errors
///
/// - [`TexError::TruncatedInput`] if the header, mipmap table or payload is cut short.
/// - [`TexError::UnsupportedPixelFormat`] for pixel types other than ETC1/ETC1A4.
/// - [`TexError::InvalidDimensions`] if width or height is not a non-zero multiple of 8.
///
/// No pixel memory is allocated before all of these checks pass.
pub fn decode_texture(data: &[u8]) -> TexResult<DecodedTexture> {
    let header = parse_tex_header(data)?;
    let format = header.pixel_format()?;
    let payload = data.get(header.data_offset()..).unwrap_or(&[]);
    let pixels = decode_etc1_payload(format, header.width(), header.height(), payload)?;

    Ok(DecodedTexture {
        header,
        format,
        pixels,
    })
}

/// Decodes a raw ETC1/ETC1A4 block stream in the tiled `.tex` block order.
///
/// Block pixel `(col, row)` at origin `(x, y)` is stored at column `x + col` of output
/// row `height - (y + row) - 1`. Alpha is always 1.0, including for ETC1A4.
///
/// # Errors
///
/// [`TexError::InvalidDimensions`] or [`TexError::TruncatedInput`]; see [`decode_texture`].
pub fn decode_etc1_payload(
    format: TexPixelFormat,
    width: u32,
    height: u32,
    payload: &[u8],
) -> TexResult<PixelBuffer> {
    validate_dimensions(width, height)?;
    let required = format.payload_len(width, height);
    if payload.len() < required {
        return Err(TexError::TruncatedInput {
            required,
            actual: payload.len(),
        });
    }

    let decode_block: fn(&[u8]) -> Option<Decoded4x4Block> = match format {
        TexPixelFormat::Etc1 => decode_etc1_block_from_slice,
        TexPixelFormat::Etc1A4 => decode_etc1a4_block_from_slice,
    };

    tracing::debug!(?format, width, height, "decoding texture payload");

    let mut buffer = PixelBuffer::new(width, height);
    for (block_index, block) in payload[..required]
        .chunks_exact(format.block_size())
        .enumerate()
    {
        let decoded = decode_block(block).ok_or(TexError::TruncatedInput {
            required,
            actual: payload.len(),
        })?;
        let (x, y) = block_origin(block_index, width);
        tracing::trace!(block_index, x, y, "placing block");

        for row in 0..BLOCK_SIZE {
            let out_row = height - (y + row) as u32 - 1;
            for col in 0..BLOCK_SIZE {
                let [r, g, b, _] = decoded.pixel(col, row).to_rgba_f32();
                buffer.set_pixel((x + col) as u32, out_row, [r, g, b, 1.0]);
            }
        }
    }

    Ok(buffer)
}

/// Reads and decodes a `.tex` container from `reader`.
///
/// Reads the header first and validates it before reading the payload, so a bad
/// header never causes a large read or allocation.
///
/// # Errors
///
/// As [`decode_texture`], plus [`TexError::Io`] if the reader fails.
#[cfg(feature = "std")]
pub fn read_texture<R: std::io::Read>(reader: &mut R) -> TexResult<DecodedTexture> {
    use super::header::{parse_fixed_header, parse_mipmap_offsets};
    use mh4u_assets_common::io::read_up_to;

    let fixed_bytes = read_up_to(reader, TEX_HEADER_SIZE)?;
    let fixed = parse_fixed_header(&fixed_bytes)?;
    let mipmap_count = fixed.geometry.mipmap_count();
    let table_len = super::header::data_offset_for(mipmap_count) - TEX_HEADER_SIZE;
    let table = read_up_to(reader, table_len)?;
    let mipmap_offsets = parse_mipmap_offsets(&table, mipmap_count).map_err(|_| {
        TexError::TruncatedInput {
            required: TEX_HEADER_SIZE + table_len,
            actual: TEX_HEADER_SIZE + table.len(),
        }
    })?;
    let header = fixed.with_mipmap_offsets(mipmap_offsets);

    let format = header.pixel_format()?;
    validate_dimensions(header.width(), header.height())?;
    let payload = read_up_to(reader, format.payload_len(header.width(), header.height()))?;
    let pixels = decode_etc1_payload(format, header.width(), header.height(), &payload)?;

    Ok(DecodedTexture {
        header,
        format,
        pixels,
    })
}
