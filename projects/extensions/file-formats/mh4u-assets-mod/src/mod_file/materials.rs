use super::constants::*;
use super::header::ModHeader;
use crate::error::{ModError, ModResult};
use alloc::string::String;
use alloc::vec::Vec;

/// Extracts the name from a material record: the first 30 bytes, cut at the first NUL.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn material_name_from_record(record: &[u8]) -> String {
    let name = &record[..record.len().min(MATERIAL_NAME_SIZE)];
    let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
    String::from_utf8_lossy(&name[..end]).into_owned()
}

/// Reads the names of all materials from an in-memory container.
pub fn material_names(data: &[u8], header: &ModHeader) -> ModResult<Vec<String>> {
    (0..header.material_count())
        .map(|index| {
            let start = usize::try_from(header.material_record_offset(index)).unwrap_or(usize::MAX);
            let available = data.get(start..).unwrap_or(&[]);
            if available.len() < MATERIAL_NAME_SIZE {
                return Err(ModError::TruncatedInput {
                    required: MATERIAL_NAME_SIZE,
                    actual: available.len(),
                });
            }
            Ok(material_name_from_record(available))
        })
        .collect()
}

/// Reads the names of all materials from a seekable source.
#[cfg(feature = "std")]
pub fn read_material_names<R: std::io::Read + std::io::Seek>(
    reader: &mut R,
    header: &ModHeader,
) -> ModResult<Vec<String>> {
    use std::io::SeekFrom;

    let mut names = Vec::with_capacity(header.material_count());
    for index in 0..header.material_count() {
        reader.seek(SeekFrom::Start(header.material_record_offset(index)))?;
        let record = mh4u_assets_common::io::read_up_to(reader, MATERIAL_NAME_SIZE)?;
        if record.len() < MATERIAL_NAME_SIZE {
            return Err(ModError::TruncatedInput {
                required: MATERIAL_NAME_SIZE,
                actual: record.len(),
            });
        }
        names.push(material_name_from_record(&record));
    }
    tracing::debug!(count = names.len(), "read material names");
    Ok(names)
}
