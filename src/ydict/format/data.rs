//! Definition blob extraction for `.dat` files.
//!
//! Every blob is stored as a 4-byte little-endian length followed by that
//! many bytes of markup. Callers only ever see a blob or nothing: all
//! structural problems degrade to an empty vector.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use log::debug;

use crate::ydict::types::error::{Result, YdictError};
use crate::ydict::utils;

/// Upper bound on a single definition blob.
pub const MAX_BLOB_LEN: u32 = 4 * 1024 * 1024;

/// Extract the blob stored at `offset` in the data file at `path`.
///
/// Opens its own file handle, so concurrent callers never share a cursor.
/// Returns an empty vector when the blob is not available.
pub fn read_blob(path: &Path, offset: u32) -> Vec<u8> {
    let result = File::open(path)
        .map_err(YdictError::from)
        .and_then(|mut file| extract_blob(&mut file, offset));
    match result {
        Ok(blob) => blob,
        Err(e) => {
            debug!("No blob at offset {:#x} in {}: {}", offset, path.display(), e);
            Vec::new()
        }
    }
}

/// Read the length-prefixed blob at `offset` with full bounds checking.
pub fn extract_blob<R: Read + Seek>(reader: &mut R, offset: u32) -> Result<Vec<u8>> {
    let size = reader.seek(SeekFrom::End(0))?;
    let offset = u64::from(offset);

    if offset + 4 > size {
        return Err(YdictError::InvalidBlob(format!(
            "length prefix at {:#x} is past end of file ({} bytes)",
            offset, size
        )));
    }

    reader.seek(SeekFrom::Start(offset))?;
    let len = utils::read_u32(reader)?;
    if len == 0 || len > MAX_BLOB_LEN {
        return Err(YdictError::InvalidBlob(format!("declared length {} out of range", len)));
    }
    if offset + 4 + u64::from(len) > size {
        return Err(YdictError::InvalidBlob(format!(
            "blob of {} bytes at {:#x} overruns file ({} bytes)",
            len, offset, size
        )));
    }

    let mut blob = Vec::with_capacity(len as usize);
    reader.take(u64::from(len)).read_to_end(&mut blob)?;
    if blob.len() != len as usize {
        return Err(YdictError::InvalidBlob(format!(
            "short read: expected {} bytes, got {}",
            len,
            blob.len()
        )));
    }
    Ok(blob)
}
