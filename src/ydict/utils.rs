//! Low-level byte reading utilities

use std::io::{self, BufRead, Read};
use byteorder::{LittleEndian, ReadBytesExt};

/// Read a 2-byte little-endian number.
pub fn read_u16(reader: &mut impl Read) -> io::Result<u16> {
    reader.read_u16::<LittleEndian>()
}

/// Read a 4-byte little-endian number.
///
/// Used for the index magic, table offset, data offsets and blob length prefixes.
pub fn read_u32(reader: &mut impl Read) -> io::Result<u32> {
    reader.read_u32::<LittleEndian>()
}

/// Read a null-terminated byte string, returning the bytes before the terminator.
///
/// Hitting end-of-stream before the terminator is an `UnexpectedEof` error:
/// every string in the word table must be terminated.
pub fn read_cstring(reader: &mut impl BufRead) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_until(0, &mut bytes)?;
    match bytes.pop() {
        Some(0) => Ok(bytes),
        _ => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "missing null terminator in word table",
        )),
    }
}
