//! Word table parsing for `.idx` files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use encoding_rs::WINDOWS_1250;
use log::{debug, info, trace};

use crate::ydict::types::error::{Result, YdictError};
use crate::ydict::types::models::WordEntry;
use crate::ydict::utils;

/// Magic value stored in the first four bytes of every index file.
pub const IDX_MAGIC: u32 = 0x8d4e_11d5;

/// Byte offset of the 2-byte entry count.
pub const COUNT_OFFSET: u64 = 8;

/// Byte offset of the 4-byte word table offset.
pub const TABLE_OFFSET_OFFSET: u64 = 16;

/// Parse the index stream into a word table.
///
/// Structure:
/// - 4 bytes @0x00: magic (must equal [`IDX_MAGIC`])
/// - 2 bytes @0x08: entry count
/// - 4 bytes @0x10: table offset
/// - at table offset, `count` times: 4 reserved bytes, 4-byte data offset,
///   null-terminated word in the legacy code page
///
/// The whole load fails on any read error inside the table; no partial
/// table is ever returned.
pub fn parse<R: Read + Seek>(reader: &mut R) -> Result<Vec<WordEntry>> {
    reader.seek(SeekFrom::Start(0))?;
    let magic = utils::read_u32(reader)?;
    if magic != IDX_MAGIC {
        return Err(YdictError::BadMagic {
            expected: IDX_MAGIC,
            found: magic,
        });
    }

    reader.seek(SeekFrom::Start(COUNT_OFFSET))?;
    let count = utils::read_u16(reader)? as usize;

    reader.seek(SeekFrom::Start(TABLE_OFFSET_OFFSET))?;
    let table_offset = utils::read_u32(reader)?;
    debug!("Index header: count={}, table_offset={:#x}", count, table_offset);

    reader.seek(SeekFrom::Start(u64::from(table_offset)))?;
    let mut table = BufReader::new(reader);
    let mut words = Vec::with_capacity(count);

    for index in 0..count {
        let entry = read_entry(&mut table).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => YdictError::TruncatedTable { index, declared: count },
            _ => YdictError::Io(e),
        })?;
        trace!("Entry {}: {:?} @ {:#x}", index, entry.word, entry.data_offset);
        words.push(entry);
    }

    info!("Word table loaded: {} entries", words.len());
    Ok(words)
}

/// Parse the index file at `path`.
pub fn load(path: &Path) -> Result<Vec<WordEntry>> {
    let mut file = File::open(path)?;
    parse(&mut file)
}

fn read_entry(reader: &mut impl io::BufRead) -> io::Result<WordEntry> {
    let mut reserved = [0u8; 4];
    reader.read_exact(&mut reserved)?;
    let data_offset = utils::read_u32(reader)?;
    let raw = utils::read_cstring(reader)?;
    let (word, _) = WINDOWS_1250.decode_without_bom_handling(&raw);
    Ok(WordEntry {
        word: word.into_owned(),
        data_offset,
    })
}

/// Write the word table as `index<TAB>dataOffset<TAB>word` lines.
pub fn dump(path: &Path, words: &[WordEntry]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for (index, entry) in words.iter().enumerate() {
        writeln!(out, "{}\t{}\t{}", index, entry.data_offset, entry.word)?;
    }
    out.flush()
}
