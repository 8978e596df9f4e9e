//! Data structures shared across the index, data and search layers.

use std::path::{Path, PathBuf};

/// A single entry of the word table.
///
/// Associates a headword with the byte offset of its definition blob
/// in the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub data_offset: u32,
}

/// Locations of the dictionary files plus optional diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the `.idx` word table.
    pub idx_path: PathBuf,
    /// Path to the `.dat` definition store.
    pub dat_path: PathBuf,
    /// When set, the loaded word table is dumped here as
    /// `index<TAB>dataOffset<TAB>word` lines.
    pub idx_dump_path: Option<PathBuf>,
}

impl Config {
    pub fn new(idx_path: impl AsRef<Path>, dat_path: impl AsRef<Path>) -> Self {
        Self {
            idx_path: idx_path.as_ref().to_path_buf(),
            dat_path: dat_path.as_ref().to_path_buf(),
            idx_dump_path: None,
        }
    }

    /// Requests a text dump of the word table once it is loaded.
    pub fn with_idx_dump(mut self, path: impl AsRef<Path>) -> Self {
        self.idx_dump_path = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Outcome of the optional word table dump.
///
/// `ok` and `path` are only meaningful when `requested` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdxDumpStatus {
    pub requested: bool,
    pub ok: bool,
    pub path: PathBuf,
}
