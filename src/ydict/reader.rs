use std::fs::File;
use std::path::{Path, PathBuf};
use log::{info, warn};

use super::format::{data, index};
use super::render::{self, RenderMode};
use super::search::SearchIndex;
use super::types::error::{Result, YdictError};
use super::types::models::*;

/// A loaded YDP dictionary.
///
/// Holds the word table in memory and reads definitions from the data file
/// on demand. The table never changes after [`open`](Self::open), and each
/// definition read opens its own handle, so a `Dictionary` can be shared
/// across threads for lookups and rendering.
#[derive(Debug)]
pub struct Dictionary {
    dat_path: PathBuf,
    words: Vec<WordEntry>,
    idx_dump_status: IdxDumpStatus,
}

impl Dictionary {
    /// Load the dictionary described by `config`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either path is empty
    /// - The data file cannot be opened
    /// - The index file cannot be opened, has the wrong magic, or its
    ///   word table is truncated
    ///
    /// A failed dump of the word table is not an error; see
    /// [`idx_dump_status`](Self::idx_dump_status).
    pub fn open(config: &Config) -> Result<Self> {
        if config.idx_path.as_os_str().is_empty() {
            return Err(YdictError::MissingPath("index"));
        }
        if config.dat_path.as_os_str().is_empty() {
            return Err(YdictError::MissingPath("data"));
        }

        info!("Opening dictionary: {}", config.idx_path.display());
        // Fail early if the definitions are unreadable
        File::open(&config.dat_path)?;
        let words = index::load(&config.idx_path)?;

        let idx_dump_status = match &config.idx_dump_path {
            Some(path) => Self::dump_words(path, &words),
            None => IdxDumpStatus::default(),
        };

        Ok(Self {
            dat_path: config.dat_path.clone(),
            words,
            idx_dump_status,
        })
    }

    fn dump_words(path: &Path, words: &[WordEntry]) -> IdxDumpStatus {
        let ok = match index::dump(path, words) {
            Ok(()) => {
                info!("Word table dumped to {}", path.display());
                true
            }
            Err(e) => {
                warn!("Failed to dump word table to {}: {}", path.display(), e);
                false
            }
        };
        IdxDumpStatus {
            requested: true,
            ok,
            path: path.to_path_buf(),
        }
    }

    /// A one-line description of the loaded dictionary.
    pub fn version(&self) -> String {
        format!("ydict - idx loaded ({} words)", self.words.len())
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn word_at(&self, index: usize) -> Option<&WordEntry> {
        self.words.get(index)
    }

    /// The whole word table, in file order.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn search(&self) -> SearchIndex<'_> {
        SearchIndex::new(&self.words)
    }

    pub fn find_word(&self, word: &str) -> Option<usize> {
        self.search().find_word(word)
    }

    pub fn lower_bound(&self, key: &str) -> usize {
        self.search().lower_bound(key)
    }

    pub fn find_first_with_prefix(&self, prefix: &str) -> Option<usize> {
        self.search().find_first_with_prefix(prefix)
    }

    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<usize> {
        self.search().suggest(prefix, limit)
    }

    /// Raw markup of entry `index`; empty when the index or its blob is invalid.
    pub fn read_raw_markup(&self, index: usize) -> Vec<u8> {
        match self.words.get(index) {
            Some(entry) => data::read_blob(&self.dat_path, entry.data_offset),
            None => Vec::new(),
        }
    }

    pub fn render(&self, index: usize, mode: RenderMode) -> String {
        let markup = self.read_raw_markup(index);
        if markup.is_empty() {
            return String::new();
        }
        mode.render(&markup)
    }

    pub fn render_plain(&self, index: usize) -> String {
        self.render(index, RenderMode::Plain)
    }

    pub fn render_pretty(&self, index: usize) -> String {
        self.render(index, RenderMode::Pretty)
    }

    /// Pretty text for entry `index`, or plain text if pretty rendering is empty.
    pub fn render_best(&self, index: usize) -> String {
        let markup = self.read_raw_markup(index);
        if markup.is_empty() {
            return String::new();
        }
        render::render_best(&markup)
    }

    /// Plain text for the entry spelled exactly `word`; empty if there is none.
    pub fn render_plain_word(&self, word: &str) -> String {
        self.find_word(word)
            .map(|index| self.render_plain(index))
            .unwrap_or_default()
    }

    pub fn idx_dump_status(&self) -> &IdxDumpStatus {
        &self.idx_dump_status
    }
}
