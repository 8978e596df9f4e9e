//! # ydict-reader
//!
//! A reader for YDP dictionaries: a `.idx` word table paired with a `.dat`
//! file of RTF-like definition blobs.
//!
//! Loads the word table, extracts definition markup, decodes its legacy
//! Windows-1250 and phonetic-font bytes, and renders it as plain or
//! layout-aware text.
//!
//! ```no_run
//! use ydict_reader::{Config, Dictionary};
//!
//! let dict = Dictionary::open(&Config::new("dict100.idx", "dict100.dat")).unwrap();
//! if let Some(index) = dict.find_word("abdicate") {
//!     println!("{}", dict.render_best(index));
//! }
//! ```
pub mod ydict;

// Re-export the main types for convenience
pub use ydict::{
    Dictionary,
    Result,
    YdictError,
    render::RenderMode,
    search::SearchIndex,
    types::models::{
        Config,
        IdxDumpStatus,
        WordEntry,
    },
};
