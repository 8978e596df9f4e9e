//! File format parsing layer for YDP dictionaries.
//!
//! A dictionary is a pair of files:
//!
//! ```text
//! .idx                               .dat
//! ┌──────────────────────┐           ┌──────────────────────┐
//! │ 0x00 magic (u32 LE)  │           │ ...                  │
//! │ 0x08 count (u16 LE)  │           │ offset → len (u32 LE)│
//! │ 0x10 table (u32 LE)  │──┐        │          markup[len] │
//! ├──────────────────────┤  │        │ ...                  │
//! │ [4 reserved]         │←─┘        └──────────────────────┘
//! │ [data offset u32 LE] │─────────────────↑
//! │ [word bytes] 0x00    │
//! │ ... × count          │
//! └──────────────────────┘
//! ```
//!
//! - [`index`]: parses the word table ← `index::parse()`
//! - [`data`]: extracts length-prefixed markup blobs ← `data::read_blob()`

pub mod data;
pub mod index;
