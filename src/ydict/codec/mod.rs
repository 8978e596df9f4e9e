//! Codec layer for character data.
//!
//! - [`charset`]: single-byte decoding (legacy code page and phonetic font slots)

pub mod charset;
