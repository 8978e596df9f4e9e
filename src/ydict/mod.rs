//! Core YDP dictionary module

pub mod codec;
pub mod format;
pub mod reader;
pub mod render;
pub mod search;
pub mod types;
mod utils;

pub use reader::Dictionary;
pub use types::error::{Result, YdictError};
