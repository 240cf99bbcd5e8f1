//! 256 entry RGB palette files and nearest-color index mapping.

pub mod error;
mod parser;
mod types;

pub use types::*;
