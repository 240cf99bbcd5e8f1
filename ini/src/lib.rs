//! Reader for the engine's `.ini` settings files.
//!
//! Lines are `key = value[, value...]` under `[section]` headers. `;` and
//! `//` start comments. Malformed lines are skipped rather than reported,
//! the way the engine reads its own settings.

pub mod error;
mod parser;
mod types;

pub use types::*;
