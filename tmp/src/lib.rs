//! Terrain tile container (TMP) parsing and writing.
//!
//! A file is a block grid header, one 32-bit offset per grid slot (0 marks
//! an absent slot), then a 64-byte sub-header plus packed pixel planes per
//! present block. Rewrites keep the source offset table untouched and pack
//! the records sequentially after it; the two agree as long as the set and
//! order of present blocks is unchanged.

mod constants;
pub mod error;
mod parser;
mod types;
mod writer;

pub use constants::*;
pub use parser::parse_tmp;
pub use types::*;
