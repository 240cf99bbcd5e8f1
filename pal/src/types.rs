use std::{ffi::OsStr, path::Path};

use crate::{error::PalError, parser::parse_palette};

pub const PALETTE_ENTRY_COUNT: usize = 256;
pub const PALETTE_FILE_SIZE: usize = PALETTE_ENTRY_COUNT * 3;

/// A 256 entry RGB color table. Constructing one already scaled the 6 bit
/// file channels up by `<< 2`, so entries are in the 8 bit range with a
/// ceiling of 252.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub(crate) entries: Vec<[u8; 3]>,
}

impl Palette {
    pub fn from_bytes(bytes: &[u8]) -> Result<Palette, PalError> {
        if bytes.len() != PALETTE_FILE_SIZE {
            return Err(PalError::FileSize { have: bytes.len() });
        }

        match parse_palette(bytes) {
            Ok((_, res)) => Ok(res),
            Err(err) => Err(PalError::NomError {
                source: err.to_owned(),
            }),
        }
    }

    pub fn from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Palette, PalError> {
        let bytes = std::fs::read(path).map_err(|op| PalError::IOError { source: op })?;

        Self::from_bytes(&bytes)
    }

    pub fn entries(&self) -> &[[u8; 3]] {
        &self.entries
    }

    /// Builds the index translation table that re-tints pixels stored
    /// against `self` so they render under `target`.
    ///
    /// Index 0 is the engine's transparent slot and always maps to 0. Every
    /// other index maps to the target entry with the smallest squared RGB
    /// distance; ties keep the lowest target index.
    pub fn remap_table(&self, target: &Palette) -> Vec<u8> {
        let mut table = vec![0u8; PALETTE_ENTRY_COUNT];

        for (index, entry) in self.entries.iter().enumerate().skip(1) {
            table[index] = nearest_index(*entry, &target.entries);
        }

        table
    }
}

fn nearest_index(color: [u8; 3], candidates: &[[u8; 3]]) -> u8 {
    let mut nearest = 0;
    let mut nearest_distance = distance_squared(color, candidates[0]);

    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        let distance = distance_squared(color, *candidate);

        if distance < nearest_distance {
            nearest = index;
            nearest_distance = distance;
        }
    }

    nearest as u8
}

fn distance_squared(from: [u8; 3], to: [u8; 3]) -> i32 {
    let r = to[0] as i32 - from[0] as i32;
    let g = to[1] as i32 - from[1] as i32;
    let b = to[2] as i32 - from[2] as i32;

    r * r + g * g + b * b
}
