use std::{ffi::OsStr, path::Path};

use crate::{
    constants::{
        BLOCK_HEADER_SIZE, EXTRA_FLAG_HAS_EXTRA, FILE_HEADER_SIZE, OFFSET_ENTRY_SIZE,
        REMAP_TABLE_LEN,
    },
    error::TmpError,
    parser::parse_tmp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TmpHeader {
    pub blocks_x: u64,
    pub blocks_y: u64,
    pub block_width: u64,
    pub block_height: u64,
}

/// Tile slope classification. One byte on disk; anything outside `0..=20`
/// fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Ramp {
    Flat = 0,
    CornerNw = 1,
    CornerNe = 2,
    CornerSe = 3,
    CornerSw = 4,
    EdgeN = 5,
    EdgeE = 6,
    EdgeS = 7,
    EdgeW = 8,
    HalfN = 9,
    HalfE = 10,
    HalfS = 11,
    HalfW = 12,
    MidN = 13,
    MidE = 14,
    MidS = 15,
    MidW = 16,
    DownWestEast = 17,
    UpWestEast = 18,
    DownNorthSouth = 19,
    UpNorthSouth = 20,
}

impl TryFrom<u8> for Ramp {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(0..=20).contains(&value) {
            return Err("Not a valid ramp type");
        }

        Ok(match value {
            0 => Self::Flat,
            1 => Self::CornerNw,
            2 => Self::CornerNe,
            3 => Self::CornerSe,
            4 => Self::CornerSw,
            5 => Self::EdgeN,
            6 => Self::EdgeE,
            7 => Self::EdgeS,
            8 => Self::EdgeW,
            9 => Self::HalfN,
            10 => Self::HalfE,
            11 => Self::HalfS,
            12 => Self::HalfW,
            13 => Self::MidN,
            14 => Self::MidE,
            15 => Self::MidS,
            16 => Self::MidW,
            17 => Self::DownWestEast,
            18 => Self::UpWestEast,
            19 => Self::DownNorthSouth,
            20 => Self::UpNorthSouth,
            _ => unreachable!(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub x: i32,
    pub y: i32,
    // [u32; 3]
    pub reserved1: [u32; 3],
    pub extra_x: i32,
    pub extra_y: i32,
    /// Alignment filler between `extra_y` and `extra_width`, carried through
    /// so a rewrite reproduces the source bytes.
    pub pad: u32,
    pub extra_width: u64,
    pub extra_height: u64,
    pub extra_flags: u32,
    pub height: u8,
    pub terrain_type: u8,
    pub ramp: Ramp,
    // [u8; 9]
    pub reserved2: [u8; 9],
}

impl BlockHeader {
    pub fn has_extra(&self) -> bool {
        self.extra_flags & EXTRA_FLAG_HAS_EXTRA != 0
    }

    /// Pixel count of one extra plane. Only meaningful with `has_extra`.
    pub fn extra_size(&self) -> usize {
        (self.extra_width * self.extra_height) as usize
    }
}

#[derive(Debug, Clone)]
pub struct Block {
    pub header: BlockHeader,
    // [tile color][tile z][extra color][extra z], the extra planes only
    // with the has-extra flag
    pub(crate) pixels: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Tmp {
    pub header: TmpHeader,
    /// One entry per block slot, 0 for absent slots. Values are byte
    /// offsets from the source file and are written back untouched.
    pub offsets: Vec<u32>,
    /// Present blocks, in offset table order.
    pub blocks: Vec<Block>,
}

impl Tmp {
    pub fn from_bytes(bytes: &[u8]) -> Result<Tmp, TmpError> {
        match parse_tmp(bytes) {
            Ok((_, res)) => Ok(res),
            Err(err) => Err(TmpError::NomError {
                source: err.to_owned(),
            }),
        }
    }

    pub fn from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Tmp, TmpError> {
        let bytes = std::fs::read(path)?;

        Self::from_bytes(&bytes)
    }

    /// Slots in the block grid, absent ones included.
    pub fn block_count(&self) -> usize {
        (self.header.blocks_x * self.header.blocks_y) as usize
    }

    /// Pixel count of one tile plane.
    pub fn tile_size(&self) -> usize {
        (self.header.block_width * self.header.block_height / 2) as usize
    }

    /// Tile color plane of present block `index` (table order).
    pub fn color_data(&self, index: usize) -> Option<&[u8]> {
        let tile_size = self.tile_size();

        self.blocks
            .get(index)
            .map(|block| &block.pixels[..tile_size])
    }

    /// Tile depth plane. Never touched by a remap.
    pub fn zbuffer_data(&self, index: usize) -> Option<&[u8]> {
        let tile_size = self.tile_size();

        self.blocks
            .get(index)
            .map(|block| &block.pixels[tile_size..tile_size * 2])
    }

    pub fn has_extra(&self, index: usize) -> bool {
        self.blocks
            .get(index)
            .is_some_and(|block| block.header.has_extra())
    }

    /// Pixel count of one extra plane, 0 without the has-extra flag.
    pub fn extra_size(&self, index: usize) -> usize {
        self.blocks
            .get(index)
            .filter(|block| block.header.has_extra())
            .map_or(0, |block| block.header.extra_size())
    }

    pub fn extra_data(&self, index: usize) -> Option<&[u8]> {
        let start = self.tile_size() * 2;
        let block = self.blocks.get(index)?;

        if !block.header.has_extra() {
            return None;
        }

        Some(&block.pixels[start..start + block.header.extra_size()])
    }

    pub fn extra_zbuffer(&self, index: usize) -> Option<&[u8]> {
        let start = self.tile_size() * 2;
        let block = self.blocks.get(index)?;

        if !block.header.has_extra() {
            return None;
        }

        let extra_size = block.header.extra_size();

        Some(&block.pixels[start + extra_size..start + extra_size * 2])
    }

    /// Rewrites every color index of every present block through `table`.
    /// The z planes are depth data and stay untouched. A table that is not
    /// exactly 256 entries is rejected before any mutation.
    pub fn remap_colors(&mut self, table: &[u8]) -> Result<(), TmpError> {
        if table.len() != REMAP_TABLE_LEN {
            return Err(TmpError::RemapTableLength { have: table.len() });
        }

        let tile_size = self.tile_size();

        for block in &mut self.blocks {
            for byte in &mut block.pixels[..tile_size] {
                *byte = table[*byte as usize];
            }

            if block.header.has_extra() {
                let start = tile_size * 2;
                let extra_size = block.header.extra_size();

                for byte in &mut block.pixels[start..start + extra_size] {
                    *byte = table[*byte as usize];
                }
            }
        }

        Ok(())
    }

    pub fn file_size(&self) -> usize {
        FILE_HEADER_SIZE
            + self.offsets.len() * OFFSET_ENTRY_SIZE
            + self
                .blocks
                .iter()
                .map(|block| BLOCK_HEADER_SIZE + block.pixels.len())
                .sum::<usize>()
    }
}
