use std::{ffi::OsStr, path::Path};

use crate::{
    constants::{FILE_HEADER_SIZE, FRAME_FLAG_COMPRESSED, FRAME_HEADER_SIZE, REMAP_TABLE_LEN},
    error::ShpError,
    parser::parse_shp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShpHeader {
    pub type_: u16,
    pub width: u16,
    pub height: u16,
    pub frames: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
    pub flags: u32,
    pub color: u32,
    pub reserved: u32,
    /// Byte offset of the frame's pixels in the source file.
    pub data_offset: u32,
}

impl FrameHeader {
    pub fn is_compressed(&self) -> bool {
        self.flags & FRAME_FLAG_COMPRESSED != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct Shp {
    pub header: ShpHeader,
    pub frame_headers: Vec<FrameHeader>,
    // shared pixel storage for all frames; windows may alias
    pub(crate) pixels: Vec<u8>,
}

impl Shp {
    pub fn from_bytes(bytes: &[u8]) -> Result<Shp, ShpError> {
        match parse_shp(bytes) {
            Ok((_, res)) => Ok(res),
            Err(err) => Err(ShpError::NomError {
                source: err.to_owned(),
            }),
        }
    }

    pub fn from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Shp, ShpError> {
        let bytes = std::fs::read(path)?;

        Self::from_bytes(&bytes)
    }

    pub fn frame_count(&self) -> usize {
        self.frame_headers.len()
    }

    fn pixel_start(&self) -> usize {
        FILE_HEADER_SIZE + self.frame_headers.len() * FRAME_HEADER_SIZE
    }

    /// Pixels of frame `index`, from its window start to the end of the
    /// blob. How many of those bytes belong to the frame follows from its
    /// dimensions and compression flag.
    pub fn pixel_data(&self, index: usize) -> Option<&[u8]> {
        let header = self.frame_headers.get(index)?;

        self.pixels
            .get(header.data_offset as usize - self.pixel_start()..)
    }

    pub fn frame_bound(&self, index: usize) -> Rect {
        self.frame_headers
            .get(index)
            .map_or(Rect::default(), |header| Rect {
                x: header.x as i32,
                y: header.y as i32,
                width: header.width as u32,
                height: header.height as u32,
            })
    }

    pub fn file_bound(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.header.width as u32,
            height: self.header.height as u32,
        }
    }

    /// Rewrites every color index of every frame through `table`. A table
    /// that is not exactly 256 entries is rejected before any mutation.
    pub fn remap_colors(&mut self, table: &[u8]) -> Result<(), ShpError> {
        if table.len() != REMAP_TABLE_LEN {
            return Err(ShpError::RemapTableLength { have: table.len() });
        }

        let pixel_start = self.pixel_start();

        for index in 0..self.frame_headers.len() {
            let header = self.frame_headers[index];
            let start = header.data_offset as usize - pixel_start;

            if header.is_compressed() {
                self.remap_compressed(start, header.height as usize, table);
            } else {
                let len = header.width as usize * header.height as usize;
                let end = (start + len).min(self.pixels.len());

                for byte in &mut self.pixels[start..end] {
                    *byte = table[*byte as usize];
                }
            }
        }

        Ok(())
    }

    /// One compressed row is a little-endian u16 pitch counting itself,
    /// then tokens up to the pitch boundary: a nonzero byte is a pixel
    /// index, a zero byte plus its run-length byte is a transparent run.
    /// Neither pitch nor run-length bytes are color indices. A row whose
    /// tokens overrun the pitch boundary or the blob abandons the rest of
    /// the frame.
    fn remap_compressed(&mut self, start: usize, rows: usize, table: &[u8]) {
        let mut row_start = start;

        for _ in 0..rows {
            let Some(pitch_bytes) = self.pixels.get(row_start..row_start + 2) else {
                return;
            };
            let pitch = u16::from_le_bytes([pitch_bytes[0], pitch_bytes[1]]) as usize;

            if pitch < 2 {
                return;
            }

            let row_end = row_start + pitch;
            let bound = row_end.min(self.pixels.len());
            let mut pos = row_start + 2;

            while pos < bound {
                if self.pixels[pos] == 0 {
                    pos += 2;
                } else {
                    self.pixels[pos] = table[self.pixels[pos] as usize];
                    pos += 1;
                }
            }

            if pos != row_end {
                return;
            }

            row_start = row_end;
        }
    }

    pub fn file_size(&self) -> usize {
        FILE_HEADER_SIZE + self.frame_headers.len() * FRAME_HEADER_SIZE + self.pixels.len()
    }
}
