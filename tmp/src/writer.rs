use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;

use crate::{
    error::TmpError,
    types::{BlockHeader, Tmp},
};

impl Tmp {
    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();

        writer.append_u64(self.header.blocks_x);
        writer.append_u64(self.header.blocks_y);
        writer.append_u64(self.header.block_width);
        writer.append_u64(self.header.block_height);

        // source table values, not recomputed from the packed layout
        for offset in &self.offsets {
            writer.append_u32(*offset);
        }

        for block in &self.blocks {
            block.header.write(&mut writer);
            writer.append_u8_slice(&block.pixels);
        }

        writer.data
    }

    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), TmpError> {
        let bytes = self.write_to_bytes();

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&bytes)?;

        file.flush()?;

        Ok(())
    }
}

impl BlockHeader {
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.append_i32(self.x);
        writer.append_i32(self.y);

        for word in self.reserved1 {
            writer.append_u32(word);
        }

        writer.append_i32(self.extra_x);
        writer.append_i32(self.extra_y);
        writer.append_u32(self.pad);
        writer.append_u64(self.extra_width);
        writer.append_u64(self.extra_height);
        writer.append_u32(self.extra_flags);
        writer.append_u8(self.height);
        writer.append_u8(self.terrain_type);
        writer.append_u8(self.ramp as u8);
        writer.append_u8_slice(&self.reserved2);
    }
}
