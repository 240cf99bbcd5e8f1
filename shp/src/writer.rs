use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;

use crate::{
    error::ShpError,
    types::{FrameHeader, Shp},
};

impl Shp {
    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();

        writer.append_u16(self.header.type_);
        writer.append_u16(self.header.width);
        writer.append_u16(self.header.height);
        writer.append_u16(self.header.frames);

        for frame in &self.frame_headers {
            frame.write(&mut writer);
        }

        writer.append_u8_slice(&self.pixels);

        writer.data
    }

    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), ShpError> {
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

impl FrameHeader {
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.append_i16(self.x);
        writer.append_i16(self.y);
        writer.append_u16(self.width);
        writer.append_u16(self.height);
        writer.append_u32(self.flags);
        writer.append_u32(self.color);
        writer.append_u32(self.reserved);
        writer.append_u32(self.data_offset);
    }
}
