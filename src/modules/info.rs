use std::path::Path;

use shp::Shp;
use tmp::Tmp;

use crate::{err, utils::misc::lowercase_extension};

/// Returns the structure of a .tmp or .shp asset as printable text.
pub fn dump_info(path: impl AsRef<Path>) -> eyre::Result<String> {
    let path = path.as_ref();

    match lowercase_extension(path).as_deref() {
        Some("tmp") => Ok(dump_tmp(&Tmp::from_file(path)?)),
        Some("shp") => Ok(dump_shp(&Shp::from_file(path)?)),
        _ => err!("`{}` is not a .tmp or .shp file", path.display()),
    }
}

fn dump_tmp(tmp: &Tmp) -> String {
    let mut res = String::new();

    res += format!(
        "Block grid: {}x{}\n",
        tmp.header.blocks_x, tmp.header.blocks_y
    )
    .as_str();
    res += format!(
        "Block size: {}x{} ({} bytes per plane)\n",
        tmp.header.block_width,
        tmp.header.block_height,
        tmp.tile_size()
    )
    .as_str();
    res += format!(
        "Present blocks: {}/{}\n\n",
        tmp.blocks.len(),
        tmp.block_count()
    )
    .as_str();

    // blocks pair up with the nonzero table entries, in table order
    let offsets = tmp.offsets.iter().filter(|offset| **offset != 0);

    tmp.blocks
        .iter()
        .zip(offsets)
        .enumerate()
        .for_each(|(index, (block, offset))| {
            let header = &block.header;

            res += format!(
                "{index:<4}: offset {:<8} position ({}, {}) height {} terrain {} ramp {:?}",
                offset, header.x, header.y, header.height, header.terrain_type, header.ramp
            )
            .as_str();

            if header.has_extra() {
                res += format!(
                    " extra {}x{} at ({}, {})",
                    header.extra_width, header.extra_height, header.extra_x, header.extra_y
                )
                .as_str();
            }

            res += "\n";
        });

    res
}

fn dump_shp(shp: &Shp) -> String {
    let mut res = String::new();
    let bound = shp.file_bound();

    res += format!("Sprite bound: {}x{}\n", bound.width, bound.height).as_str();
    res += format!("Frames: {}\n\n", shp.frame_count()).as_str();

    (0..shp.frame_count()).for_each(|index| {
        let header = &shp.frame_headers[index];
        let bound = shp.frame_bound(index);

        res += format!(
            "{index:<4}: {}x{} at ({}, {}) {} offset {}\n",
            bound.width,
            bound.height,
            bound.x,
            bound.y,
            if header.is_compressed() {
                "compressed"
            } else {
                "raw"
            },
            header.data_offset
        )
        .as_str();
    });

    res
}

#[cfg(test)]
mod test {
    use std::fs;

    use byte_writer::ByteWriter;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reports_unknown_extensions() {
        assert!(dump_info("readme.txt").is_err());
        assert!(dump_info("no_extension").is_err());
    }

    #[test]
    fn dumps_tmp_structure() {
        let mut writer = ByteWriter::new();

        writer.append_u64(2);
        writer.append_u64(1);
        writer.append_u64(4);
        writer.append_u64(2);

        writer.append_u32(0); // absent slot
        writer.append_u32(40);

        writer.append_i32(-24);
        writer.append_i32(12);
        writer.append_u32(0);
        writer.append_u32(0);
        writer.append_u32(0);
        writer.append_i32(0);
        writer.append_i32(0);
        writer.append_u32(0);
        writer.append_u64(0);
        writer.append_u64(0);
        writer.append_u32(0);
        writer.append_u8(3); // height
        writer.append_u8(7); // terrain
        writer.append_u8(0); // ramp
        writer.append_u8_slice(&[0; 9]);

        writer.append_u8_slice(&[1, 2, 3, 4]);
        writer.append_u8_slice(&[5, 6, 7, 8]);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiles.tmp");
        fs::write(&path, writer.data).unwrap();

        let dump = dump_info(&path).unwrap();

        assert!(dump.contains("Block grid: 2x1"));
        assert!(dump.contains("Present blocks: 1/2"));
        assert!(dump.contains("offset 40"));
        assert!(dump.contains("position (-24, 12)"));
        assert!(dump.contains("ramp Flat"));
    }

    #[test]
    fn dumps_shp_structure() {
        let mut writer = ByteWriter::new();

        writer.append_u16(1);
        writer.append_u16(8);
        writer.append_u16(4);
        writer.append_u16(1);

        writer.append_i16(-3);
        writer.append_i16(2);
        writer.append_u16(2);
        writer.append_u16(2);
        writer.append_u32(2); // compressed
        writer.append_u32(0);
        writer.append_u32(0);
        writer.append_u32(32);

        writer.append_u8_slice(&[3, 0, 9, 3, 0, 9]);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unit.shp");
        fs::write(&path, writer.data).unwrap();

        let dump = dump_info(&path).unwrap();

        assert!(dump.contains("Sprite bound: 8x4"));
        assert!(dump.contains("Frames: 1"));
        assert!(dump.contains("2x2 at (-3, 2) compressed offset 32"));
    }
}
