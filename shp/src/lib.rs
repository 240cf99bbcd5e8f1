//! Sprite container (SHP) parsing and writing.
//!
//! A file is a 4-field header, a fixed frame header array, and one shared
//! pixel blob every frame points into by absolute file offset. Frames are
//! either raw `width*height` bytes or row-compressed with a leading u16
//! pitch per row. Rewrites reproduce headers and offsets verbatim; only
//! blob contents change, and only through a remap.

mod constants;
pub mod error;
mod parser;
mod types;
mod writer;

pub use constants::*;
pub use parser::parse_shp;
pub use types::*;

#[cfg(test)]
mod test {
    use byte_writer::ByteWriter;

    use super::*;

    #[allow(clippy::too_many_arguments)]
    fn write_frame_header(
        writer: &mut ByteWriter,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        flags: u32,
        color: u32,
        reserved: u32,
        data_offset: u32,
    ) {
        writer.append_i16(x);
        writer.append_i16(y);
        writer.append_u16(width);
        writer.append_u16(height);
        writer.append_u32(flags);
        writer.append_u32(color);
        writer.append_u32(reserved);
        writer.append_u32(data_offset);
    }

    // frame 0 raw 2x2 at blob 0, frame 1 compressed 4x2 at blob 4
    fn sample_shp_bytes() -> Vec<u8> {
        let mut writer = ByteWriter::new();

        writer.append_u16(1);
        writer.append_u16(8);
        writer.append_u16(4);
        writer.append_u16(2);

        write_frame_header(&mut writer, -3, 2, 2, 2, 0, 0x00112233, 77, 56);
        write_frame_header(&mut writer, 0, 1, 4, 2, 2, 0, 0, 60);

        writer.append_u8_slice(&[0x05, 0x00, 0x10, 0x20]); // frame 0, raw
        writer.append_u8_slice(&[0x05, 0x00, 0x07, 0x00, 0x09]); // frame 1, row 1
        writer.append_u8_slice(&[0x04, 0x00, 0x30, 0x41]); // frame 1, row 2

        writer.data
    }

    fn identity_table() -> Vec<u8> {
        (0..=255).collect()
    }

    #[test]
    fn parses_headers_and_windows() {
        let shp = Shp::from_bytes(&sample_shp_bytes()).unwrap();

        assert_eq!(shp.frame_count(), 2);
        assert_eq!(shp.header.width, 8);
        assert!(!shp.frame_headers[0].is_compressed());
        assert!(shp.frame_headers[1].is_compressed());
        assert_eq!(shp.frame_headers[0].color, 0x00112233);
        assert_eq!(shp.frame_headers[0].reserved, 77);

        assert_eq!(
            shp.frame_bound(0),
            Rect {
                x: -3,
                y: 2,
                width: 2,
                height: 2
            }
        );
        assert_eq!(shp.frame_bound(2), Rect::default());
        assert_eq!(
            shp.file_bound(),
            Rect {
                x: 0,
                y: 0,
                width: 8,
                height: 4
            }
        );

        // windows run to the end of the shared blob
        assert_eq!(shp.pixel_data(0).unwrap().len(), 13);
        assert_eq!(
            shp.pixel_data(1).unwrap(),
            [0x05, 0x00, 0x07, 0x00, 0x09, 0x04, 0x00, 0x30, 0x41]
        );
        assert!(shp.pixel_data(2).is_none());
    }

    #[test]
    fn rewrite_reproduces_source_bytes() {
        let bytes = sample_shp_bytes();
        let shp = Shp::from_bytes(&bytes).unwrap();

        assert_eq!(shp.file_size(), bytes.len());
        assert_eq!(shp.write_to_bytes(), bytes);
    }

    #[test]
    fn identity_table_is_a_noop() {
        let bytes = sample_shp_bytes();
        let mut shp = Shp::from_bytes(&bytes).unwrap();

        shp.remap_colors(&identity_table()).unwrap();

        assert_eq!(shp.write_to_bytes(), bytes);
    }

    #[test]
    fn remap_walks_compressed_rows() {
        let mut shp = Shp::from_bytes(&sample_shp_bytes()).unwrap();

        let mut table = identity_table();
        table[0x00] = 0x99;
        table[0x05] = 0x50;
        table[0x07] = 0x70;
        table[0x09] = 0x90;
        table[0x10] = 0xa0;
        table[0x20] = 0xb0;
        table[0x30] = 0xc0;
        table[0x41] = 0xd0;

        shp.remap_colors(&table).unwrap();

        // raw frames remap every byte, zeros included; compressed rows
        // leave pitch fields, zero tokens and run-length bytes alone
        assert_eq!(
            shp.pixel_data(0).unwrap(),
            [0x50, 0x99, 0xa0, 0xb0, 0x05, 0x00, 0x70, 0x00, 0x09, 0x04, 0x00, 0xc0, 0xd0]
        );
    }

    #[test]
    fn pitch_field_counts_itself() {
        let mut writer = ByteWriter::new();

        writer.append_u16(0);
        writer.append_u16(4);
        writer.append_u16(1);
        writer.append_u16(1);

        write_frame_header(&mut writer, 0, 0, 4, 1, 2, 0, 0, 32);

        writer.append_u8_slice(&[0x06, 0x00, 0x05, 0x00, 0x02, 0x00]);

        let mut shp = Shp::from_bytes(&writer.data).unwrap();

        let mut table = identity_table();
        table[0x00] = 0xee;
        table[0x05] = 0x99;
        table[0x02] = 0x77;

        shp.remap_colors(&table).unwrap();

        // pitch bytes, zero tokens and the 0x02 run length are not pixels,
        // so none of them move even with a table that maps them elsewhere
        assert_eq!(
            shp.pixel_data(0).unwrap(),
            [0x06, 0x00, 0x99, 0x00, 0x02, 0x00]
        );
    }

    #[test]
    fn overrun_abandons_remaining_rows_only() {
        let mut writer = ByteWriter::new();

        writer.append_u16(0);
        writer.append_u16(4);
        writer.append_u16(4);
        writer.append_u16(2);

        // the compressed frame sits after the raw frame's bytes and its
        // second row claims more bytes than the blob holds
        write_frame_header(&mut writer, 0, 0, 4, 2, 2, 0, 0, 58);
        write_frame_header(&mut writer, 1, 1, 2, 1, 0, 0, 0, 56);

        writer.append_u8_slice(&[0x11, 0x22]); // frame 1, raw
        writer.append_u8_slice(&[0x04, 0x00, 0x05, 0x05]); // frame 0, row 1
        writer.append_u8_slice(&[0x09, 0x00, 0x00]); // frame 0, row 2, bad pitch

        let mut shp = Shp::from_bytes(&writer.data).unwrap();

        let mut table = identity_table();
        table[0x00] = 0xee;
        table[0x05] = 0x55;
        table[0x11] = 0xaa;
        table[0x22] = 0xbb;

        shp.remap_colors(&table).unwrap();

        // row 1 and the raw frame are remapped, the bad row is left alone
        assert_eq!(
            shp.pixel_data(1).unwrap(),
            [0xaa, 0xbb, 0x04, 0x00, 0x55, 0x55, 0x09, 0x00, 0x00]
        );
    }

    #[test]
    fn short_table_is_rejected_without_mutation() {
        let bytes = sample_shp_bytes();
        let mut shp = Shp::from_bytes(&bytes).unwrap();

        assert!(shp.remap_colors(&vec![0u8; 255]).is_err());
        assert_eq!(shp.write_to_bytes(), bytes);
    }

    #[test]
    fn rejects_data_offset_outside_blob() {
        let bytes = sample_shp_bytes();

        // before the blob
        let mut under = bytes.clone();
        under[28..32].copy_from_slice(&55u32.to_le_bytes());
        assert!(Shp::from_bytes(&under).is_err());

        // past the end of the file
        let mut over = bytes.clone();
        over[28..32].copy_from_slice(&70u32.to_le_bytes());
        assert!(Shp::from_bytes(&over).is_err());

        // exactly at the end resolves to an empty window
        let mut at_end = bytes;
        at_end[28..32].copy_from_slice(&69u32.to_le_bytes());
        let shp = Shp::from_bytes(&at_end).unwrap();
        assert!(shp.pixel_data(0).unwrap().is_empty());
    }
}
