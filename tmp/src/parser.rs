use nom::{
    bytes::complete::take,
    combinator::{fail, map, map_res},
    error::context,
    multi::count,
    number::complete::{le_i32, le_u32, le_u64, le_u8},
    sequence::tuple,
    IResult as _IResult,
};

use crate::{
    constants::OFFSET_ENTRY_SIZE,
    types::{Block, BlockHeader, Ramp, Tmp, TmpHeader},
};

type IResult<'a, T> = _IResult<&'a [u8], T>;

fn parse_header(i: &[u8]) -> IResult<TmpHeader> {
    map(
        tuple((le_u64, le_u64, le_u64, le_u64)),
        |(blocks_x, blocks_y, block_width, block_height)| TmpHeader {
            blocks_x,
            blocks_y,
            block_width,
            block_height,
        },
    )(i)
}

fn parse_block_header(i: &[u8]) -> IResult<BlockHeader> {
    let (i, (x, y, reserved1)) = tuple((le_i32, le_i32, count(le_u32, 3)))(i)?;
    let (i, (extra_x, extra_y, pad)) = tuple((le_i32, le_i32, le_u32))(i)?;
    let (i, (extra_width, extra_height, extra_flags)) = tuple((le_u64, le_u64, le_u32))(i)?;
    let (i, (height, terrain_type, ramp)) =
        tuple((le_u8, le_u8, map_res(le_u8, Ramp::try_from)))(i)?;
    let (i, reserved2) = take(9usize)(i)?;

    let mut reserved = [0u8; 9];
    reserved.copy_from_slice(reserved2);

    Ok((
        i,
        BlockHeader {
            x,
            y,
            reserved1: [reserved1[0], reserved1[1], reserved1[2]],
            extra_x,
            extra_y,
            pad,
            extra_width,
            extra_height,
            extra_flags,
            height,
            terrain_type,
            ramp,
            reserved2: reserved,
        },
    ))
}

pub fn parse_tmp(i: &[u8]) -> IResult<Tmp> {
    let file_start = i;

    let (i, header) = parse_header(i)?;

    let Some(slot_count) = header.blocks_x.checked_mul(header.blocks_y) else {
        return context("block grid dimensions overflow", fail)(b"");
    };

    if slot_count > (i.len() / OFFSET_ENTRY_SIZE) as u64 {
        return context("offset table larger than the file", fail)(b"");
    }

    let (i, offsets) = count(le_u32, slot_count as usize)(i)?;

    let Some(tile_area) = header.block_width.checked_mul(header.block_height) else {
        return context("block dimensions overflow", fail)(b"");
    };
    let tile_size = tile_area / 2;

    let mut blocks = Vec::new();

    for &offset in offsets.iter().filter(|offset| **offset != 0) {
        let Some(record) = file_start.get(offset as usize..) else {
            return context("block offset outside the file", fail)(b"");
        };

        let (record, block_header) = parse_block_header(record)?;
        let (record, pixels) = take((tile_size * 2) as usize)(record)?;

        let mut pixels = pixels.to_vec();

        if block_header.has_extra() {
            let Some(extra_bytes) = block_header
                .extra_width
                .checked_mul(block_header.extra_height)
                .and_then(|size| size.checked_mul(2))
            else {
                return context("extra overlay dimensions overflow", fail)(b"");
            };

            let (_, extra_pixels) = take(extra_bytes as usize)(record)?;

            pixels.extend_from_slice(extra_pixels);
        }

        blocks.push(Block {
            header: block_header,
            pixels,
        });
    }

    Ok((
        i,
        Tmp {
            header,
            offsets,
            blocks,
        },
    ))
}
