use nom::{
    combinator::{fail, map, rest},
    error::context,
    multi::count,
    number::complete::{le_i16, le_u16, le_u32},
    sequence::tuple,
    IResult as _IResult,
};

use crate::{
    constants::{FILE_HEADER_SIZE, FRAME_HEADER_SIZE},
    types::{FrameHeader, Shp, ShpHeader},
};

type IResult<'a, T> = _IResult<&'a [u8], T>;

fn parse_header(i: &[u8]) -> IResult<ShpHeader> {
    map(
        tuple((le_u16, le_u16, le_u16, le_u16)),
        |(type_, width, height, frames)| ShpHeader {
            type_,
            width,
            height,
            frames,
        },
    )(i)
}

fn parse_frame_header(i: &[u8]) -> IResult<FrameHeader> {
    map(
        tuple((le_i16, le_i16, le_u16, le_u16, le_u32, le_u32, le_u32, le_u32)),
        |(x, y, width, height, flags, color, reserved, data_offset)| FrameHeader {
            x,
            y,
            width,
            height,
            flags,
            color,
            reserved,
            data_offset,
        },
    )(i)
}

pub fn parse_shp(i: &[u8]) -> IResult<Shp> {
    let (i, header) = parse_header(i)?;
    let (i, frame_headers) = count(parse_frame_header, header.frames as usize)(i)?;
    let (i, pixels) = rest(i)?;

    let pixel_start = FILE_HEADER_SIZE + frame_headers.len() * FRAME_HEADER_SIZE;

    // every frame must point inside the shared pixel blob
    if frame_headers.iter().any(|frame| {
        let offset = frame.data_offset as usize;

        offset < pixel_start || offset - pixel_start > pixels.len()
    }) {
        return context("frame data offset outside the pixel blob", fail)(b"");
    }

    Ok((
        i,
        Shp {
            header,
            frame_headers,
            pixels: pixels.to_vec(),
        },
    ))
}
