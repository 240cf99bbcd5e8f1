use nom::{bytes::complete::take, combinator::map, multi::count, IResult as _IResult};

use crate::types::{Palette, PALETTE_ENTRY_COUNT};

type IResult<'a, T> = _IResult<&'a [u8], T>;

// channels carry 6 significant bits on disk
fn parse_entry(i: &[u8]) -> IResult<[u8; 3]> {
    map(take(3usize), |rgb: &[u8]| {
        [rgb[0] << 2, rgb[1] << 2, rgb[2] << 2]
    })(i)
}

pub fn parse_palette(i: &[u8]) -> IResult<Palette> {
    map(count(parse_entry, PALETTE_ENTRY_COUNT), |entries| Palette {
        entries,
    })(i)
}
