pub const FILE_HEADER_SIZE: usize = 8;
pub const FRAME_HEADER_SIZE: usize = 24;

// bit 1 of FrameHeader::flags
pub const FRAME_FLAG_COMPRESSED: u32 = 2;

pub const REMAP_TABLE_LEN: usize = 256;
