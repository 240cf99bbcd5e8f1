pub const FILE_HEADER_SIZE: usize = 32;
pub const OFFSET_ENTRY_SIZE: usize = 4;
pub const BLOCK_HEADER_SIZE: usize = 64;

// bit 0 of BlockHeader::extra_flags
pub const EXTRA_FLAG_HAS_EXTRA: u32 = 1;

pub const REMAP_TABLE_LEN: usize = 256;
