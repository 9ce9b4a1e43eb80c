use std::mem;

pub const WORD_BYTES     : usize = mem::size_of::<u16>();

/// Heap length in words.
pub const HEAP_SIZE      : usize = 1 << 15;
pub const REGISTER_COUNT : usize = 8;

/// All processor arithmetic wraps at this 15 bit bound.
pub const MODULO         : u32 = 1 << 15;

/// First word value that selects a register instead of a heap address.
pub const REGISTER_BASE  : u16 = 0x8000;
/// First invalid word value.
pub const REGISTER_LIMIT : u16 = REGISTER_BASE + REGISTER_COUNT as u16;
