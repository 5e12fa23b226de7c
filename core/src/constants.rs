/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every computed address
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// 0x200 is where ROMs are loaded into memory; 0x000..0x200 belonged to the interpreter
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the built-in hex glyphs live
pub const SPRITE_SHEET_ADDR: u16 = 0x050;

/// Rows in a single glyph
pub const GLYPH_HEIGHT: u16 = 5;

/// Levels of subroutine nesting
pub const STACK_SIZE: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Default rate at which a driver should call `step`.
/// Timers tick once per step, so this keeps them at their nominal 60Hz.
pub const STEPS_PER_SECOND: u32 = 60;

/// How many steps can be rewound
pub const MAX_SAVED_STATES: usize = 600;

/// # Sprite Sheet
/// Sixteen 8x5 glyphs for the hex digits 0..F, only the high nibble of each row is lit.
///
/// ```text
/// 0xF0  ####
/// 0x90  #  #
/// 0x90  #  #
/// 0x90  #  #
/// 0xF0  ####
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
