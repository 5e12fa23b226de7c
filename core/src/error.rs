use std::io;

use thiserror::Error;

/// Errors surfaced by the Chip-8 to whoever drives it.
///
/// Unsupported opcodes are deliberately absent: they are logged and skipped,
/// see `StepOutcome::Unsupported`.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("cannot place {size} bytes at {base:#05X}")]
    OutOfBounds { base: u16, size: usize },

    #[error("stack overflow: CALL at {pc:#05X} with all 16 levels in use")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: RET at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),
}
