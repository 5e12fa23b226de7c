use log::warn;

use crate::constants::{ADDRESS_MASK, MEMORY_SIZE, SPRITE_SHEET, SPRITE_SHEET_ADDR};
use crate::error::Chip8Error;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// ```text
/// 0x000-0x04F  reserved for the interpreter
/// 0x050-0x09F  sprite sheet; read-only
/// 0x0A0-0x1FF  unused
/// 0x200-0xFFF  program and work area
/// ```
///
/// Addresses are masked to 12 bits on every access so `I` may run past the end and wrap.
#[derive(Copy, Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet installed
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let start = SPRITE_SHEET_ADDR as usize;
        bytes[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Whether `addr` falls inside the sprite sheet
    pub fn is_protected(addr: u16) -> bool {
        let start = SPRITE_SHEET_ADDR;
        let end = SPRITE_SHEET_ADDR + SPRITE_SHEET.len() as u16;
        (start..end).contains(&(addr & ADDRESS_MASK))
    }

    /// Copies `data` into memory starting at `base`.
    ///
    /// Nothing is written unless the whole of `data` fits below the end of memory
    /// without touching the sprite sheet.
    pub fn load(&mut self, data: &[u8], base: u16) -> Result<(), Chip8Error> {
        let start = base as usize;
        let end = start + data.len();
        let sheet_start = SPRITE_SHEET_ADDR as usize;
        let sheet_end = sheet_start + SPRITE_SHEET.len();
        let overlaps_sheet = !data.is_empty() && start < sheet_end && sheet_start < end;
        if end > MEMORY_SIZE || overlaps_sheet {
            return Err(Chip8Error::OutOfBounds {
                base,
                size: data.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDRESS_MASK) as usize]
    }

    /// Writes a single byte; writes into the sprite sheet are dropped
    pub fn write(&mut self, addr: u16, value: u8) {
        let addr = addr & ADDRESS_MASK;
        if Memory::is_protected(addr) {
            warn!("dropped write of {:#04X} to sprite sheet at {:#05X}", value, addr);
            return;
        }
        self.bytes[addr as usize] = value;
    }

    /// The whole address space, for inspection
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
