use crate::constants::{PROGRAM_START, STACK_SIZE};
use crate::error::Chip8Error;
use crate::frame::{FrameBuffer, BLANK_FRAME};
use crate::memory::Memory;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 16-bit memory address register, only the low 12 bits address memory
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound), both decremented once per step
///
/// ## Memory
/// - 16 level stack of return addresses
/// - 4096 bytes of addressable memory
/// - 64x32 byte frame buffer
///     - stores the contents of the next frame to be drawn
///
/// ## Input
/// - Emulation halts while a register is waiting on a key press
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory: Memory::new(),
            frame_buffer: BLANK_FRAME,
            draw_flag: false,
            register_needing_key: None,
        }
    }

    /// Push a return address; fails when all 16 levels are in use
    pub fn push(&mut self, addr: u16) -> Result<(), Chip8Error> {
        if self.sp as usize == STACK_SIZE {
            return Err(Chip8Error::StackOverflow { pc: self.pc });
        }
        self.stack[self.sp as usize] = addr;
        self.sp += 1;
        Ok(())
    }

    /// Pop the most recent return address; fails when the stack is empty
    pub fn pop(&mut self) -> Result<u16, Chip8Error> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp as usize])
    }

    /// Counts both timers down by one, stopping at 0
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
