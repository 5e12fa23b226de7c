use std::collections::VecDeque;
use std::io::Read;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{ADDRESS_MASK, MAX_PROGRAM_SIZE, MAX_SAVED_STATES, PROGRAM_START};
use crate::error::Chip8Error;
use crate::frame::FrameBuffer;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::opcode;
use crate::operations::execute;
use crate::state::State;

/// What a single call to `step` did
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction ran to completion (or, for `LD Vx, K`, started waiting)
    Executed(Instruction),
    /// The opcode means nothing; it was logged and stepped over
    Unsupported(u16),
    /// Still waiting on a key press; nothing was fetched
    AwaitingKey,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding
///  - the `keypad`, with public interfaces for manipulating it
///  - a source of randomness for `RND`, seedable so runs can be replayed
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - stepping and rewinding the CPU; timers tick once per step
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8<R = StdRng> {
    state: State,
    previous_states: VecDeque<State>,
    keypad: Keypad,
    rng: R,
}

impl Chip8<StdRng> {
    pub fn new() -> Self {
        Chip8::with_rng(StdRng::from_entropy())
    }

    /// A Chip-8 whose random numbers are reproducible from `seed`
    pub fn seeded(seed: u64) -> Self {
        Chip8::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Chip8<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Chip8<R> {
    pub fn with_rng(rng: R) -> Self {
        Chip8 {
            state: State::new(),
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
            keypad: Keypad::new(),
            rng,
        }
    }

    /// Copy a program into memory at 0x200.
    /// Programs larger than the space above 0x200 are rejected and memory is left untouched.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Chip8Error> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: program.len(),
                max_size: MAX_PROGRAM_SIZE,
            });
        }
        self.state.memory.load(program, PROGRAM_START)?;
        debug!("loaded {} byte program at {:#05X}", program.len(), PROGRAM_START);
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Chip8Error> {
        let mut program = Vec::with_capacity(MAX_PROGRAM_SIZE);
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Advances the CPU by a single step
    /// - if awaiting a key press, completes the wait when a new press has arrived
    /// - otherwise fetches, decodes and executes the opcode at the pc
    /// - decrements both timers
    ///
    /// A failed step changes nothing; the pc still points at the offending instruction.
    pub fn step(&mut self) -> Result<StepOutcome, Chip8Error> {
        let before = self.state;

        let outcome = match self.state.register_needing_key {
            Some(register) => self.resume_on_key(register),
            None => self.execute_next()?,
        };

        self.state.tick_timers();
        self.save_state(before);
        Ok(outcome)
    }

    /// Restores the state from before the most recent step, if there is one.
    /// Returns whether anything was restored.
    /// The redraw flag is raised whenever the restored frame differs from the one on display.
    pub fn rewind(&mut self) -> bool {
        match self.previous_states.pop_front() {
            Some(mut state) => {
                if state.frame_buffer != self.state.frame_buffer {
                    state.draw_flag = true;
                }
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..=0xF, of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.keypad.press(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..=0xF, of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.keypad.release(key);
    }

    /// Replace the pressed status of every key at once
    pub fn set_keys(&mut self, keys: [bool; 16]) {
        self.keypad.set(keys);
    }

    pub fn keys(&self) -> [bool; 16] {
        self.keypad.snapshot()
    }

    /// The register `LD Vx, K` is waiting to fill, if any
    pub fn awaiting_key(&self) -> Option<u8> {
        self.state.register_needing_key
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn needs_redraw(&self) -> bool {
        self.state.draw_flag
    }

    /// Called by the display once it has drawn the current frame
    pub fn acknowledge_redraw(&mut self) {
        self.state.draw_flag = false;
    }

    /// Reads register `V{index}`; only the low nibble of `index` is used
    pub fn register(&self, index: u8) -> u8 {
        self.state.v[(index & 0xF) as usize]
    }

    /// Writes register `V{index}`; only the low nibble of `index` is used
    pub fn set_register(&mut self, index: u8, value: u8) {
        self.state.v[(index & 0xF) as usize] = value;
    }

    pub fn i(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn stack_pointer(&self) -> u8 {
        self.state.sp
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    /// Writes a single byte of memory; the address is masked to 12 bits and
    /// writes into the sprite sheet are dropped
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.state.memory.write(addr, value);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let pc = self.state.pc;
        opcode::from_bytes(
            self.state.memory.read(pc),
            self.state.memory.read(pc.wrapping_add(1)),
        )
    }

    fn execute_next(&mut self) -> Result<StepOutcome, Chip8Error> {
        let pc = self.state.pc;
        let op = self.get_op();
        let Some(instruction) = Instruction::decode(op) else {
            warn!("unsupported opcode {:04X} at {:#05X}, skipping", op, pc);
            self.state.pc = pc.wrapping_add(2) & ADDRESS_MASK;
            return Ok(StepOutcome::Unsupported(op));
        };

        trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:03X}",
            pc,
            op,
            instruction.to_string(),
            self.state.v,
            self.state.i
        );

        // work on a copy so a failing instruction leaves no trace
        let mut next = self.state;
        execute(instruction, &mut next, &mut self.keypad, &mut self.rng)?;
        self.state = next;

        if let Instruction::LdVxKey { x } = instruction {
            debug!("V{:X} waiting for a key press", x);
        }
        Ok(StepOutcome::Executed(instruction))
    }

    fn resume_on_key(&mut self, register: u8) -> StepOutcome {
        match self.keypad.take_press() {
            Some(key) => {
                debug!("V{:X} received key {:X}", register, key);
                self.state.v[register as usize] = key;
                self.state.register_needing_key = None;
                self.state.pc = self.state.pc.wrapping_add(2) & ADDRESS_MASK;
                StepOutcome::Executed(Instruction::LdVxKey { x: register })
            }
            None => StepOutcome::AwaitingKey,
        }
    }

    /// Puts a state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self, state: State) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(state);
    }
}
