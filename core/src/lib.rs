pub use chip8::{Chip8, StepOutcome};
pub use constants::STEPS_PER_SECOND;
pub use error::Chip8Error;
pub use frame::FrameBuffer;
pub use instruction::Instruction;

mod chip8;
pub mod constants;
mod error;
pub mod frame;
mod instruction;
mod keypad;
pub mod memory;
mod opcode;
mod operations;
mod state;
