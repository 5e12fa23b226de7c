use log::{error, info};
use rand::Rng;

use emu8_core::{Chip8, Chip8Error, StepOutcome};

/// Runs `steps` steps as fast as possible with no keys held.
/// Returns how many unsupported opcodes were stepped over.
pub fn run<R: Rng>(chip8: &mut Chip8<R>, steps: usize) -> Result<usize, Chip8Error> {
    let mut unsupported = 0;
    for step in 0..steps {
        match chip8.step() {
            Ok(StepOutcome::Unsupported(_)) => unsupported += 1,
            Ok(_) => {}
            Err(e) => {
                error!("halted after {} steps at {:#05X}: {}", step, chip8.pc(), e);
                return Err(e);
            }
        }
    }
    if let Some(register) = chip8.awaiting_key() {
        info!("stopped while V{:X} was waiting for a key", register);
    }
    chip8.acknowledge_redraw();
    Ok(unsupported)
}
