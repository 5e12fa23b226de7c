use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use emu8_core::STEPS_PER_SECOND;

/// Runs a Chip-8 ROM
#[derive(Parser, Debug)]
#[command(name = "chip8", version)]
pub struct Args {
    /// Path to the ROM to run
    pub rom: PathBuf,

    /// Steps per second; both timers tick once per step
    #[arg(long, default_value_t = STEPS_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..))]
    pub hz: u32,

    /// Size multiplier for each pixel of the window
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run without a window and print the final frame
    #[arg(long)]
    pub headless: bool,

    /// How many steps a headless run lasts
    #[arg(long, default_value_t = 600)]
    pub steps: usize,

    /// Log every executed instruction
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Wall clock time one step should take
    pub fn cycle_time(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.hz))
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else {
            "info"
        }
    }
}
