use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use log::info;

use emu8_core::Chip8;
use emu8_display::frame_to_text;

mod args;
mod headless;
#[cfg(feature = "sdl")]
mod keymap;
#[cfg(feature = "sdl")]
mod run;

use args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    let mut chip8 = match args.seed {
        Some(seed) => Chip8::seeded(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&args.rom)?;
    let mut reader = BufReader::new(file);
    chip8.load_rom(&mut reader)?;
    info!("loaded {}", args.rom.display());

    if args.headless || cfg!(not(feature = "sdl")) {
        let unsupported = headless::run(&mut chip8, args.steps)?;
        info!(
            "ran {} steps, {} unsupported opcodes skipped",
            args.steps, unsupported
        );
        print!("{}", frame_to_text(chip8.frame_buffer()));
        return Ok(());
    }

    #[cfg(feature = "sdl")]
    run::run(chip8, &args)?;

    Ok(())
}
