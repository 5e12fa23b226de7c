use std::error::Error;
use std::time::Instant;

use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use emu8_core::Chip8;
use emu8_display::Display;

use crate::args::Args;
use crate::keymap::keymap;

pub fn run(mut chip8: Chip8, args: &Args) -> Result<(), Box<dyn Error>> {
    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display: Display = Display::new(&sdl, args.scale)?;
    let mut events = sdl.event_pump()?;

    // Set initial timing
    let cycle_time = args.cycle_time();
    let mut last_cycle: Instant = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward: bool = false;
    // Whether the game's state should be cycled forwards or backwards
    let mut rewind: bool = false;

    'event: loop {
        // If the draw flag is set, render the current frame and unset it
        if let Some(frame) = chip8.get_frame() {
            display.render(frame)?;
            chip8.acknowledge_redraw();
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Escape, _) => break 'event,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Backspace, _) => rewind = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    (Keycode::Backspace, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if rewind {
            chip8.rewind();
        } else if let Err(e) = chip8.step() {
            error!("halted at {:#05X}: {}", chip8.pc(), e);
            return Err(e.into());
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("window closed");
    Ok(())
}
