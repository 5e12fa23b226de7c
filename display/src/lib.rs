//! Display sinks for the Chip-8 frame buffer.
//!
//! The conversions are pure so they can be tested without a video device;
//! the SDL2 window is only built with the `sdl` feature.

pub use text::frame_to_text;
pub use texture::frame_to_rgb24;

#[cfg(feature = "sdl")]
pub use display::Display;

#[cfg(feature = "sdl")]
mod display;
mod text;
mod texture;
