use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is 64x32 cells stored row by row, indexed as `y * DISPLAY_WIDTH + x`.
/// Each cell is 0 (dark) or 1 (lit).
pub type FrameBuffer = [u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// A frame with every pixel dark
pub const BLANK_FRAME: FrameBuffer = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// Index of the cell at (x, y), wrapping both coordinates around the screen edges
pub fn index(x: usize, y: usize) -> usize {
    (y % DISPLAY_HEIGHT) * DISPLAY_WIDTH + x % DISPLAY_WIDTH
}

/// XORs a sprite onto the frame with its top left corner at (x, y).
///
/// Each byte of `rows` is one 8 pixel row, most significant bit leftmost.
/// Pixels that fall off an edge wrap around to the opposite one.
/// Returns whether any lit pixel was turned off.
pub fn draw_sprite(frame: &mut FrameBuffer, x: usize, y: usize, rows: &[u8]) -> bool {
    let mut collision = false;
    for (row, byte) in rows.iter().enumerate() {
        for bit in 0..8 {
            if byte & (0x80 >> bit) == 0 {
                continue;
            }
            let cell = &mut frame[index(x + bit, y + row)];
            collision |= *cell == 1;
            *cell ^= 1;
        }
    }
    collision
}
