use emu8_core::constants::DISPLAY_WIDTH;
use emu8_core::FrameBuffer;

const LIT: char = '#';
const DARK: char = '.';

/// Renders a frame as one line of text per row, `#` for lit pixels and `.` for dark ones.
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    let mut text = String::with_capacity(frame.len() + frame.len() / DISPLAY_WIDTH);
    for row in frame.chunks(DISPLAY_WIDTH) {
        text.extend(row.iter().map(|&p| if p == 1 { LIT } else { DARK }));
        text.push('\n');
    }
    text
}
