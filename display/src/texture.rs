use emu8_core::FrameBuffer;

/// Formats a Chip-8 FrameBuffer as an RGB24 texture.
///
/// An RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
///
/// This creates a black and white rendering by:
/// - Triplicating each cell of the (already row-major) frame to represent the RGB values of each pixel
/// - Multiplying each value by 255 to convert from a binary state to 0-255 intensity
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_rgb24(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flat_map(|&a| std::iter::repeat(a).take(3))
        .map(|a| a * 255)
        .collect()
}
