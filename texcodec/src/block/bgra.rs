//! Uncompressed BGRA8 <-> RGBA8 conversion.

/// Swap the red and blue channel of every 4-byte pixel.
///
/// The operation is its own inverse, so it serves both directions.
pub fn swap_red_blue(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for pixel in out.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    out
}

/// Convert BGRA8 texels to RGBA8 pixels.
pub fn bgra_to_rgba(data: &[u8]) -> Vec<u8> {
    swap_red_blue(data)
}

/// Convert RGBA8 pixels to BGRA8 texels.
pub fn rgba_to_bgra(pixels: &[u8]) -> Vec<u8> {
    swap_red_blue(pixels)
}
