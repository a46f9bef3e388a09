//! Moving 4×4 tiles between flat RGBA8 buffers and block arrays.

use crate::error::{TexError, TexResult};

/// Number of 4-pixel blocks needed to cover `pixels`.
pub fn blocks_for(pixels: u32) -> usize {
    pixels.div_ceil(4) as usize
}

/// Fail if either dimension is zero.
pub fn check_dimensions(width: u32, height: u32) -> TexResult<()> {
    if width == 0 || height == 0 {
        return Err(TexError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Fail unless `pixels` holds exactly `width * height` RGBA8 pixels.
pub fn check_pixel_buffer(pixels: &[u8], width: u32, height: u32) -> TexResult<()> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(TexError::PixelBufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Fail unless `data` holds at least `needed` bytes.
///
/// Extra trailing bytes are allowed; they are ignored by the decoders.
pub fn check_compressed_data(data: &[u8], needed: usize) -> TexResult<()> {
    if data.len() < needed {
        return Err(TexError::UnexpectedEndOfData {
            needed,
            available: data.len(),
        });
    }
    Ok(())
}

/// Copy the 4×4 tile at block coordinates `(block_x, block_y)`.
///
/// Pixels outside `width × height` come back as transparent black.
pub fn extract_block(
    pixels: &[u8],
    width: usize,
    height: usize,
    block_x: usize,
    block_y: usize,
) -> [[u8; 4]; 16] {
    let mut block = [[0u8; 4]; 16];

    for y in 0..4 {
        let pixel_y = block_y * 4 + y;
        if pixel_y >= height {
            break;
        }
        for x in 0..4 {
            let pixel_x = block_x * 4 + x;
            if pixel_x >= width {
                break;
            }
            let offset = (pixel_y * width + pixel_x) * 4;
            block[y * 4 + x].copy_from_slice(&pixels[offset..offset + 4]);
        }
    }

    block
}

/// Write a decoded tile back at block coordinates `(block_x, block_y)`.
///
/// Tile pixels that fall outside `width × height` are dropped.
pub fn store_block(
    out: &mut [u8],
    width: usize,
    height: usize,
    block_x: usize,
    block_y: usize,
    block: &[[u8; 4]; 16],
) {
    for y in 0..4 {
        let pixel_y = block_y * 4 + y;
        if pixel_y >= height {
            break;
        }
        for x in 0..4 {
            let pixel_x = block_x * 4 + x;
            if pixel_x >= width {
                break;
            }
            let offset = (pixel_y * width + pixel_x) * 4;
            out[offset..offset + 4].copy_from_slice(&block[y * 4 + x]);
        }
    }
}
