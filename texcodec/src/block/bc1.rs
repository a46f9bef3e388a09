//! BC1/DXT1 block compression.
//!
//! BC1 compresses 4×4 blocks of RGB(A) pixels to 8 bytes:
//! - 2 bytes: color0 (RGB565)
//! - 2 bytes: color1 (RGB565)
//! - 4 bytes: 16 2-bit indices (one per pixel, raster order)
//!
//! When `color0 > color1` the indices select from four opaque colors:
//! - 00: color0
//! - 01: color1
//! - 10: (2*color0 + color1) / 3
//! - 11: (color0 + 2*color1) / 3
//!
//! Otherwise entry 10 is the average of the endpoints and 11 is transparent.

use crate::block::color::{
    channel_sum_endpoints, color_palette, nearest_color_index, BC1_ALPHA_THRESHOLD,
};
use crate::block::BlockFormat;

/// Bytes per compressed BC1 block.
pub const BC1_BLOCK_SIZE: usize = 8;

/// BC1 block codec.
pub struct Bc1;

impl Bc1 {
    /// Decompress an 8-byte block to 16 RGBA pixels in raster order.
    pub fn decode_block(block: &[u8; 8]) -> [[u8; 4]; 16] {
        let c0 = u16::from_le_bytes([block[0], block[1]]);
        let c1 = u16::from_le_bytes([block[2], block[3]]);
        let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

        let palette = color_palette(c0, c1, true);

        let mut pixels = [[0u8; 4]; 16];
        for (i, pixel) in pixels.iter_mut().enumerate() {
            *pixel = palette[((indices >> (i * 2)) & 0x3) as usize];
        }
        pixels
    }

    /// Compress 16 RGBA pixels to an 8-byte block.
    ///
    /// Blocks where every pixel is opaque use 4-color mode. If any pixel has
    /// alpha below 128 the block switches to 3-color mode and those pixels
    /// take the transparent entry.
    pub fn encode_block(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let has_transparency = pixels.iter().any(|p| p[3] < BC1_ALPHA_THRESHOLD);

        let (lo, hi) = if has_transparency {
            let mut opaque = pixels
                .iter()
                .filter(|p| p[3] >= BC1_ALPHA_THRESHOLD)
                .peekable();
            if opaque.peek().is_some() {
                channel_sum_endpoints(opaque)
            } else {
                (0, 0)
            }
        } else {
            channel_sum_endpoints(pixels.iter())
        };

        // 3-color mode needs c0 <= c1, 4-color mode needs c0 > c1
        let (c0, c1) = if has_transparency {
            (lo.min(hi), lo.max(hi))
        } else {
            (lo.max(hi), lo.min(hi))
        };

        let palette = color_palette(c0, c1, true);
        let opaque_entries = if c0 > c1 { 4 } else { 3 };

        let mut indices: u32 = 0;
        for (i, pixel) in pixels.iter().enumerate() {
            let index = if has_transparency && pixel[3] < BC1_ALPHA_THRESHOLD {
                3
            } else {
                nearest_color_index(pixel, &palette[..opaque_entries])
            };
            indices |= (index as u32) << (i * 2);
        }

        Self::pack(c0, c1, indices)
    }

    fn pack(c0: u16, c1: u16, indices: u32) -> [u8; 8] {
        let mut output = [0u8; 8];
        output[0..2].copy_from_slice(&c0.to_le_bytes());
        output[2..4].copy_from_slice(&c1.to_le_bytes());
        output[4..8].copy_from_slice(&indices.to_le_bytes());
        output
    }
}

impl BlockFormat for Bc1 {
    const BLOCK_SIZE: usize = BC1_BLOCK_SIZE;

    fn decode(block: &[u8]) -> [[u8; 4]; 16] {
        let mut bytes = [0u8; BC1_BLOCK_SIZE];
        bytes.copy_from_slice(block);
        Self::decode_block(&bytes)
    }

    fn encode(pixels: &[[u8; 4]; 16], out: &mut [u8]) {
        out.copy_from_slice(&Self::encode_block(pixels));
    }
}
