//! BC3/DXT5 block compression.
//!
//! BC3 compresses 4×4 blocks of RGBA pixels to 16 bytes:
//! - 8 bytes: Alpha channel
//!   - 1 byte: alpha0
//!   - 1 byte: alpha1
//!   - 6 bytes: 16 3-bit indices (one per pixel)
//! - 8 bytes: RGB, laid out like BC1 but always decoded in 4-color mode

use crate::block::color::{
    alpha_palette, channel_sum_endpoints, color_palette, nearest_alpha_index,
    nearest_color_index,
};
use crate::block::BlockFormat;

/// Bytes per compressed BC3 block.
pub const BC3_BLOCK_SIZE: usize = 16;

/// BC3 block codec.
pub struct Bc3;

impl Bc3 {
    /// Decompress a 16-byte block to 16 RGBA pixels in raster order.
    pub fn decode_block(block: &[u8; 16]) -> [[u8; 4]; 16] {
        let alphas = alpha_palette(block[0], block[1]);
        let alpha_bits = Self::read_alpha_bits(block);

        let c0 = u16::from_le_bytes([block[8], block[9]]);
        let c1 = u16::from_le_bytes([block[10], block[11]]);
        let color_bits = u32::from_le_bytes([block[12], block[13], block[14], block[15]]);
        let colors = color_palette(c0, c1, false);

        let mut pixels = [[0u8; 4]; 16];
        for (i, pixel) in pixels.iter_mut().enumerate() {
            let color = colors[((color_bits >> (i * 2)) & 0x3) as usize];
            let alpha = alphas[((alpha_bits >> (i * 3)) & 0x7) as usize];
            *pixel = [color[0], color[1], color[2], alpha];
        }
        pixels
    }

    /// Compress 16 RGBA pixels to a 16-byte block.
    ///
    /// Alpha endpoints are the block's minimum (alpha0) and maximum (alpha1)
    /// alpha. Color endpoints are the pixels with the smallest (color0) and
    /// largest (color1) channel sum.
    pub fn encode_block(pixels: &[[u8; 4]; 16]) -> [u8; 16] {
        let mut output = [0u8; 16];
        output[0..8].copy_from_slice(&Self::encode_alpha(pixels));
        output[8..16].copy_from_slice(&Self::encode_color(pixels));
        output
    }

    fn read_alpha_bits(block: &[u8; 16]) -> u64 {
        let mut bytes = [0u8; 8];
        bytes[..6].copy_from_slice(&block[2..8]);
        u64::from_le_bytes(bytes)
    }

    fn encode_alpha(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let mut alpha0 = u8::MAX;
        let mut alpha1 = u8::MIN;
        for pixel in pixels {
            alpha0 = alpha0.min(pixel[3]);
            alpha1 = alpha1.max(pixel[3]);
        }

        let palette = alpha_palette(alpha0, alpha1);

        let mut indices = 0u64;
        for (i, pixel) in pixels.iter().enumerate() {
            let index = nearest_alpha_index(pixel[3], &palette);
            indices |= (index as u64) << (i * 3);
        }

        let mut output = [0u8; 8];
        output[0] = alpha0;
        output[1] = alpha1;
        output[2..8].copy_from_slice(&indices.to_le_bytes()[..6]);
        output
    }

    fn encode_color(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let (c0, c1) = channel_sum_endpoints(pixels.iter());
        let palette = color_palette(c0, c1, false);

        let mut indices = 0u32;
        for (i, pixel) in pixels.iter().enumerate() {
            let index = nearest_color_index(pixel, &palette);
            indices |= (index as u32) << (i * 2);
        }

        let mut output = [0u8; 8];
        output[0..2].copy_from_slice(&c0.to_le_bytes());
        output[2..4].copy_from_slice(&c1.to_le_bytes());
        output[4..8].copy_from_slice(&indices.to_le_bytes());
        output
    }
}

impl BlockFormat for Bc3 {
    const BLOCK_SIZE: usize = BC3_BLOCK_SIZE;

    fn decode(block: &[u8]) -> [[u8; 4]; 16] {
        let mut bytes = [0u8; BC3_BLOCK_SIZE];
        bytes.copy_from_slice(block);
        Self::decode_block(&bytes)
    }

    fn encode(pixels: &[[u8; 4]; 16], out: &mut [u8]) {
        out.copy_from_slice(&Self::encode_block(pixels));
    }
}

#[cfg(test)]
#[allow(clippy::needless_range_loop)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_eight_step_alpha() {
        // alpha0=255 > alpha1=0; pixel i gets alpha index i % 8
        let mut bits = 0u64;
        for i in 0..16u64 {
            bits |= (i % 8) << (i * 3);
        }
        let mut block = [0u8; 16];
        block[0] = 255;
        block[1] = 0;
        block[2..8].copy_from_slice(&bits.to_le_bytes()[..6]);

        let pixels = Bc3::decode_block(&block);
        let expected = [255, 0, 218, 182, 145, 109, 72, 36];
        for i in 0..16 {
            assert_eq!(pixels[i][3], expected[i % 8], "pixel {}", i);
        }
    }

    #[test]
    fn test_decode_six_step_alpha_sentinels() {
        let mut block = [0u8; 16];
        block[0] = 40;
        block[1] = 90;
        // pixel 0 -> index 6 (0), pixel 1 -> index 7 (255), pixel 2 -> index 2
        let bits: u64 = 6 | (7 << 3) | (2 << 6);
        block[2..8].copy_from_slice(&bits.to_le_bytes()[..6]);

        let pixels = Bc3::decode_block(&block);
        assert_eq!(pixels[0][3], 0);
        assert_eq!(pixels[1][3], 255);
        assert_eq!(pixels[2][3], 50);
        assert_eq!(pixels[3][3], 40);
    }

    #[test]
    fn test_decode_color_ignores_endpoint_order() {
        // c0=black < c1=white would be 3-color mode in BC1, but not here
        let mut block = [0u8; 16];
        block[0] = 255;
        block[1] = 255;
        block[10] = 0xFF;
        block[11] = 0xFF;
        block[12] = 0b1110_0100;

        let pixels = Bc3::decode_block(&block);
        assert_eq!(pixels[0], [0, 0, 0, 255]);
        assert_eq!(pixels[1], [248, 252, 248, 255]);
        assert_eq!(pixels[2], [82, 84, 82, 255]);
        assert_eq!(pixels[3], [165, 168, 165, 255]);
    }

    #[test]
    fn test_encode_solid_opaque() {
        let pixels = [[128u8, 64, 192, 255]; 16];
        let compressed = Bc3::encode_block(&pixels);

        assert_eq!(compressed[0], 255);
        assert_eq!(compressed[1], 255);

        let decoded = Bc3::decode_block(&compressed);
        for pixel in decoded {
            assert_eq!(pixel, [128, 64, 192, 255]);
        }
    }

    #[test]
    fn test_encode_alpha_endpoints_min_then_max() {
        let mut pixels = [[0u8, 0, 0, 128]; 16];
        pixels[0][3] = 50;
        pixels[15][3] = 200;

        let compressed = Bc3::encode_block(&pixels);
        assert_eq!(compressed[0], 50);
        assert_eq!(compressed[1], 200);
    }

    #[test]
    fn test_encode_two_alpha_values_exact() {
        let mut pixels = [[0u8, 0, 0, 0]; 16];
        for i in 8..16 {
            pixels[i][3] = 255;
        }

        let decoded = Bc3::decode_block(&Bc3::encode_block(&pixels));
        for i in 0..8 {
            assert_eq!(decoded[i][3], 0);
        }
        for i in 8..16 {
            assert_eq!(decoded[i][3], 255);
        }
    }

    #[test]
    fn test_encode_color_endpoints_by_channel_sum() {
        let mut pixels = [[100u8, 100, 100, 255]; 16];
        pixels[3] = [0, 0, 0, 255];
        pixels[9] = [255, 255, 255, 255];

        let compressed = Bc3::encode_block(&pixels);
        assert_eq!(u16::from_le_bytes([compressed[8], compressed[9]]), 0x0000);
        assert_eq!(u16::from_le_bytes([compressed[10], compressed[11]]), 0xFFFF);

        let decoded = Bc3::decode_block(&compressed);
        assert_eq!(decoded[3], [0, 0, 0, 255]);
        assert_eq!(decoded[9], [248, 252, 248, 255]);
        // Gray lands on the 1/3 interpolant (82, 84, 82)
        assert_eq!(decoded[0], [82, 84, 82, 255]);
    }

    #[test]
    fn test_alpha_round_trip_error_bound() {
        let mut pixels = [[0u8, 0, 0, 0]; 16];
        for i in 0..16 {
            pixels[i][3] = (i * 17) as u8;
        }

        let decoded = Bc3::decode_block(&Bc3::encode_block(&pixels));
        for i in 0..16 {
            let diff = (pixels[i][3] as i32 - decoded[i][3] as i32).abs();
            // Six-step palette over 0..=255 spans 51 per step
            assert!(diff <= 26, "pixel {} alpha diff {}", i, diff);
        }
    }

    #[test]
    fn test_unused_alpha_index_bits_are_zero() {
        let pixels = [[1u8, 2, 3, 200]; 16];
        let compressed = Bc3::encode_block(&pixels);
        assert_eq!(&compressed[2..8], &[0, 0, 0, 0, 0, 0]);
    }
}
