//! Sequential reference implementation of [`BlockCodec`].

use crate::block::surface::{
    blocks_for, check_compressed_data, check_dimensions, check_pixel_buffer, extract_block,
    store_block,
};
use crate::block::{Bc1, Bc3, BlockCodec, BlockFormat};
use crate::error::TexResult;

/// Reference block codec.
///
/// Walks blocks left to right, top to bottom on the calling thread. Other
/// codecs are validated against its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceCodec;

/// Decode a whole surface one block at a time.
pub(crate) fn decode_surface<F: BlockFormat>(
    data: &[u8],
    width: u32,
    height: u32,
) -> TexResult<Vec<u8>> {
    check_dimensions(width, height)?;
    let across = blocks_for(width);
    let down = blocks_for(height);
    check_compressed_data(data, across * down * F::BLOCK_SIZE)?;

    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; w * h * 4];

    for (i, block) in data
        .chunks_exact(F::BLOCK_SIZE)
        .take(across * down)
        .enumerate()
    {
        let decoded = F::decode(block);
        store_block(&mut out, w, h, i % across, i / across, &decoded);
    }

    Ok(out)
}

/// Encode a whole surface one block at a time.
pub(crate) fn encode_surface<F: BlockFormat>(
    pixels: &[u8],
    width: u32,
    height: u32,
) -> TexResult<Vec<u8>> {
    check_dimensions(width, height)?;
    check_pixel_buffer(pixels, width, height)?;
    let across = blocks_for(width);
    let down = blocks_for(height);

    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; across * down * F::BLOCK_SIZE];

    for (i, chunk) in out.chunks_exact_mut(F::BLOCK_SIZE).enumerate() {
        let block = extract_block(pixels, w, h, i % across, i / across);
        F::encode(&block, chunk);
    }

    Ok(out)
}

impl BlockCodec for ReferenceCodec {
    fn name(&self) -> &str {
        "reference"
    }

    fn decode_dxt1(&self, data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        decode_surface::<Bc1>(data, width, height)
    }

    fn decode_dxt5(&self, data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        decode_surface::<Bc3>(data, width, height)
    }

    fn encode_dxt1(&self, pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        encode_surface::<Bc1>(pixels, width, height)
    }

    fn encode_dxt5(&self, pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        encode_surface::<Bc3>(pixels, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TexError;

    #[test]
    fn test_decode_dxt1_single_block() {
        let block = [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let pixels = ReferenceCodec.decode_dxt1(&block, 4, 4).unwrap();
        assert_eq!(pixels, vec![0u8; 64]);
    }

    #[test]
    fn test_decode_places_blocks_in_raster_order() {
        // Two DXT1 blocks side by side: solid red then solid blue
        let red = 0xF800u16.to_le_bytes();
        let blue = 0x001Fu16.to_le_bytes();
        let mut data = Vec::new();
        data.extend_from_slice(&[red[0], red[1], red[0], red[1], 0, 0, 0, 0]);
        data.extend_from_slice(&[blue[0], blue[1], blue[0], blue[1], 0, 0, 0, 0]);

        let pixels = ReferenceCodec.decode_dxt1(&data, 8, 4).unwrap();
        assert_eq!(&pixels[0..4], &[248, 0, 0, 255]);
        assert_eq!(&pixels[3 * 4..4 * 4], &[248, 0, 0, 255]);
        assert_eq!(&pixels[4 * 4..5 * 4], &[0, 0, 248, 255]);
        // Last pixel of the last row
        assert_eq!(&pixels[pixels.len() - 4..], &[0, 0, 248, 255]);
    }

    #[test]
    fn test_decode_partial_surface_clips_edges() {
        let block = [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
        let pixels = ReferenceCodec.decode_dxt1(&block, 3, 2).unwrap();
        assert_eq!(pixels.len(), 3 * 2 * 4);
        assert!(pixels.chunks(4).all(|p| p == [248, 252, 248, 255]));
    }

    #[test]
    fn test_decode_short_data_fails() {
        let result = ReferenceCodec.decode_dxt5(&[0u8; 16], 8, 8);
        assert!(matches!(
            result,
            Err(TexError::UnexpectedEndOfData {
                needed: 64,
                available: 16
            })
        ));
    }

    #[test]
    fn test_encode_size() {
        let pixels = vec![0u8; 16 * 8 * 4];
        assert_eq!(ReferenceCodec.encode_dxt1(&pixels, 16, 8).unwrap().len(), 64);
        assert_eq!(ReferenceCodec.encode_dxt5(&pixels, 16, 8).unwrap().len(), 128);
    }

    #[test]
    fn test_encode_misaligned_surface_pads() {
        // 5×5 needs 2×2 blocks
        let pixels = vec![255u8; 5 * 5 * 4];
        let data = ReferenceCodec.encode_dxt5(&pixels, 5, 5).unwrap();
        assert_eq!(data.len(), 4 * 16);

        let decoded = ReferenceCodec.decode_dxt5(&data, 5, 5).unwrap();
        assert_eq!(decoded.len(), pixels.len());
    }

    #[test]
    fn test_encode_wrong_buffer_size() {
        let result = ReferenceCodec.encode_dxt5(&[0u8; 10], 4, 4);
        assert!(matches!(result, Err(TexError::PixelBufferSize { .. })));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            ReferenceCodec.decode_dxt1(&[], 0, 4),
            Err(TexError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ReferenceCodec.encode_dxt1(&[], 4, 0),
            Err(TexError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_name() {
        assert_eq!(ReferenceCodec.name(), "reference");
    }
}
