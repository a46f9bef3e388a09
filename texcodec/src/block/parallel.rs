//! Rayon-parallel [`BlockCodec`].
//!
//! Work is split by block row: each row of 4-pixel-tall blocks maps to a
//! disjoint slice of both the compressed data and the RGBA8 buffer, so rows
//! can be processed independently with no synchronization.

use rayon::prelude::*;

use crate::block::surface::{
    blocks_for, check_compressed_data, check_dimensions, check_pixel_buffer, extract_block,
    store_block,
};
use crate::block::{Bc1, Bc3, BlockCodec, BlockFormat};
use crate::error::TexResult;

/// Block codec that spreads block rows over the rayon thread pool.
///
/// Output is byte-identical to [`ReferenceCodec`](crate::block::ReferenceCodec).
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelCodec;

fn decode_rows<F: BlockFormat>(data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
    check_dimensions(width, height)?;
    let across = blocks_for(width);
    let down = blocks_for(height);
    check_compressed_data(data, across * down * F::BLOCK_SIZE)?;

    let w = width as usize;
    let pixel_row_bytes = w * 4;
    let block_row_bytes = across * F::BLOCK_SIZE;
    let mut out = vec![0u8; w * height as usize * 4];

    // Each chunk is up to four pixel rows; the last one may be shorter.
    out.par_chunks_mut(pixel_row_bytes * 4)
        .enumerate()
        .for_each(|(block_y, rows)| {
            let rows_here = rows.len() / pixel_row_bytes;
            let row_data = &data[block_y * block_row_bytes..(block_y + 1) * block_row_bytes];
            for (block_x, block) in row_data.chunks_exact(F::BLOCK_SIZE).enumerate() {
                let decoded = F::decode(block);
                store_block(rows, w, rows_here, block_x, 0, &decoded);
            }
        });

    Ok(out)
}

fn encode_rows<F: BlockFormat>(pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
    check_dimensions(width, height)?;
    check_pixel_buffer(pixels, width, height)?;
    let across = blocks_for(width);
    let down = blocks_for(height);

    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; across * down * F::BLOCK_SIZE];

    out.par_chunks_mut(across * F::BLOCK_SIZE)
        .enumerate()
        .for_each(|(block_y, row)| {
            for (block_x, chunk) in row.chunks_exact_mut(F::BLOCK_SIZE).enumerate() {
                let block = extract_block(pixels, w, h, block_x, block_y);
                F::encode(&block, chunk);
            }
        });

    Ok(out)
}

impl BlockCodec for ParallelCodec {
    fn name(&self) -> &str {
        "parallel"
    }

    fn decode_dxt1(&self, data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        decode_rows::<Bc1>(data, width, height)
    }

    fn decode_dxt5(&self, data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        decode_rows::<Bc3>(data, width, height)
    }

    fn encode_dxt1(&self, pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        encode_rows::<Bc1>(pixels, width, height)
    }

    fn encode_dxt5(&self, pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>> {
        encode_rows::<Bc3>(pixels, width, height)
    }
}
