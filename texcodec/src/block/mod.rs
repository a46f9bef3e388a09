//! Block compression for TEX textures.
//!
//! The per-block algorithms live in [`Bc1`] (DXT1) and [`Bc3`] (DXT5).
//! Whole surfaces are processed through the [`BlockCodec`] trait so that a
//! faster implementation can be swapped in without touching the container
//! code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │      TexCodec       │
//! │                     │
//! │ Arc<dyn BlockCodec> │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │     BlockCodec      │ (trait)
//! └──────────┬──────────┘
//!            │
//!       ┌────┴──────┐
//!       ▼           ▼
//! ┌───────────┐ ┌───────────┐
//! │ Reference │ │ Parallel  │
//! │   Codec   │ │   Codec   │
//! └───────────┘ └───────────┘
//! ```
//!
//! Any [`BlockCodec`] must produce output byte-identical to
//! [`ReferenceCodec`].
//!
//! # Example
//!
//! ```
//! use texcodec::block::{BlockCodec, ParallelCodec, ReferenceCodec};
//!
//! let pixels = vec![200u8; 8 * 8 * 4];
//! let reference = ReferenceCodec.encode_dxt5(&pixels, 8, 8).unwrap();
//! let parallel = ParallelCodec.encode_dxt5(&pixels, 8, 8).unwrap();
//! assert_eq!(reference, parallel);
//! assert_eq!(reference.len(), 4 * 16);
//! ```

mod bc1;
mod bc3;
pub mod bgra;
pub mod color;
mod parallel;
mod reference;
pub mod surface;

pub use bc1::{Bc1, BC1_BLOCK_SIZE};
pub use bc3::{Bc3, BC3_BLOCK_SIZE};
pub use parallel::ParallelCodec;
pub use reference::ReferenceCodec;

use crate::error::TexResult;

/// A fixed-size 4×4 block encoding.
pub trait BlockFormat {
    /// Compressed bytes per 4×4 block.
    const BLOCK_SIZE: usize;

    /// Decode one block. `block` is exactly `BLOCK_SIZE` bytes.
    fn decode(block: &[u8]) -> [[u8; 4]; 16];

    /// Encode one block into `out`, which is exactly `BLOCK_SIZE` bytes.
    fn encode(pixels: &[[u8; 4]; 16], out: &mut [u8]);
}

/// Whole-surface DXT compression strategy.
///
/// Decoders take compressed block data for a `width × height` surface and
/// return `width * height * 4` bytes of RGBA8. Encoders take exactly that many
/// RGBA8 bytes and return the block data. Implementations must be thread-safe
/// (`Send + Sync`) and stateless between calls.
///
/// # Implementors
///
/// - [`ReferenceCodec`] - Sequential block loop, the reference output
/// - [`ParallelCodec`] - Rayon-parallel over block rows
pub trait BlockCodec: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Decode DXT1 block data to RGBA8.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is zero
    /// - `UnexpectedEndOfData` if `data` is shorter than the surface needs
    fn decode_dxt1(&self, data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>>;

    /// Decode DXT5 block data to RGBA8.
    fn decode_dxt5(&self, data: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>>;

    /// Encode RGBA8 pixels to DXT1 block data.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is zero
    /// - `PixelBufferSize` if `pixels` is not `width * height * 4` bytes
    fn encode_dxt1(&self, pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>>;

    /// Encode RGBA8 pixels to DXT5 block data.
    fn encode_dxt5(&self, pixels: &[u8], width: u32, height: u32) -> TexResult<Vec<u8>>;
}
