//! Error types for TEX parsing, serialization and block compression.

use thiserror::Error;

use crate::tex::TextureFormat;

/// Result type for codec operations.
pub type TexResult<T> = Result<T, TexError>;

/// Errors that can occur while reading, writing, decoding or encoding textures.
///
/// Every variant is fatal for the call that produced it. A failed decode
/// returns no pixels and a failed encode returns no bytes.
#[derive(Debug, Error)]
pub enum TexError {
    /// The first four bytes are not `TEX\0`.
    #[error("Invalid .tex signature: {0:#010x}")]
    InvalidSignature(u32),

    /// A read needed more bytes than the stream has left.
    #[error("Unexpected end of data: needed {needed} bytes, {available} available")]
    UnexpectedEndOfData { needed: usize, available: usize },

    /// A mip level in the chain is shorter than its computed size.
    #[error("Unexpected end of file while reading mipmap {level}: expected {expected} bytes, got {actual}")]
    TruncatedMipLevel {
        level: usize,
        expected: usize,
        actual: usize,
    },

    /// The header is valid but no payload follows it.
    #[error("No texture data found in file")]
    NoTextureData,

    /// The format is recognized (or unknown) but has no codec.
    #[error("Unsupported texture format: {0}")]
    UnsupportedFormat(TextureFormat),

    /// Width or height is out of range.
    #[error("Invalid dimensions {width}×{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Level buffers do not match the mip chain layout.
    #[error("Invalid mipmap chain: {0}")]
    InvalidMipChain(String),

    /// An RGBA8 pixel buffer has the wrong length for its dimensions.
    #[error("Pixel buffer is {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    /// A DDS file could not be converted.
    #[error("Invalid DDS file: {0}")]
    InvalidDds(String),

    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
