//! The TEX texture container.
//!
//! A TEX file is a 12-byte little-endian header followed by level data:
//!
//! ```text
//! offset  field
//! 0       magic        u32  "TEX\0"
//! 4       width        u16
//! 6       height       u16
//! 8       reserved     u8   (1)
//! 9       format       u8
//! 10      reserved     u8   (0)
//! 11      has_mipmaps  u8
//! 12..    levels, smallest mip first
//! ```
//!
//! [`TextureImage`] parses and serializes the container, [`mipmap`] computes
//! the chain layout, and [`TexCodec`] converts between containers and RGBA8.

mod codec;
mod container;
mod format;
mod generate;
pub mod mipmap;

pub use codec::{decode, encode, DecodedImage, TexCodec};
pub use container::TextureImage;
pub use format::{BlockLayout, TextureFormat, HEADER_SIZE, TEX_SIGNATURE};
pub use generate::MipmapGenerator;
pub use mipmap::{level_sizes, mip_chain, mip_count, MipLevel};
