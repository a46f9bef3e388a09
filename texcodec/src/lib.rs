//! TexCodec - reader, writer and block codec for TEX game textures
//!
//! A TEX file is a small fixed header followed by DXT1, DXT5 or BGRA8 texel
//! data, optionally with a full mip chain stored smallest level first. This
//! crate parses and writes the container bit-exactly and converts its
//! contents to and from RGBA8 pixels.
//!
//! ```
//! use texcodec::TextureFormat;
//!
//! let pixels = vec![255u8; 4 * 4 * 4];
//! let bytes = texcodec::encode(4, 4, &pixels, TextureFormat::Dxt5).unwrap();
//! let decoded = texcodec::decode(&bytes).unwrap();
//! assert_eq!((decoded.width, decoded.height), (4, 4));
//! ```

pub mod block;
pub mod config;
pub mod dds;
pub mod error;
pub mod logging;
pub mod stream;
pub mod tex;

pub use error::{TexError, TexResult};
pub use tex::{decode, encode, DecodedImage, TexCodec, TextureFormat, TextureImage};
