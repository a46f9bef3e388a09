//! TEX container constants and texture format codes.

use std::fmt;

/// Container magic, `"TEX\0"` read as a little-endian u32.
pub const TEX_SIGNATURE: u32 = 0x0058_4554;

/// Fixed header length in bytes.
pub const HEADER_SIZE: usize = 12;

/// Reserved byte at offset 8, always written as 1.
pub const HEADER_RESERVED_A: u8 = 1;

/// Reserved byte at offset 10, always written as 0.
pub const HEADER_RESERVED_B: u8 = 0;

/// Texel storage format of a TEX file.
///
/// ETC formats are recognized on read so their metadata survives a round
/// trip, but they have no codec. Codes outside the known set are kept as
/// [`TextureFormat::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    Etc1,
    Etc2Eac,
    Etc2,
    /// BC1: 8 bytes per 4×4 block, 1-bit alpha
    Dxt1,
    /// BC3: 16 bytes per 4×4 block, interpolated alpha
    Dxt5,
    /// Uncompressed, 4 bytes per pixel in B, G, R, A order
    Bgra8,
    Unknown(u8),
}

/// Block geometry used by the mip sizing arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Block edge in pixels.
    pub edge: u32,
    /// Bytes per block.
    pub bytes: usize,
}

impl TextureFormat {
    /// Map a header format code to a format.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Etc1,
            2 => Self::Etc2Eac,
            3 => Self::Etc2,
            10 => Self::Dxt1,
            12 => Self::Dxt5,
            20 => Self::Bgra8,
            other => Self::Unknown(other),
        }
    }

    /// The header format code.
    pub fn code(self) -> u8 {
        match self {
            Self::Etc1 => 1,
            Self::Etc2Eac => 2,
            Self::Etc2 => 3,
            Self::Dxt1 => 10,
            Self::Dxt5 => 12,
            Self::Bgra8 => 20,
            Self::Unknown(code) => code,
        }
    }

    /// Block geometry, or `None` for formats without a codec.
    pub fn block_layout(self) -> Option<BlockLayout> {
        match self {
            Self::Dxt1 => Some(BlockLayout { edge: 4, bytes: 8 }),
            Self::Dxt5 => Some(BlockLayout { edge: 4, bytes: 16 }),
            Self::Bgra8 => Some(BlockLayout { edge: 1, bytes: 4 }),
            _ => None,
        }
    }

    /// Whether this format can be decoded and encoded.
    pub fn is_supported(self) -> bool {
        self.block_layout().is_some()
    }

    /// Whether this format stores 4×4 compressed blocks.
    pub fn is_block_compressed(self) -> bool {
        matches!(self, Self::Dxt1 | Self::Dxt5)
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Etc1 => write!(f, "ETC1"),
            Self::Etc2Eac => write!(f, "ETC2_EAC"),
            Self::Etc2 => write!(f, "ETC2"),
            Self::Dxt1 => write!(f, "DXT1"),
            Self::Dxt5 => write!(f, "DXT5"),
            Self::Bgra8 => write!(f, "BGRA8"),
            Self::Unknown(code) => write!(f, "unknown ({})", code),
        }
    }
}
