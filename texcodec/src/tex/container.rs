//! The TEX container: header fields plus ordered level buffers.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{TexError, TexResult};
use crate::stream::{ByteReader, ByteWriter};
use crate::tex::format::{
    TextureFormat, HEADER_RESERVED_A, HEADER_RESERVED_B, HEADER_SIZE, TEX_SIGNATURE,
};
use crate::tex::mipmap::{level_dimensions, mip_chain, mip_count};

/// A parsed or assembled TEX texture.
///
/// `levels` holds opaque byte buffers ordered smallest mip first, full
/// resolution last. Without mipmaps there is exactly one buffer.
///
/// Instances are immutable; build a new one to change anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    width: u16,
    height: u16,
    format: TextureFormat,
    has_mipmaps: bool,
    levels: Vec<Vec<u8>>,
}

fn check_dimensions(width: u16, height: u16) -> TexResult<()> {
    if width == 0 || height == 0 {
        return Err(TexError::InvalidDimensions {
            width: width as u32,
            height: height as u32,
            reason: "width and height must be at least 1".to_string(),
        });
    }
    Ok(())
}

impl TextureImage {
    /// Build a texture with a single level and no mipmaps.
    ///
    /// `data` is stored as-is. Its length is not checked against the
    /// format, since converted files may carry extra trailing data.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is zero
    /// - `NoTextureData` if `data` is empty
    pub fn new(width: u16, height: u16, format: TextureFormat, data: Vec<u8>) -> TexResult<Self> {
        check_dimensions(width, height)?;
        if data.is_empty() {
            return Err(TexError::NoTextureData);
        }
        Ok(Self {
            width,
            height,
            format,
            has_mipmaps: false,
            levels: vec![data],
        })
    }

    /// Build a texture with a full mip chain, smallest level first.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is zero
    /// - `UnsupportedFormat` if the format has no mip chain layout
    /// - `InvalidMipChain` if the level count or any level length is wrong
    pub fn with_mipmaps(
        width: u16,
        height: u16,
        format: TextureFormat,
        levels: Vec<Vec<u8>>,
    ) -> TexResult<Self> {
        check_dimensions(width, height)?;
        let chain = mip_chain(width as u32, height as u32, format)
            .ok_or(TexError::UnsupportedFormat(format))?;

        if levels.len() != chain.len() {
            return Err(TexError::InvalidMipChain(format!(
                "{}×{} needs {} levels, got {}",
                width,
                height,
                chain.len(),
                levels.len()
            )));
        }

        for (level, data) in chain.iter().zip(&levels) {
            if data.len() != level.size {
                return Err(TexError::InvalidMipChain(format!(
                    "level {} ({}×{}) is {} bytes, expected {}",
                    level.index,
                    level.width,
                    level.height,
                    data.len(),
                    level.size
                )));
            }
        }

        Ok(Self {
            width,
            height,
            format,
            has_mipmaps: true,
            levels,
        })
    }

    /// Parse a complete container from memory.
    ///
    /// # Errors
    ///
    /// - `UnexpectedEndOfData` if the header is incomplete
    /// - `InvalidSignature` if the magic is not `TEX\0`
    /// - `InvalidDimensions` if either dimension is zero
    /// - `TruncatedMipLevel` if a mip level is shorter than its computed size
    /// - `NoTextureData` if a single-level file has no payload
    pub fn parse(bytes: &[u8]) -> TexResult<Self> {
        let mut reader = ByteReader::new(bytes);

        let signature = reader.read_u32()?;
        if signature != TEX_SIGNATURE {
            return Err(TexError::InvalidSignature(signature));
        }

        let width = reader.read_u16()?;
        let height = reader.read_u16()?;
        let _reserved = reader.read_u8()?;
        let format = TextureFormat::from_code(reader.read_u8()?);
        let _reserved = reader.read_u8()?;
        let has_mipmaps = reader.read_bool()?;
        check_dimensions(width, height)?;

        debug!(
            width,
            height,
            format = %format,
            has_mipmaps,
            payload = reader.remaining(),
            "Parsed TEX header"
        );

        let chain = if has_mipmaps {
            mip_chain(width as u32, height as u32, format)
        } else {
            None
        };

        let levels = match chain {
            Some(chain) => {
                let mut levels = Vec::with_capacity(chain.len());
                for level in &chain {
                    let data = reader.read_bytes(level.size).map_err(|_| {
                        TexError::TruncatedMipLevel {
                            level: level.index as usize,
                            expected: level.size,
                            actual: reader.remaining(),
                        }
                    })?;
                    levels.push(data.to_vec());
                }
                if reader.remaining() > 0 {
                    warn!(
                        trailing = reader.remaining(),
                        "Ignoring bytes after the last mip level"
                    );
                }
                levels
            }
            None => {
                let data = reader.read_to_end();
                if data.is_empty() {
                    return Err(TexError::NoTextureData);
                }
                vec![data.to_vec()]
            }
        };

        Ok(Self {
            width,
            height,
            format,
            has_mipmaps,
            levels,
        })
    }

    /// Read and parse a container from any reader.
    pub fn read_from<R: Read>(mut reader: R) -> TexResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(&bytes)
    }

    /// Read and parse a container file.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> TexResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::read_from(file)
    }

    /// Serialize the header and every level, in stored order.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, writer: W) -> TexResult<usize> {
        let mut out = ByteWriter::new(writer);

        out.write_u32(TEX_SIGNATURE)?;
        out.write_u16(self.width)?;
        out.write_u16(self.height)?;
        out.write_u8(HEADER_RESERVED_A)?;
        out.write_u8(self.format.code())?;
        out.write_u8(HEADER_RESERVED_B)?;
        out.write_bool(self.has_mipmaps)?;

        for level in &self.levels {
            out.write_bytes(level)?;
        }

        let written = out.written();
        out.into_inner()?;
        Ok(written)
    }

    /// Serialize to a new buffer.
    pub fn to_bytes(&self) -> TexResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.payload_size());
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Serialize to a file, replacing it if it exists.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> TexResult<usize> {
        let file = File::create(path.as_ref())?;
        self.write_to(BufWriter::new(file))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn has_mipmaps(&self) -> bool {
        self.has_mipmaps
    }

    /// Level buffers, smallest first.
    pub fn levels(&self) -> &[Vec<u8>] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The full-resolution level (the last one stored).
    pub fn base_level(&self) -> &[u8] {
        self.levels.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pixel dimensions of each stored level, smallest first.
    pub fn level_dimensions(&self) -> Vec<(u32, u32)> {
        let (width, height) = (self.width as u32, self.height as u32);
        if !self.has_mipmaps || self.levels.len() == 1 {
            return vec![(width, height)];
        }
        (0..mip_count(width, height))
            .rev()
            .map(|index| level_dimensions(width, height, index))
            .collect()
    }

    /// Total bytes of level data.
    pub fn payload_size(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Total bytes when serialized.
    pub fn file_size(&self) -> usize {
        HEADER_SIZE + self.payload_size()
    }
}
