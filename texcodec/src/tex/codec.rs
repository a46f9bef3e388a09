//! Image-level decode and encode.
//!
//! [`TexCodec`] converts between [`TextureImage`] containers and flat RGBA8
//! pixel buffers. Block work is delegated to the injected [`BlockCodec`].

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;
use tracing::{debug, info};

use crate::block::bgra::{bgra_to_rgba, rgba_to_bgra};
use crate::block::surface::{check_compressed_data, check_pixel_buffer};
use crate::block::{BlockCodec, ReferenceCodec};
use crate::config::EncodeConfig;
use crate::error::{TexError, TexResult};
use crate::tex::container::TextureImage;
use crate::tex::format::TextureFormat;
use crate::tex::generate::MipmapGenerator;

/// RGBA8 pixels produced by decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major, top to bottom.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Convert into an `image` buffer for PNG export.
    pub fn into_rgba_image(self) -> TexResult<RgbaImage> {
        let expected = self.width as usize * self.height as usize * 4;
        let actual = self.pixels.len();
        RgbaImage::from_raw(self.width, self.height, self.pixels)
            .ok_or(TexError::PixelBufferSize { expected, actual })
    }
}

/// Texture codec with a pluggable block compression strategy.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use texcodec::block::ParallelCodec;
/// use texcodec::tex::{TexCodec, TextureFormat};
///
/// let codec = TexCodec::with_strategy(Arc::new(ParallelCodec));
/// let pixels = vec![128u8; 8 * 8 * 4];
///
/// let bytes = codec.encode(8, 8, &pixels, TextureFormat::Bgra8).unwrap();
/// let decoded = codec.decode(&bytes).unwrap();
/// assert_eq!(decoded.pixels, pixels);
/// ```
#[derive(Clone)]
pub struct TexCodec {
    strategy: Arc<dyn BlockCodec>,
}

impl TexCodec {
    /// Codec backed by the sequential [`ReferenceCodec`].
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(ReferenceCodec))
    }

    /// Codec backed by any block codec.
    pub fn with_strategy(strategy: Arc<dyn BlockCodec>) -> Self {
        Self { strategy }
    }

    /// Name of the active block codec.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Parse container bytes and decode the full-resolution level.
    pub fn decode(&self, bytes: &[u8]) -> TexResult<DecodedImage> {
        let texture = TextureImage::parse(bytes)?;
        self.decode_image(&texture)
    }

    /// Decode the full-resolution level of a texture to RGBA8.
    ///
    /// The last stored level is decoded. Data beyond what the surface needs
    /// is ignored.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` for ETC and unknown formats
    /// - `UnexpectedEndOfData` if the level is too short for the dimensions
    pub fn decode_image(&self, texture: &TextureImage) -> TexResult<DecodedImage> {
        let width = texture.width() as u32;
        let height = texture.height() as u32;
        let data = texture.base_level();

        let pixels = match texture.format() {
            TextureFormat::Dxt1 => self.strategy.decode_dxt1(data, width, height)?,
            TextureFormat::Dxt5 => self.strategy.decode_dxt5(data, width, height)?,
            TextureFormat::Bgra8 => {
                let needed = width as usize * height as usize * 4;
                check_compressed_data(data, needed)?;
                bgra_to_rgba(&data[..needed])
            }
            other => return Err(TexError::UnsupportedFormat(other)),
        };

        info!(
            width,
            height,
            format = %texture.format(),
            levels = texture.level_count(),
            codec = self.strategy.name(),
            "Decoded texture"
        );

        Ok(DecodedImage {
            width,
            height,
            pixels,
        })
    }

    /// Encode RGBA8 pixels to container bytes without mipmaps.
    pub fn encode(
        &self,
        width: u32,
        height: u32,
        pixels: &[u8],
        format: TextureFormat,
    ) -> TexResult<Vec<u8>> {
        self.encode_texture(width, height, pixels, &EncodeConfig::new(format))?
            .to_bytes()
    }

    /// Encode RGBA8 pixels to a texture.
    ///
    /// Dimensions that are not multiples of 4 are accepted; edge blocks are
    /// padded with transparent black.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` if the target format has no encoder
    /// - `InvalidDimensions` if a dimension is zero or exceeds `u16::MAX`
    /// - `PixelBufferSize` if `pixels` is not `width * height * 4` bytes
    pub fn encode_texture(
        &self,
        width: u32,
        height: u32,
        pixels: &[u8],
        config: &EncodeConfig,
    ) -> TexResult<TextureImage> {
        let format = config.format();
        if !format.is_supported() {
            return Err(TexError::UnsupportedFormat(format));
        }
        let (tex_width, tex_height) = container_dimensions(width, height)?;
        check_pixel_buffer(pixels, width, height)?;

        let texture = if config.generate_mipmaps() {
            let source = RgbaImage::from_raw(width, height, pixels.to_vec()).ok_or(
                TexError::PixelBufferSize {
                    expected: width as usize * height as usize * 4,
                    actual: pixels.len(),
                },
            )?;
            let levels = self.compress_chain(&source, format)?;
            TextureImage::with_mipmaps(tex_width, tex_height, format, levels)?
        } else {
            let data = self.compress_surface(pixels, width, height, format)?;
            TextureImage::new(tex_width, tex_height, format, data)?
        };

        info!(
            width,
            height,
            format = %format,
            levels = texture.level_count(),
            bytes = texture.file_size(),
            codec = self.strategy.name(),
            "Encoded texture"
        );

        Ok(texture)
    }

    /// Encode an `image` buffer to a texture.
    pub fn encode_rgba_image(
        &self,
        image: &RgbaImage,
        config: &EncodeConfig,
    ) -> TexResult<TextureImage> {
        self.encode_texture(image.width(), image.height(), image.as_raw(), config)
    }

    fn compress_chain(&self, source: &RgbaImage, format: TextureFormat) -> TexResult<Vec<Vec<u8>>> {
        let chain = MipmapGenerator::generate_chain(source);

        // Generated base first; stored smallest first
        chain
            .iter()
            .rev()
            .map(|level| {
                debug!(
                    width = level.width(),
                    height = level.height(),
                    "Compressing mip level"
                );
                self.compress_surface(level.as_raw(), level.width(), level.height(), format)
            })
            .collect()
    }

    fn compress_surface(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> TexResult<Vec<u8>> {
        match format {
            TextureFormat::Dxt1 => self.strategy.encode_dxt1(pixels, width, height),
            TextureFormat::Dxt5 => self.strategy.encode_dxt5(pixels, width, height),
            TextureFormat::Bgra8 => Ok(rgba_to_bgra(pixels)),
            other => Err(TexError::UnsupportedFormat(other)),
        }
    }
}

impl Default for TexCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TexCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TexCodec")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

fn container_dimensions(width: u32, height: u32) -> TexResult<(u16, u16)> {
    let invalid = |reason: &str| TexError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    };
    if width == 0 || height == 0 {
        return Err(invalid("width and height must be at least 1"));
    }
    let w = u16::try_from(width).map_err(|_| invalid("exceeds 65535"))?;
    let h = u16::try_from(height).map_err(|_| invalid("exceeds 65535"))?;
    Ok((w, h))
}

/// Decode container bytes with the reference codec.
///
/// ```
/// let err = texcodec::decode(b"DDS \0\0\0\0\0\0\0\0").unwrap_err();
/// assert!(matches!(err, texcodec::TexError::InvalidSignature(_)));
/// ```
pub fn decode(bytes: &[u8]) -> TexResult<DecodedImage> {
    TexCodec::new().decode(bytes)
}

/// Encode RGBA8 pixels to container bytes with the reference codec.
pub fn encode(width: u32, height: u32, pixels: &[u8], format: TextureFormat) -> TexResult<Vec<u8>> {
    TexCodec::new().encode(width, height, pixels, format)
}
