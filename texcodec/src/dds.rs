//! DDS to TEX conversion.
//!
//! Block-compressed DDS files already hold DXT1/DXT5 data in the layout TEX
//! uses, so conversion copies the payload verbatim behind a TEX header. The
//! payload keeps any mip levels the DDS carried; the TEX header is written
//! without the mipmap flag and decoders read the base surface from the front.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{TexError, TexResult};
use crate::stream::ByteReader;
use crate::tex::{TextureFormat, TextureImage};

/// DDS magic number: "DDS " in little-endian.
pub const DDS_MAGIC: u32 = 0x2053_4444;

/// DDS_HEADER size field value.
pub const DDS_HEADER_SIZE: u32 = 124;

/// Pixel format flag: `fourcc` is valid.
pub const DDPF_FOURCC: u32 = 0x4;

/// Pixel format flag: uncompressed RGB data.
pub const DDPF_RGB: u32 = 0x40;

/// DXGI_FORMAT_BC1_UNORM.
pub const DXGI_FORMAT_BC1_UNORM: u32 = 71;

/// DXGI_FORMAT_BC3_UNORM.
pub const DXGI_FORMAT_BC3_UNORM: u32 = 77;

const FOURCC_DXT1: [u8; 4] = *b"DXT1";
const FOURCC_DXT5: [u8; 4] = *b"DXT5";
const FOURCC_DX10: [u8; 4] = *b"DX10";

/// Fields of a DDS header that matter for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdsInfo {
    pub width: u32,
    pub height: u32,
    pub mipmap_count: u32,
    pub format: TextureFormat,
    /// Byte offset of the first surface.
    pub data_offset: usize,
}

/// Read the DDS header and map its pixel format to a TEX format.
///
/// # Errors
///
/// - `UnexpectedEndOfData` if the header is cut short
/// - `InvalidDds` for a bad magic or a format other than BC1/BC3
pub fn read_dds_info(bytes: &[u8]) -> TexResult<DdsInfo> {
    let mut reader = ByteReader::new(bytes);

    let magic = reader.read_u32()?;
    if magic != DDS_MAGIC {
        return Err(TexError::InvalidDds(format!(
            "bad magic {:#010x}, expected \"DDS \"",
            magic
        )));
    }

    let header_size = reader.read_u32()?;
    if header_size != DDS_HEADER_SIZE {
        debug!(header_size, "Unusual DDS header size");
    }
    let _flags = reader.read_u32()?;
    let height = reader.read_u32()?;
    let width = reader.read_u32()?;
    let _pitch_or_linear_size = reader.read_u32()?;
    let _depth = reader.read_u32()?;
    let mipmap_count = reader.read_u32()?;
    reader.read_bytes(44)?; // reserved1

    // DDS_PIXELFORMAT
    let _pf_size = reader.read_u32()?;
    let pf_flags = reader.read_u32()?;
    let fourcc: [u8; 4] = [
        reader.read_u8()?,
        reader.read_u8()?,
        reader.read_u8()?,
        reader.read_u8()?,
    ];
    reader.read_bytes(20)?; // bit count and channel masks
    reader.read_bytes(20)?; // caps[4] and reserved2

    let format = match fourcc {
        FOURCC_DXT1 => TextureFormat::Dxt1,
        FOURCC_DXT5 => TextureFormat::Dxt5,
        FOURCC_DX10 => {
            let dxgi_format = reader.read_u32()?;
            reader.read_bytes(16)?; // rest of DDS_HEADER_DXT10
            match dxgi_format {
                DXGI_FORMAT_BC1_UNORM => TextureFormat::Dxt1,
                DXGI_FORMAT_BC3_UNORM => TextureFormat::Dxt5,
                other => {
                    return Err(TexError::InvalidDds(format!(
                        "unsupported DXGI format {}",
                        other
                    )))
                }
            }
        }
        _ if pf_flags & DDPF_FOURCC == 0 && pf_flags & DDPF_RGB != 0 => {
            return Err(TexError::InvalidDds(
                "uncompressed RGB data is not supported, need DXT1 or DXT5".to_string(),
            ))
        }
        other => {
            return Err(TexError::InvalidDds(format!(
                "unsupported format: fourcc={:?}, flags={:#x}",
                String::from_utf8_lossy(&other),
                pf_flags
            )))
        }
    };

    Ok(DdsInfo {
        width,
        height,
        mipmap_count,
        format,
        data_offset: reader.position(),
    })
}

/// Convert DDS bytes to a single-level TEX texture.
///
/// # Errors
///
/// Header errors from [`read_dds_info`], plus:
/// - `InvalidDimensions` if the DDS is larger than 65535 on either side
/// - `NoTextureData` if nothing follows the header
pub fn convert_dds(bytes: &[u8]) -> TexResult<TextureImage> {
    let info = read_dds_info(bytes)?;
    debug!(?info, "Read DDS header");

    let too_large = || TexError::InvalidDimensions {
        width: info.width,
        height: info.height,
        reason: "TEX dimensions are limited to 65535".to_string(),
    };
    let width = u16::try_from(info.width).map_err(|_| too_large())?;
    let height = u16::try_from(info.height).map_err(|_| too_large())?;

    let payload = bytes[info.data_offset..].to_vec();
    TextureImage::new(width, height, info.format, payload)
}

/// Convert a DDS file on disk and write the TEX result.
pub fn convert_dds_file<P: AsRef<Path>, Q: AsRef<Path>>(
    dds_path: P,
    tex_path: Q,
) -> TexResult<TextureImage> {
    let bytes = fs::read(dds_path.as_ref())?;
    let texture = convert_dds(&bytes)?;
    texture.write_to_path(tex_path.as_ref())?;

    info!(
        source = %dds_path.as_ref().display(),
        target = %tex_path.as_ref().display(),
        width = texture.width(),
        height = texture.height(),
        format = %texture.format(),
        "Converted DDS to TEX"
    );

    Ok(texture)
}
