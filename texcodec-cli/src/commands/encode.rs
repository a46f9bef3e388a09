//! `texcodec encode` - image to TEX.

use std::path::Path;

use texcodec::config::{ConfigFile, EncodeConfig};
use texcodec::TextureFormat;
use tracing::info;

use super::common::{build_codec, path_str, FormatArg};
use crate::error::CliError;

/// Encode options after merging CLI flags with the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub config: EncodeConfig,
    pub parallel: bool,
}

impl EncodeOptions {
    /// Options given on the command line win; `None` falls back to the config file.
    pub fn resolve(
        format: Option<FormatArg>,
        mipmaps: Option<bool>,
        parallel: Option<bool>,
        file: &ConfigFile,
    ) -> Self {
        let format = format
            .map(TextureFormat::from)
            .unwrap_or(file.encode.format);
        Self {
            config: EncodeConfig::new(format)
                .with_mipmaps(mipmaps.unwrap_or(file.encode.mipmaps)),
            parallel: parallel.unwrap_or(file.codec.parallel),
        }
    }
}

/// Load `input`, encode it and write `output`.
///
/// Block-compressed targets require dimensions divisible by 4.
pub fn run(input: &Path, output: &Path, options: &EncodeOptions) -> Result<(), CliError> {
    let image = image::open(input)
        .map_err(|e| CliError::image(path_str(input), e))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let format = options.config.format();

    if format.is_block_compressed() && (width % 4 != 0 || height % 4 != 0) {
        return Err(CliError::InvalidInput(format!(
            "{} requires width and height divisible by 4, image is {}×{}",
            format, width, height
        )));
    }

    let codec = build_codec(options.parallel);
    let texture = codec
        .encode_rgba_image(&image, &options.config)
        .map_err(|e| CliError::texture(path_str(input), e))?;
    let written = texture
        .write_to_path(output)
        .map_err(|e| CliError::texture(path_str(output), e))?;

    info!(
        output = %output.display(),
        bytes = written,
        codec = codec.strategy_name(),
        "Wrote texture"
    );
    println!(
        "Encoded {}×{} {}{} -> {} ({} bytes)",
        width,
        height,
        format,
        if texture.has_mipmaps() {
            format!(", {} levels", texture.level_count())
        } else {
            String::new()
        },
        path_str(output),
        written
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use texcodec::TextureImage;

    fn write_png(path: &Path, width: u32, height: u32) {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 30) as u8, (y * 30) as u8, 128, 255])
        });
        image.save(path).unwrap();
    }

    #[test]
    fn test_resolve_prefers_flags() {
        let mut file = ConfigFile::default();
        file.encode.format = TextureFormat::Dxt1;

        let options = EncodeOptions::resolve(Some(FormatArg::Bgra8), None, None, &file);
        assert_eq!(options.config.format(), TextureFormat::Bgra8);

        let options = EncodeOptions::resolve(None, None, Some(true), &file);
        assert_eq!(options.config.format(), TextureFormat::Dxt1);
        assert!(options.parallel);
    }

    #[test]
    fn test_resolve_flags_can_disable_config() {
        let mut file = ConfigFile::default();
        file.encode.mipmaps = true;
        file.codec.parallel = true;

        let options = EncodeOptions::resolve(None, None, None, &file);
        assert!(options.config.generate_mipmaps());
        assert!(options.parallel);

        let options = EncodeOptions::resolve(None, Some(false), Some(false), &file);
        assert!(!options.config.generate_mipmaps());
        assert!(!options.parallel);
    }

    #[test]
    fn test_encode_png_with_mipmaps() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("in.png");
        let tex_path = dir.path().join("out.tex");
        write_png(&png_path, 8, 8);

        let options = EncodeOptions {
            config: EncodeConfig::new(TextureFormat::Dxt5).with_mipmaps(true),
            parallel: true,
        };
        run(&png_path, &tex_path, &options).unwrap();

        let texture = TextureImage::read_from_path(&tex_path).unwrap();
        assert_eq!(texture.format(), TextureFormat::Dxt5);
        assert!(texture.has_mipmaps());
        assert_eq!(texture.level_count(), 4);
    }

    #[test]
    fn test_rejects_misaligned_dxt() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("odd.png");
        write_png(&png_path, 6, 4);

        let options = EncodeOptions {
            config: EncodeConfig::new(TextureFormat::Dxt1),
            parallel: false,
        };
        let result = run(&png_path, &dir.path().join("out.tex"), &options);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_bgra8_accepts_any_size() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("odd.png");
        let tex_path = dir.path().join("odd.tex");
        write_png(&png_path, 5, 3);

        let options = EncodeOptions {
            config: EncodeConfig::new(TextureFormat::Bgra8),
            parallel: false,
        };
        run(&png_path, &tex_path, &options).unwrap();

        let texture = TextureImage::read_from_path(&tex_path).unwrap();
        assert_eq!(texture.payload_size(), 5 * 3 * 4);
    }
}
