//! Encoding configuration.

use crate::tex::TextureFormat;

/// Default target format for encoding.
pub const DEFAULT_ENCODE_FORMAT: TextureFormat = TextureFormat::Dxt5;

/// Configuration for encoding RGBA8 pixels into a TEX container.
///
/// # Example
///
/// ```
/// use texcodec::config::EncodeConfig;
/// use texcodec::tex::TextureFormat;
///
/// // DXT5, no mipmaps
/// let config = EncodeConfig::default();
/// assert_eq!(config.format(), TextureFormat::Dxt5);
/// assert!(!config.generate_mipmaps());
///
/// let config = EncodeConfig::new(TextureFormat::Dxt1).with_mipmaps(true);
/// assert_eq!(config.format(), TextureFormat::Dxt1);
/// assert!(config.generate_mipmaps());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    format: TextureFormat,
    generate_mipmaps: bool,
}

impl EncodeConfig {
    /// Create a configuration for `format` without mipmaps.
    pub fn new(format: TextureFormat) -> Self {
        Self {
            format,
            generate_mipmaps: false,
        }
    }

    /// Build and store a full mip chain when encoding.
    pub fn with_mipmaps(mut self, generate: bool) -> Self {
        self.generate_mipmaps = generate;
        self
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn generate_mipmaps(&self) -> bool {
        self.generate_mipmaps
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODE_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncodeConfig::default();
        assert_eq!(config.format(), TextureFormat::Dxt5);
        assert!(!config.generate_mipmaps());
    }

    #[test]
    fn test_builder_chain() {
        let config = EncodeConfig::new(TextureFormat::Bgra8).with_mipmaps(true);
        assert_eq!(config.format(), TextureFormat::Bgra8);
        assert!(config.generate_mipmaps());
    }
}
