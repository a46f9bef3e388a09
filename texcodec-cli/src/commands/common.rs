//! Common types and utilities shared across CLI commands.

use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use texcodec::block::{ParallelCodec, ReferenceCodec};
use texcodec::{TexCodec, TextureFormat};

/// Target format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// DXT1/BC1 (8 bytes per 4×4 block, 1-bit alpha)
    Dxt1,
    /// DXT5/BC3 (16 bytes per 4×4 block, full alpha)
    Dxt5,
    /// Uncompressed BGRA, 4 bytes per pixel
    Bgra8,
}

impl From<FormatArg> for TextureFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Dxt1 => TextureFormat::Dxt1,
            FormatArg::Dxt5 => TextureFormat::Dxt5,
            FormatArg::Bgra8 => TextureFormat::Bgra8,
        }
    }
}

/// Build a codec with the requested block strategy.
pub fn build_codec(parallel: bool) -> TexCodec {
    if parallel {
        TexCodec::with_strategy(Arc::new(ParallelCodec))
    } else {
        TexCodec::with_strategy(Arc::new(ReferenceCodec))
    }
}

/// Collapse a `--flag` / `--no-flag` pair into an override.
///
/// `None` means neither was given and the config file decides. Clap's
/// `overrides_with` guarantees at most one of the two is set.
pub fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Path as a display string for messages and errors.
pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
