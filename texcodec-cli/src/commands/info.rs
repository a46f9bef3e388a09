//! `texcodec info` - print header and mip chain details.

use std::path::Path;

use texcodec::TextureImage;

use super::common::path_str;
use crate::error::CliError;

/// Print a summary of a TEX file.
pub fn run(input: &Path) -> Result<(), CliError> {
    let texture =
        TextureImage::read_from_path(input).map_err(|e| CliError::texture(path_str(input), e))?;

    println!("{}", path_str(input));
    for line in describe(&texture) {
        println!("{}", line);
    }

    Ok(())
}

/// Human-readable summary lines.
pub fn describe(texture: &TextureImage) -> Vec<String> {
    let mut lines = vec![
        format!("  Dimensions: {}×{}", texture.width(), texture.height()),
        format!(
            "  Format:     {} (code {})",
            texture.format(),
            texture.format().code()
        ),
        format!(
            "  Mipmaps:    {}",
            if texture.has_mipmaps() { "yes" } else { "no" }
        ),
        format!("  Payload:    {} bytes", texture.payload_size()),
        format!("  File size:  {} bytes", texture.file_size()),
    ];

    if texture.level_count() > 1 {
        lines.push("  Levels (smallest first):".to_string());
        for ((width, height), data) in texture.level_dimensions().iter().zip(texture.levels()) {
            lines.push(format!("    {:>5}×{:<5} {} bytes", width, height, data.len()));
        }
    }

    lines
}
