//! `texcodec decode` - TEX to PNG.

use std::path::Path;

use texcodec::TextureImage;
use tracing::info;

use super::common::{build_codec, path_str};
use crate::error::CliError;

/// Decode the full-resolution level of `input` and save it as an image.
///
/// The output format follows the file extension (normally `.png`).
pub fn run(input: &Path, output: &Path, parallel: bool) -> Result<(), CliError> {
    let texture =
        TextureImage::read_from_path(input).map_err(|e| CliError::texture(path_str(input), e))?;

    let codec = build_codec(parallel);
    let image = codec
        .decode_image(&texture)
        .and_then(|decoded| decoded.into_rgba_image())
        .map_err(|e| CliError::texture(path_str(input), e))?;

    image
        .save(output)
        .map_err(|e| CliError::image(path_str(output), e))?;

    info!(output = %output.display(), "Wrote decoded image");
    println!(
        "Decoded {}×{} {} -> {}",
        texture.width(),
        texture.height(),
        texture.format(),
        path_str(output)
    );

    Ok(())
}
