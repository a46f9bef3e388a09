//! `texcodec from-dds` - repackage a DXT1/DXT5 DDS as TEX.

use std::path::Path;

use texcodec::dds::convert_dds_file;

use super::common::path_str;
use crate::error::CliError;

/// Convert `input` (DDS) to `output` (TEX).
pub fn run(input: &Path, output: &Path) -> Result<(), CliError> {
    let texture =
        convert_dds_file(input, output).map_err(|e| CliError::texture(path_str(input), e))?;

    println!(
        "Converted {}×{} {} -> {} ({} bytes)",
        texture.width(),
        texture.height(),
        texture.format(),
        path_str(output),
        texture.file_size()
    );

    Ok(())
}
