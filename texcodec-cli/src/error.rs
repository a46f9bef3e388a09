//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use texcodec::config::ConfigFileError;
use texcodec::TexError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Arguments that the codec would accept but the tool refuses
    InvalidInput(String),
    /// Failed to read, parse, decode or encode a texture
    Texture { path: String, error: TexError },
    /// Failed to load or save a PNG
    Image {
        path: String,
        error: image::ImageError,
    },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Texture {
                error: TexError::InvalidSignature(_),
                ..
            } => {
                eprintln!();
                eprintln!("The file does not start with \"TEX\\0\".");
                eprintln!("If it is a DDS file, convert it first with: texcodec from-dds");
            }
            CliError::Texture {
                error: TexError::UnsupportedFormat(_),
                ..
            } => {
                eprintln!();
                eprintln!("Only DXT1, DXT5 and BGRA8 textures can be decoded.");
                eprintln!("Run 'texcodec info <file>' to see the stored format.");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Fix the value named above, or delete the file and run");
                eprintln!("'texcodec config init' to write a fresh one.");
            }
            _ => {}
        }

        process::exit(1)
    }

    pub fn texture(path: impl Into<String>, error: TexError) -> Self {
        CliError::Texture {
            path: path.into(),
            error,
        }
    }

    pub fn image(path: impl Into<String>, error: image::ImageError) -> Self {
        CliError::Image {
            path: path.into(),
            error,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidInput(msg) => write!(f, "{}", msg),
            CliError::Texture { path, error } => write!(f, "'{}': {}", path, error),
            CliError::Image { path, error } => write!(f, "Image '{}': {}", path, error),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Texture { error, .. } => Some(error),
            CliError::Image { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_texture_error() {
        let err = CliError::texture("a.tex", TexError::NoTextureData);
        assert_eq!(err.to_string(), "'a.tex': No texture data found in file");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigFileError::WriteError("disk full".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.source().is_none());
    }
}
