//! Configuration file handling for ~/.texcodec/config.ini.
//!
//! Missing files and missing keys fall back to defaults. Values that are
//! present but malformed are rejected.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::encode::{EncodeConfig, DEFAULT_ENCODE_FORMAT};
use crate::tex::TextureFormat;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "texcodec.log";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// `[encode]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSettings {
    pub format: TextureFormat,
    pub mipmaps: bool,
}

/// `[codec]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecSettings {
    /// Use the rayon block codec instead of the sequential one.
    pub parallel: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    pub file: String,
}

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub encode: EncodeSettings,
    pub codec: CodecSettings,
    pub logging: LoggingSettings,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_ENCODE_FORMAT,
            mipmaps: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: config_directory().join("logs"),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl ConfigFile {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Write a default config file at `path` unless one is already there.
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_exists(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_config_string())
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// The encode defaults this file describes.
    pub fn encode_config(&self) -> EncodeConfig {
        EncodeConfig::new(self.encode.format).with_mipmaps(self.encode.mipmaps)
    }

    fn to_config_string(&self) -> String {
        format!(
            r#"[encode]
; Target format: dxt1, dxt5 or bgra8
format = {}
; Store a full mip chain (true/false)
mipmaps = {}

[codec]
; Compress blocks on all cores (true/false)
parallel = {}

[logging]
directory = {}
file = {}
"#,
            format_name(self.encode.format),
            self.encode.mipmaps,
            self.codec.parallel,
            self.logging.directory.display(),
            self.logging.file,
        )
    }
}

fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [encode] section
    if let Some(section) = ini.section(Some("encode")) {
        if let Some(v) = section.get("format") {
            config.encode.format =
                parse_format_name(v).ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "encode".to_string(),
                    key: "format".to_string(),
                    value: v.to_string(),
                    reason: "must be one of: dxt1, dxt5, bgra8".to_string(),
                })?;
        }
        if let Some(v) = section.get("mipmaps") {
            config.encode.mipmaps = parse_bool("encode", "mipmaps", v)?;
        }
    }

    // [codec] section
    if let Some(section) = ini.section(Some("codec")) {
        if let Some(v) = section.get("parallel") {
            config.codec.parallel = parse_bool("codec", "parallel", v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

/// Parse an encodable format name (`dxt1`, `dxt5`, `bgra8`), ignoring case.
pub fn parse_format_name(value: &str) -> Option<TextureFormat> {
    match value.trim().to_lowercase().as_str() {
        "dxt1" | "bc1" => Some(TextureFormat::Dxt1),
        "dxt5" | "bc3" => Some(TextureFormat::Dxt5),
        "bgra8" => Some(TextureFormat::Bgra8),
        _ => None,
    }
}

fn format_name(format: TextureFormat) -> String {
    format.to_string().to_lowercase()
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

/// Expand ~ to home directory in paths.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Get the path to the config directory (~/.texcodec).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".texcodec")
}

/// Get the path to the config file (~/.texcodec/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
