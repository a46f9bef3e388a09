//! Configuration for encoding and for the command-line tool.
//!
//! [`EncodeConfig`] carries per-call encode options. [`ConfigFile`] holds
//! user defaults loaded from `~/.texcodec/config.ini`.
//!
//! # Example
//!
//! ```
//! use texcodec::config::{ConfigFile, EncodeConfig};
//!
//! let file = ConfigFile::default();
//! assert_eq!(file.encode_config(), EncodeConfig::default());
//! ```

mod encode;
mod file;

pub use encode::{EncodeConfig, DEFAULT_ENCODE_FORMAT};
pub use file::{
    config_directory, config_file_path, parse_format_name, CodecSettings, ConfigFile,
    ConfigFileError, EncodeSettings, LoggingSettings, DEFAULT_LOG_FILE,
};
