//! Configuration management CLI commands.
//!
//! Provides `config path`, `config init` and `config show`.

use std::path::Path;

use clap::Subcommand;
use texcodec::config::ConfigFile;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Write a default configuration file if none exists
    Init,

    /// Print the effective configuration
    Show,
}

/// Run a config subcommand against the file at `path`.
pub fn run(command: ConfigCommands, config: &ConfigFile, path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Init => {
            if ConfigFile::ensure_exists(path)? {
                println!("Wrote default config: {}", path.display());
            } else {
                println!("Config already exists: {}", path.display());
            }
            Ok(())
        }
        ConfigCommands::Show => {
            for line in show_lines(config) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn show_lines(config: &ConfigFile) -> Vec<String> {
    vec![
        "[encode]".to_string(),
        format!("  format = {}", config.encode.format.to_string().to_lowercase()),
        format!("  mipmaps = {}", config.encode.mipmaps),
        "[codec]".to_string(),
        format!("  parallel = {}", config.codec.parallel),
        "[logging]".to_string(),
        format!("  directory = {}", config.logging.directory.display()),
        format!("  file = {}", config.logging.file),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults() {
        let lines = show_lines(&ConfigFile::default());
        assert_eq!(lines[1], "  format = dxt5");
        assert_eq!(lines[2], "  mipmaps = false");
        assert_eq!(lines[4], "  parallel = false");
        assert_eq!(lines[7], "  file = texcodec.log");
    }

    #[test]
    fn test_init_writes_selected_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ini");

        run(ConfigCommands::Init, &ConfigFile::default(), &path).unwrap();

        assert!(path.exists());
        assert_eq!(ConfigFile::load_from(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ini");
        std::fs::write(&path, "[codec]\nparallel = true\n").unwrap();

        run(ConfigCommands::Init, &ConfigFile::default(), &path).unwrap();

        assert!(ConfigFile::load_from(&path).unwrap().codec.parallel);
    }
}
