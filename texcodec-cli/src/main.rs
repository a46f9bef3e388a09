//! TexCodec CLI - Command-line interface
//!
//! Inspect, decode, encode and convert TEX game textures.

mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use texcodec::config::{config_file_path, ConfigFile};
use texcodec::logging::{init_logging, init_stderr_logging, LoggingGuard};

use commands::common::{flag_override, FormatArg};
use commands::config::ConfigCommands;
use commands::encode::EncodeOptions;
use error::CliError;

#[derive(Parser)]
#[command(name = "texcodec")]
#[command(version, about = "Inspect, decode and encode TEX game textures", long_about = None)]
struct Cli {
    /// Config file (default: ~/.texcodec/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log to stderr only, without writing a log file
    #[arg(long, global = true)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header fields and the mip chain of a TEX file
    Info {
        /// TEX file to inspect
        input: PathBuf,
    },

    /// Decode a TEX file to PNG
    Decode {
        /// TEX file to read
        input: PathBuf,

        /// Image to write (format from extension, usually .png)
        output: PathBuf,

        /// Decode blocks on all cores
        #[arg(long, overrides_with = "no_parallel")]
        parallel: bool,

        /// Decode on one thread even if the config enables parallel
        #[arg(long)]
        no_parallel: bool,
    },

    /// Encode an image to a TEX file
    Encode {
        /// Image to read (PNG or any format the image crate supports)
        input: PathBuf,

        /// TEX file to write
        output: PathBuf,

        /// Target format (default from config, otherwise dxt5)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Generate and store a full mip chain
        #[arg(long, overrides_with = "no_mipmaps")]
        mipmaps: bool,

        /// Store only the base level even if the config enables mipmaps
        #[arg(long)]
        no_mipmaps: bool,

        /// Compress blocks on all cores
        #[arg(long, overrides_with = "no_parallel")]
        parallel: bool,

        /// Compress on one thread even if the config enables parallel
        #[arg(long)]
        no_parallel: bool,
    },

    /// Repackage a DXT1/DXT5 DDS file as TEX
    FromDds {
        /// DDS file to read
        input: PathBuf,

        /// TEX file to write
        output: PathBuf,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn load_config(path: &Path) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(path)?)
}

fn setup_logging(config: &ConfigFile, no_log_file: bool) -> Result<LoggingGuard, CliError> {
    if no_log_file {
        return Ok(init_stderr_logging());
    }
    init_logging(&config.logging.directory, &config.logging.file)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

fn run(command: Commands, config: &ConfigFile, config_path: &Path) -> Result<(), CliError> {
    match command {
        Commands::Info { input } => commands::info::run(&input),
        Commands::Decode {
            input,
            output,
            parallel,
            no_parallel,
        } => {
            let parallel = flag_override(parallel, no_parallel).unwrap_or(config.codec.parallel);
            commands::decode::run(&input, &output, parallel)
        }
        Commands::Encode {
            input,
            output,
            format,
            mipmaps,
            no_mipmaps,
            parallel,
            no_parallel,
        } => {
            let options = EncodeOptions::resolve(
                format,
                flag_override(mipmaps, no_mipmaps),
                flag_override(parallel, no_parallel),
                config,
            );
            commands::encode::run(&input, &output, &options)
        }
        Commands::FromDds { input, output } => commands::from_dds::run(&input, &output),
        Commands::Config { command } => commands::config::run(command, config, config_path),
    }
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config_file_path);

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    let _logging_guard = match setup_logging(&config, cli.no_log_file) {
        Ok(guard) => guard,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli.command, &config, &config_path) {
        e.exit();
    }
}
