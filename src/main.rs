//! layercfg CLI
//!
//! Entry point for the `layercfg` command-line tool.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use layercfg::logging::init_logging;
use layercfg::{ConfigError, FileConfiguration, FsStorage, Value};
use layercfg_document::{DocumentProvider, YamlProvider};

#[derive(Parser)]
#[command(name = "layercfg")]
#[command(about = "Reconcile YAML configuration files against their defaults", version)]
struct Cli {
    /// Log merge and reorder decisions to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill missing keys, fix mistyped values and reorder keys from a defaults file
    Reconcile {
        /// User configuration file
        file: PathBuf,

        /// Defaults file of the same shape
        #[arg(long, short = 'd')]
        defaults: PathBuf,

        /// Keep the file's own header instead of the defaults header
        #[arg(long)]
        keep_header: bool,

        /// Print the result instead of rewriting the file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the value at a dotted path
    Get {
        /// Configuration file
        file: PathBuf,

        /// Dotted path, e.g. `cache.mode`
        path: String,

        /// Defaults file consulted when the path is missing
        #[arg(long, short = 'd')]
        defaults: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the leading comment header of a file
    Header {
        /// Configuration file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Reconcile {
            file,
            defaults,
            keep_header,
            stdout,
        } => run_reconcile(&file, &defaults, keep_header, stdout),
        Commands::Get {
            file,
            path,
            defaults,
            json,
        } => run_get(&file, &path, defaults.as_deref(), json),
        Commands::Header { file } => run_header(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn storage() -> FsStorage {
    FsStorage::new(".")
}

fn load(path: &Path, defaults: Option<&Path>) -> Result<FileConfiguration, ConfigError> {
    let storage = storage();
    let defaults = match defaults {
        Some(defaults_path) => {
            let mut defaults = FileConfiguration::new();
            defaults.load_path(&storage, defaults_path, None)?;
            Some(Arc::new(defaults))
        }
        None => None,
    };

    let mut config = FileConfiguration::new();
    config.load_path(&storage, path, defaults)?;
    Ok(config)
}

fn run_reconcile(
    file: &Path,
    defaults: &Path,
    keep_header: bool,
    stdout: bool,
) -> Result<(), ConfigError> {
    let mut config = load(file, Some(defaults))?;
    config
        .options_mut()
        .set_copy_defaults(true)
        .set_copy_header(!keep_header);

    if stdout {
        print!("{}", config.save_to_string()?);
    } else {
        config.save_path(&storage(), file)?;
        eprintln!("Wrote: {}", file.display());
    }
    Ok(())
}

fn run_get(
    file: &Path,
    path: &str,
    defaults: Option<&Path>,
    json: bool,
) -> Result<(), ConfigError> {
    let config = load(file, defaults)?;
    let Some(value) = config.get(path) else {
        eprintln!("No value at '{}'", path);
        process::exit(1);
    };

    if json {
        match serde_json::to_string_pretty(&value.to_json()) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return Ok(());
    }

    let text = match value {
        Value::Section(section) => YamlProvider
            .serialize(section)
            .map_err(ConfigError::Serialize)?,
        other => serde_yaml::to_string(&other.to_json())
            .map_err(|e| ConfigError::Serialize(e.into()))?,
    };
    print!("{}", text);
    Ok(())
}

fn run_header(file: &Path) -> Result<(), ConfigError> {
    let config = load(file, None)?;
    if let Some(header) = config.options().header() {
        println!("{}", header);
    }
    Ok(())
}
