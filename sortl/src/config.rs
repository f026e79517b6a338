use clap::Parser;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};

use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "sortl.toml";

/// A single, unified struct holding all application settings.
/// Built from defaults, then the TOML file, then CLI arguments.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub driver: DriverConfig,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct DriverConfig {
    /// Report the time spent sorting each file.
    pub timing: bool,
    /// Directory relative input paths are resolved against.
    pub input_dir: PathBuf,
    /// Sorted when no file is named explicitly.
    pub default_files: Vec<PathBuf>,
    /// Named explicitly, each announced before it is processed.
    pub files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            driver: DriverConfig {
                timing: false,
                input_dir: PathBuf::from("."),
                default_files: vec![
                    PathBuf::from("bestCase.txt"),
                    PathBuf::from("worstCase.txt"),
                ],
                files: vec![],
            },
        }
    }
}

/// Parses command-line arguments using the clap derive macro.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Report the elapsed sorting time for every file.
    #[arg(short = 'o', long)]
    timing: bool,
    /// File to sort, e.g. `-fdata.txt`. Repeatable.
    #[arg(short = 'f', long = "file", value_name = "NAME")]
    files: Vec<PathBuf>,
    /// TOML configuration file [default: sortl.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. `info` or `debug`.
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Loads configuration from the TOML file and merges it with CLI arguments.
pub fn get_config() -> anyhow::Result<Config> {
    load_config(Cli::parse())
}

fn load_config(cli: Cli) -> anyhow::Result<Config> {
    let config_path = match cli.config {
        Some(path) if !path.is_file() => {
            anyhow::bail!("config file not found: {}", path.display())
        }
        Some(path) => path,
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let mut figment = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file_exact(config_path));

    if cli.timing {
        figment = figment.merge(("driver.timing", true));
    }
    if !cli.files.is_empty() {
        figment = figment.merge(("driver.files", cli.files));
    }
    if let Some(level) = cli.log_level {
        figment = figment.merge(("logging.level", level));
    }

    let config: Config = figment.extract()?;
    Ok(config)
}
