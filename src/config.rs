use std::path::PathBuf;

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Default output file when neither the CLI nor the config sets one
pub const DEFAULT_OUTPUT: &str = "filtered_subdomains.txt";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "subfilter.toml";

/// Settings layered from defaults, a config file and `SUBFILTER_*`
/// environment variables. Command-line flags are applied on top by the
/// binary.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Output file path
    pub output: PathBuf,

    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Loads settings. An explicit `config_file` must exist; the default
    /// `subfilter.toml` is optional.
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        let file = match config_file {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(file)
            .add_source(Environment::with_prefix("SUBFILTER"))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
