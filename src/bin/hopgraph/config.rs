use super::OutputFormat;
use clap::ValueEnum;
use hopgraph::InEdgePolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Defaults applied when the matching command-line flag is absent.
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    pub format: Option<OutputFormat>,
    pub directed: Option<bool>,
    pub in_edge_policy: Option<InEdgePolicy>,
    pub log_filter: Option<String>,
}

#[derive(Debug, Default)]
pub struct CliConfig {
    path: Option<PathBuf>,
    defaults: Defaults,
}

impl CliConfig {
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit.or_else(default_config_path);
        let data = if let Some(config_path) = path.as_ref() {
            if config_path.exists() {
                read_file(config_path)?
            } else {
                RawConfig::default()
            }
        } else {
            RawConfig::default()
        };
        let defaults = convert_defaults(&data.defaults)?;
        Ok(Self { path, defaults })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }
}

fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn convert_defaults(raw: &RawDefaults) -> Result<Defaults, ConfigError> {
    let format = match raw.format.as_deref() {
        Some(value) => Some(OutputFormat::from_str(value, true).map_err(|_| {
            ConfigError::InvalidFormat {
                value: value.to_string(),
            }
        })?),
        None => None,
    };
    Ok(Defaults {
        format,
        directed: raw.directed,
        in_edge_policy: raw.in_edge_policy,
        log_filter: raw.log_filter.clone(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    defaults: RawDefaults,
}

#[derive(Debug, Default, Deserialize)]
struct RawDefaults {
    format: Option<String>,
    directed: Option<bool>,
    in_edge_policy: Option<InEdgePolicy>,
    log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CLI config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse CLI config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("output format '{value}' is invalid; expected text or json")]
    InvalidFormat { value: String },
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("hopgraph").join("cli.toml"))
}
