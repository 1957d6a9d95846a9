use std::env;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::DEFAULT_INITIAL_CAPACITY;

pub const ENV_INITIAL_CAPACITY: &str = "INTVEC_INITIAL_CAPACITY";

#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    array: Array,
}

#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Array {
    initial_capacity: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {0}: {1}")]
    Read(PathBuf, io::Error),
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

impl Config {
    pub fn with_initial_capacity(capacity: usize) -> Self {
        Config {
            array: Array { initial_capacity: Some(capacity) },
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn initial_capacity(&self) -> usize {
        self.array.initial_capacity.unwrap_or(DEFAULT_INITIAL_CAPACITY)
    }

    /// Overrides file values with `INTVEC_*` variables from the process
    /// environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| env::var(name).ok())
    }

    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        if let Some(value) = lookup(ENV_INITIAL_CAPACITY) {
            let capacity = value.trim().parse::<usize>()
                .map_err(|_| ConfigError::InvalidEnv { name: ENV_INITIAL_CAPACITY, value: value.clone() })?;

            log::debug!("{ENV_INITIAL_CAPACITY} overrides initial capacity: {capacity}");
            self.array.initial_capacity = Some(capacity);
        }

        Ok(())
    }
}

pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    log::debug!("looking for config in {}", path.display());

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(path.to_owned(), e))?;

    match Config::from_toml(&contents) {
        Ok(config) => {
            log::info!("reading config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            log::error!("error reading config: {}", e);
            Err(e)
        }
    }
}
