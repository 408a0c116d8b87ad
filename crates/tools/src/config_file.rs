use std::fs;
use std::io;
use std::path::Path;

use seedworld::{ConfigError, WorldConfig};
use thiserror::Error;
use toml::de;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read world config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse world config: {0}")]
    Parse(#[from] de::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Reads a TOML world config. Missing keys keep their defaults.
pub fn load_world_config(path: &Path) -> Result<WorldConfig, ConfigFileError> {
    parse_world_config(&fs::read_to_string(path)?)
}

pub fn parse_world_config(text: &str) -> Result<WorldConfig, ConfigFileError> {
    let config: WorldConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}
