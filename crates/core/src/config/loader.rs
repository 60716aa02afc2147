//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings were read from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or the standard locations, falling back to defaults
    ///
    /// # Errors
    ///
    /// Fails when an explicit path is missing, or when a file cannot be read,
    /// parsed, or holds out-of-range values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        schema.validate().to_result().map_err(|e| {
            let err = Error::new(ErrorCode::ConfigValidationError, e.message);
            match &config_path {
                Some(p) => err.with_context(format!("In {}", p.display())),
                None => err,
            }
        })?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".geoform.toml", "geoform.toml", ".config/geoform.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::from(e).with_context(format!("Reading {}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::from(e).with_context(format!("Parsing {}", path.display())))
}
