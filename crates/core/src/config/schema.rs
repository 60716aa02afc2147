//! Configuration schema definitions

use crate::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Reverse geocoding settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Map marker settings
    #[serde(default)]
    pub map: MapConfig,

    /// User-facing submission messages
    #[serde(default)]
    pub messages: MessagesConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check configured values are usable
    pub fn validate(&self) -> ValidationResult {
        Validator::new()
            .custom("geocoder.max_results", || {
                (self.geocoder.max_results == 0).then(|| "Must be at least 1".to_string())
            })
            .range("map.camera_zoom", self.map.camera_zoom, 2.0, 21.0)
            .required("messages.rejected", &self.messages.rejected)
            .required("logging.level", &self.logging.level)
            .validate()
    }
}

/// Reverse geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Maximum number of candidates requested per coordinate
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    1
}

/// Map marker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Camera zoom level used when centering on a location fix
    #[serde(default = "default_camera_zoom")]
    pub camera_zoom: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            camera_zoom: default_camera_zoom(),
        }
    }
}

fn default_camera_zoom() -> f32 {
    12.0
}

/// Submission message configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Shown when any form field is blank
    #[serde(default = "default_rejected")]
    pub rejected: String,

    /// Prepended to the JSON body of a submitted form
    #[serde(default = "default_submitted_prefix")]
    pub submitted_prefix: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            rejected: default_rejected(),
            submitted_prefix: default_submitted_prefix(),
        }
    }
}

fn default_rejected() -> String {
    "Form not submitted. One or more fields are null or blank.".to_string()
}

fn default_submitted_prefix() -> String {
    "Form submitted:\n".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
