//! Error types for the geo crate.

use geoform_core::{Error, ErrorCode};
use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Invalid coordinate values
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// The geocoder returned no candidates
    #[error("No address available for {0}")]
    NoAddressAvailable(String),

    /// The geocoding backend failed to answer
    #[error("Geocoding I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Geocoder response could not be decoded
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => ErrorCode::InvalidCoordinate,
            GeoError::NoAddressAvailable(_) => ErrorCode::NoAddressAvailable,
            GeoError::Io(_) | GeoError::JsonError(_) => ErrorCode::GeocodingIoFailure,
        }
    }
}

impl From<GeoError> for Error {
    fn from(err: GeoError) -> Self {
        Error::new(err.code(), err.to_string()).with_source(err)
    }
}
