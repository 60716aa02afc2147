//! Error types for the form crate.

use geoform_core::{Error, ErrorCode};
use geoform_geo::GeoError;
use thiserror::Error;

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors raised while handling location fixes and submissions.
///
/// A blank field is not an error: it is a rejected submission.
#[derive(Debug, Error)]
pub enum FormError {
    /// The location fix could not be used
    #[error("Unusable location fix: {0}")]
    Location(#[from] GeoError),

    /// The form could not be encoded
    #[error("Failed to serialize form: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FormError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FormError::Location(e) => e.code(),
            FormError::Serialization(_) => ErrorCode::SerializationError,
        }
    }
}

impl From<FormError> for Error {
    fn from(err: FormError) -> Self {
        Error::new(err.code(), err.to_string()).with_source(err)
    }
}
