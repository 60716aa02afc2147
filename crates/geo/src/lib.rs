//! Location and reverse-geocoding primitives for geoform.
//!
//! This crate provides:
//! - Geographic coordinates with range checks
//! - Address candidates as returned by a reverse geocoder
//! - Selection of the first candidate and address-line formatting
//! - The location provider and geocoder seams the host platform implements
//!
//! # Example
//!
//! ```
//! use geoform_geo::{format_lines, parse, AddressCandidate};
//!
//! let candidate = AddressCandidate {
//!     lines: vec!["1600 Amphitheatre Pkwy".into(), "Mountain View, CA 94043".into()],
//!     ..Default::default()
//! };
//!
//! let address = parse(vec![candidate]);
//! assert_eq!(
//!     format_lines(address.as_ref()),
//!     "1600 Amphitheatre Pkwy\nMountain View, CA 94043"
//! );
//! ```

mod address;
mod error;
pub mod service;

pub use address::{format_lines, parse, AddressCandidate};
pub use error::{GeoError, Result};
pub use service::{first_address, resolve_address, Geocoder, JsonFileGeocoder, LocationProvider};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the coordinate unchanged if it is in range.
    pub fn validated(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({}, {}) is outside the valid range",
                self.latitude, self.longitude
            )))
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
