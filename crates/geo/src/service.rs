//! Seams to the host platform's location and geocoding services.

use crate::{parse, AddressCandidate, Coordinate, GeoError, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Source of the device's last known location.
pub trait LocationProvider {
    /// The most recent fix, if the platform has one.
    fn last_known_location(&self) -> Option<Coordinate>;
}

/// Reverse geocoding backend.
pub trait Geocoder {
    /// Address candidates for a coordinate, best match first.
    fn reverse_geocode(&self, at: Coordinate, max_results: usize) -> Result<Vec<AddressCandidate>>;
}

impl LocationProvider for Option<Coordinate> {
    fn last_known_location(&self) -> Option<Coordinate> {
        *self
    }
}

impl<F> Geocoder for F
where
    F: Fn(Coordinate, usize) -> Result<Vec<AddressCandidate>>,
{
    fn reverse_geocode(&self, at: Coordinate, max_results: usize) -> Result<Vec<AddressCandidate>> {
        self(at, max_results)
    }
}

/// Geocoder answering every query from a JSON array of candidates on disk.
///
/// A missing or unreadable file surfaces as [`GeoError::Io`], the same way a
/// platform geocoder reports a backend outage.
#[derive(Debug, Clone)]
pub struct JsonFileGeocoder {
    path: PathBuf,
}

impl JsonFileGeocoder {
    /// Creates a geocoder backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Geocoder for JsonFileGeocoder {
    fn reverse_geocode(&self, at: Coordinate, max_results: usize) -> Result<Vec<AddressCandidate>> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut candidates: Vec<AddressCandidate> = serde_json::from_str(&content)?;
        candidates.truncate(max_results);
        debug!(%at, count = candidates.len(), path = %self.path.display(), "Fixture geocoder answered");
        Ok(candidates)
    }
}

/// First address candidate for a coordinate.
///
/// # Errors
///
/// [`GeoError::NoAddressAvailable`] when the geocoder returns nothing, or the
/// geocoder's own failure.
pub fn first_address<G>(geocoder: &G, at: Coordinate, max_results: usize) -> Result<AddressCandidate>
where
    G: Geocoder + ?Sized,
{
    let candidates = geocoder.reverse_geocode(at, max_results.max(1))?;
    parse(candidates).ok_or_else(|| GeoError::NoAddressAvailable(at.to_string()))
}

/// Reverse-geocodes a coordinate, absorbing every failure into `None`.
///
/// Failures are logged here and never reach the form.
pub fn resolve_address<G>(geocoder: &G, at: Coordinate, max_results: usize) -> Option<AddressCandidate>
where
    G: Geocoder + ?Sized,
{
    match first_address(geocoder, at, max_results) {
        Ok(address) => Some(address),
        Err(GeoError::NoAddressAvailable(_)) => {
            debug!(%at, "Geocoder returned no candidates");
            None
        }
        Err(e) => {
            warn!(%at, code = %e.code(), error = %e, "Reverse geocoding failed");
            None
        }
    }
}
