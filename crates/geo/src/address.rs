//! Reverse-geocoding candidates.
//!
//! A geocoder may return several candidates for one coordinate; only the
//! first is ever used. An empty response is a normal outcome, not an error.

use serde::{Deserialize, Serialize};

/// One possible address match for a coordinate.
///
/// Field names follow the platform geocoder's naming so fixture files can be
/// captured straight from a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressCandidate {
    /// Formatted address lines, most specific first
    pub lines: Vec<String>,
    /// House number
    pub sub_thoroughfare: Option<String>,
    /// Street name
    pub thoroughfare: Option<String>,
    /// City
    pub locality: Option<String>,
    /// State or province
    pub admin_area: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
}

impl AddressCandidate {
    /// House number and street joined by a space, trimmed.
    ///
    /// A missing part contributes an empty string.
    pub fn street(&self) -> String {
        format!(
            "{} {}",
            self.sub_thoroughfare.as_deref().unwrap_or_default(),
            self.thoroughfare.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

/// Returns the first candidate, or `None` when there are none.
///
/// # Example
/// ```
/// use geoform_geo::{parse, AddressCandidate};
///
/// assert!(parse(Vec::new()).is_none());
/// ```
pub fn parse<I>(candidates: I) -> Option<AddressCandidate>
where
    I: IntoIterator<Item = AddressCandidate>,
{
    candidates.into_iter().next()
}

/// Joins every address line with `\n`.
///
/// Returns an empty string for an absent address.
pub fn format_lines(candidate: Option<&AddressCandidate>) -> String {
    candidate.map(|c| c.lines.join("\n")).unwrap_or_default()
}
