//! Assembles a [`Form`] from the typed names and the last geocoded address.

use crate::Form;
use geoform_geo::AddressCandidate;

/// Builds a form from the name fields and an optional address.
///
/// Without an address the street, city, state and zip are empty, which
/// later fails validation instead of failing here. Missing address parts
/// become empty strings the same way.
pub fn build(first: &str, last: &str, address: Option<&AddressCandidate>) -> Form {
    let part = |value: Option<&String>| value.cloned().unwrap_or_default();

    match address {
        Some(address) => Form {
            first: first.to_string(),
            last: last.to_string(),
            street: address.street(),
            city: part(address.locality.as_ref()),
            state: part(address.admin_area.as_ref()),
            zip: part(address.postal_code.as_ref()),
        },
        None => Form {
            first: first.to_string(),
            last: last.to_string(),
            ..Form::default()
        },
    }
}
