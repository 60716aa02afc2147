//! The contact form entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    /// Given name, typed by the user
    First,
    /// Family name, typed by the user
    Last,
    /// House number and street, pre-filled from the address
    Street,
    /// Pre-filled from the address locality
    City,
    /// Pre-filled from the address admin area
    State,
    /// Pre-filled from the address postal code
    Zip,
}

impl FieldId {
    /// Every field, in serialization order.
    pub const ALL: [FieldId; 6] = [
        FieldId::First,
        FieldId::Last,
        FieldId::Street,
        FieldId::City,
        FieldId::State,
        FieldId::Zip,
    ];

    /// Fields the host pre-fills from a geocoded address.
    pub const ADDRESS: [FieldId; 4] = [FieldId::Street, FieldId::City, FieldId::State, FieldId::Zip];

    /// JSON key and log name of the field.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::First => "first",
            FieldId::Last => "last",
            FieldId::Street => "street",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::Zip => "zip",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A contact form as captured at submission time.
///
/// Construction never checks the values; blankness is only judged by
/// [`crate::validator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub first: String,
    pub last: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Form {
    /// Value of a single field.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::First => &self.first,
            FieldId::Last => &self.last,
            FieldId::Street => &self.street,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::Zip => &self.zip,
        }
    }

    /// Form whose every field is produced by `read`, in [`FieldId::ALL`] order.
    pub fn from_fields(mut read: impl FnMut(FieldId) -> String) -> Self {
        Self {
            first: read(FieldId::First),
            last: read(FieldId::Last),
            street: read(FieldId::Street),
            city: read(FieldId::City),
            state: read(FieldId::State),
            zip: read(FieldId::Zip),
        }
    }

    /// Every field paired with its value, in [`FieldId::ALL`] order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

/// Mailing-label rendering: name, street, then city line.
impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\n{}\n{}, {} {}",
            self.first, self.last, self.street, self.city, self.state, self.zip
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Form {
        Form {
            first: "Jane".into(),
            last: "Doe".into(),
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62704".into(),
        }
    }

    // Fails when a field is added to `Form` but not to `FieldId::ALL`.
    #[test]
    fn test_field_list_covers_every_struct_field() {
        let value = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let names: Vec<&str> = FieldId::ALL.iter().map(|f| f.name()).collect();

        let mut sorted_keys = keys.clone();
        sorted_keys.sort_unstable();
        let mut sorted_names = names.clone();
        sorted_names.sort_unstable();
        assert_eq!(sorted_keys, sorted_names);
    }

    #[test]
    fn test_get_matches_field_name() {
        let form = sample();
        let value = serde_json::to_value(&form).unwrap();
        for (id, text) in form.fields() {
            assert_eq!(value[id.name()], text, "field {id}");
        }
    }

    #[test]
    fn test_from_fields_reads_every_field() {
        let form = sample();
        assert_eq!(Form::from_fields(|id| form.get(id).to_string()), form);
    }

    #[test]
    fn test_field_id_serde_name() {
        assert_eq!(serde_json::to_string(&FieldId::Zip).unwrap(), "\"zip\"");
    }

    #[test]
    fn test_display_mailing_label() {
        assert_eq!(sample().to_string(), "Jane Doe\n1 Main St\nSpringfield, IL 62704");
    }
}
