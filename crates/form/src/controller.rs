//! Location fix and submit handling.
//!
//! A location fix replaces the last geocoded address and rewrites the street,
//! city, state and zip fields from it, blanking them when there is none. A
//! submit reads all six fields back, builds a fresh [`Form`] and reports the
//! outcome through a [`MessageSink`]. The fields are the only state a submit
//! sees.

use crate::{builder, serializer, validator, FieldId, Form, Result};
use geoform_core::config::ConfigSchema;
use geoform_core::ErrorCode;
use geoform_geo::{format_lines, resolve_address, AddressCandidate, Coordinate, Geocoder};
use std::collections::HashMap;
use tracing::{debug, info};

/// Text fields on the host's screen.
pub trait FieldSource {
    /// Current text of a field; empty when the field was never written.
    fn read_text(&self, field: FieldId) -> String;
    /// Replaces the text of a field.
    fn write_text(&mut self, field: FieldId, text: &str);
}

/// Fire-and-forget notification to the user.
pub trait MessageSink {
    /// Shows `text`; no acknowledgement.
    fn show_message(&mut self, text: &str);
}

impl MessageSink for Vec<String> {
    fn show_message(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// In-memory field store, for hosts without widgets and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFields {
    values: HashMap<FieldId, String>,
}

impl MemoryFields {
    /// Fields holding only the typed names.
    pub fn with_names(first: &str, last: &str) -> Self {
        let mut fields = Self::default();
        fields.write_text(FieldId::First, first);
        fields.write_text(FieldId::Last, last);
        fields
    }
}

impl FieldSource for MemoryFields {
    fn read_text(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn write_text(&mut self, field: FieldId, text: &str) {
        self.values.insert(field, text.to_string());
    }
}

/// Marker the host should place after a location fix.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: Coordinate,
    /// Address lines, empty without an address
    pub title: String,
    pub zoom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitted,
}

/// Result of one submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted { json: String },
    Rejected { blank: Vec<FieldId> },
}

/// Knobs taken from the `[geocoder]`, `[map]` and `[messages]` config tables.
#[derive(Debug, Clone)]
pub struct SubmissionSettings {
    pub max_results: usize,
    pub camera_zoom: f32,
    pub rejected_message: String,
    pub submitted_prefix: String,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self::from(&ConfigSchema::default())
    }
}

impl From<&ConfigSchema> for SubmissionSettings {
    fn from(schema: &ConfigSchema) -> Self {
        Self {
            max_results: schema.geocoder.max_results,
            camera_zoom: schema.map.camera_zoom,
            rejected_message: schema.messages.rejected.clone(),
            submitted_prefix: schema.messages.submitted_prefix.clone(),
        }
    }
}

pub struct SubmissionController<G, F, M> {
    geocoder: G,
    fields: F,
    messages: M,
    settings: SubmissionSettings,
    address: Option<AddressCandidate>,
    state: SubmissionState,
}

impl<G, F, M> SubmissionController<G, F, M>
where
    G: Geocoder,
    F: FieldSource,
    M: MessageSink,
{
    pub fn new(geocoder: G, fields: F, messages: M) -> Self {
        Self::with_settings(geocoder, fields, messages, SubmissionSettings::default())
    }

    pub fn with_settings(geocoder: G, fields: F, messages: M, settings: SubmissionSettings) -> Self {
        Self {
            geocoder,
            fields,
            messages,
            settings,
            address: None,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn address(&self) -> Option<&AddressCandidate> {
        self.address.as_ref()
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }

    /// Geocodes a fix, stores the address and pre-fills the address fields.
    ///
    /// A failed or empty lookup clears the stored address and the four
    /// address fields together.
    ///
    /// # Errors
    ///
    /// [`FormError::Location`](crate::FormError::Location) for an
    /// out-of-range coordinate; nothing is changed in that case.
    pub fn on_location_fix(&mut self, at: Coordinate) -> Result<MapMarker> {
        let at = at.validated()?;
        let address = resolve_address(&self.geocoder, at, self.settings.max_results);

        let prefill = builder::build("", "", address.as_ref());
        for field in FieldId::ADDRESS {
            self.fields.write_text(field, prefill.get(field));
        }
        match &address {
            Some(_) => debug!(%at, street = %prefill.street, city = %prefill.city, "Address fields pre-filled"),
            None => debug!(%at, "No address for location fix, address fields cleared"),
        }

        let marker = MapMarker {
            position: at,
            title: format_lines(address.as_ref()),
            zoom: self.settings.camera_zoom,
        };
        self.address = address;
        Ok(marker)
    }

    /// Builds, validates and reports the form for one submit trigger.
    ///
    /// # Errors
    ///
    /// [`FormError::Serialization`](crate::FormError::Serialization) if a
    /// complete form cannot be encoded; no message is shown then.
    pub fn on_submit(&mut self) -> Result<SubmissionOutcome> {
        let form = self.current_form();
        let blank = validator::blank_fields(&form);

        if !blank.is_empty() {
            info!(code = %ErrorCode::IncompleteForm, blank = ?blank, "Form rejected");
            self.messages.show_message(&self.settings.rejected_message);
            self.state = SubmissionState::Idle;
            return Ok(SubmissionOutcome::Rejected { blank });
        }

        let json = serializer::serialize(&form)?;
        info!(fields = FieldId::ALL.len(), "Form submitted");
        self.messages
            .show_message(&format!("{}{}", self.settings.submitted_prefix, json));
        self.state = SubmissionState::Submitted;
        Ok(SubmissionOutcome::Submitted { json })
    }

    /// Form as a submit right now would build it, read from the fields.
    pub fn current_form(&self) -> Form {
        Form::from_fields(|field| self.fields.read_text(field))
    }
}
