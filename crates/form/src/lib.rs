//! Location-prefilled contact form.
//!
//! A location fix is reverse-geocoded, the resulting address pre-fills the
//! street, city, state and zip fields, and a submit trigger builds a [`Form`],
//! checks every field is non-blank and reports the pretty-printed JSON.
//!
//! - [`builder`]: name fields plus an optional address into a [`Form`]
//! - [`validator`]: all-fields-non-blank check
//! - [`serializer`]: pretty JSON with a fixed key order
//! - [`controller`]: location fix and submit handling
//! - [`events`]: single-threaded event loop feeding the controller
//!
//! # Example
//!
//! ```
//! use geoform_form::{builder, serializer, validator};
//! use geoform_geo::AddressCandidate;
//!
//! let address = AddressCandidate {
//!     sub_thoroughfare: Some("1600".into()),
//!     thoroughfare: Some("Amphitheatre Pkwy".into()),
//!     locality: Some("Mountain View".into()),
//!     admin_area: Some("CA".into()),
//!     postal_code: Some("94043".into()),
//!     ..Default::default()
//! };
//!
//! let form = builder::build("Ada", "Lovelace", Some(&address));
//! assert!(validator::is_complete(&form));
//! assert!(serializer::serialize(&form).unwrap().contains("\"street\": \"1600 Amphitheatre Pkwy\""));
//! ```

pub mod builder;
pub mod controller;
mod error;
pub mod events;
mod form;
pub mod serializer;
pub mod validator;

pub use controller::{
    FieldSource, MapMarker, MemoryFields, MessageSink, SubmissionController, SubmissionOutcome,
    SubmissionSettings, SubmissionState,
};
pub use error::{FormError, Result};
pub use events::{Event, EventSender};
pub use form::{FieldId, Form};
