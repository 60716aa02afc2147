//! Configuration loading and schema definitions
//!
//! Settings for the geocoder, the map marker and the user-facing messages.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
