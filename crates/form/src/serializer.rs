//! JSON rendering of a [`Form`].

use crate::{Form, Result};

/// Pretty-printed JSON with keys `first, last, street, city, state, zip`.
///
/// Blank fields are written as-is; callers gate on
/// [`validator::is_complete`](crate::validator::is_complete).
pub fn serialize(form: &Form) -> Result<String> {
    Ok(serde_json::to_string_pretty(form)?)
}
