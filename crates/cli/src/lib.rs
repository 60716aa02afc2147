//! CLI utilities for geoform hosts
//!
//! Provides glyph-prefixed status messages for terminal hosts.

#![warn(missing_docs)]

pub mod output;
