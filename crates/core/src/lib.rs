//! Core utilities for geoform
//!
//! This crate provides shared functionality used by the geocoding and form crates:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//! - **Validation**: Fluent field validation with per-field reports
//!
//! # Example
//!
//! ```rust
//! use geoform_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("first", "Ada")
//!     .required("last", "   ")
//!     .validate();
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].field, "last");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result};

