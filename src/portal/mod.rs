//! Operations behind each route: credentials, notices, complaints, feedback
//! and first-boot seeding.
//!
//! Every operation validates its input before touching the store and performs
//! at most one collection write. Role checks happen earlier, in the request
//! extractors, so these functions trust the identity they are handed.

pub mod accounts;
pub mod bootstrap;
pub mod complaints;
pub mod feedback;
pub mod notices;

use crate::error::{Error, Result};

/// Presence check for a form field: absent and empty are both missing.
pub(crate) fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingField(field)),
    }
}
