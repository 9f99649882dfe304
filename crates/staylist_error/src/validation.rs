//! Field-level validation errors.

use std::collections::BTreeMap;

/// Validation failure carrying a field-keyed error map.
///
/// Each key is a payload field name, each value the list of messages for
/// that field. The map serializes directly into the 400 response body.
///
/// # Examples
///
/// ```
/// use staylist_error::ValidationError;
///
/// let mut err = ValidationError::new();
/// err.push("name", "This field is required.");
/// assert!(!err.is_empty());
/// assert_eq!(err.errors["name"], vec!["This field is required."]);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} invalid field(s) at line {} in {}", errors.len(), line, file)]
pub struct ValidationError {
    /// Map of field name to error messages for that field
    pub errors: BTreeMap<String, Vec<String>>,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create an empty validation error at the current location.
    #[track_caller]
    pub fn new() -> Self {
        let location = std::panic::Location::caller();
        Self {
            errors: BTreeMap::new(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a validation error with a single field message.
    #[track_caller]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    /// Create the standard "required" failure for a missing field.
    #[track_caller]
    pub fn required(field: impl Into<String>) -> Self {
        Self::single(field, "This field is required.")
    }

    /// Record a message against a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Whether any field has accumulated a message.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert accumulated messages into a `Result`, `Ok` when clean.
    pub fn finish(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}
