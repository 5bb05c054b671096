use serde::Serialize;
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every failing field of one validation pass, in schema order.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Returns the message for `field`, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
