//! Validation error types for contact records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced when validating contact data.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The payload failed validation.
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable summary.
        message: String,
        /// Field-specific validation errors.
        #[source]
        field_errors: FieldErrors,
    },
}

impl ModelError {
    /// Creates a validation error from accumulated field errors.
    #[must_use]
    pub fn validation(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors,
        }
    }
}

/// Field-specific validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Error)]
#[error("field validation errors")]
pub struct FieldErrors {
    /// Map of field name to list of error messages.
    pub fields: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates a new empty `FieldErrors`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` if there are no field errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        errors.add("name", "must not be empty");
        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 1);

        errors.add("name", "too long");
        assert_eq!(errors.fields["name"].len(), 2);
    }

    #[test]
    fn test_validation_error_display() {
        let mut errors = FieldErrors::new();
        errors.add("name", "must not be empty");

        let err = ModelError::validation("invalid contact", errors);
        assert!(err.to_string().contains("invalid contact"));
    }
}
