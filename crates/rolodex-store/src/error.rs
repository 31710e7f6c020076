//! Store error types.

use rolodex_model::{ContactId, ModelError};
use thiserror::Error;

/// Errors produced by contact store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No contact exists with the given identifier.
    #[error("contact with ID '{id}' not found")]
    NotFound {
        /// The identifier that was looked up.
        id: ContactId,
    },

    /// The input payload failed model validation.
    #[error("invalid contact input")]
    Invalid(#[from] ModelError),
}

impl StoreError {
    /// Creates a not-found error for the given identifier.
    #[must_use]
    pub fn not_found(id: ContactId) -> Self {
        Self::NotFound { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found(ContactId::new(42));
        assert_eq!(err.to_string(), "contact with ID '42' not found");
    }
}
