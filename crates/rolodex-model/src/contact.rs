//! Contact record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{FieldErrors, ModelError};

/// Numeric contact identifier.
///
/// Assigned by the store when a contact is created and immutable
/// afterwards. Serializes as a bare number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ContactId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for ContactId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A persisted contact.
///
/// Always carries a non-empty `name`; `phone_number` and `email` are
/// optional and omitted from serialized output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier assigned by the owning store.
    pub id: ContactId,
    /// Display name; never empty.
    pub name: String,
    /// Phone number, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Email address, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// Builds a contact from a validated input payload and an assigned
    /// identifier.
    pub fn from_input(id: ContactId, input: ContactInput) -> Result<Self, ModelError> {
        input.validate()?;
        Ok(Self {
            id,
            name: input.name,
            phone_number: input.phone_number,
            email: input.email,
        })
    }
}

/// Payload for creating or updating a contact.
///
/// Carries no identifier: one has not been assigned yet on create, and on
/// update the identifier is addressed separately and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    /// Display name; must not be empty.
    pub name: String,
    /// Phone number, free-form.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_number: Option<String>,
    /// Email address, free-form.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
}

impl ContactInput {
    /// Creates an input with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks the payload against the contact invariants.
    ///
    /// `name` must contain at least one non-whitespace character. Phone
    /// and email formats are deliberately not checked here.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut field_errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            field_errors.add("name", "must not be empty");
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(ModelError::validation("invalid contact data", field_errors))
        }
    }
}
