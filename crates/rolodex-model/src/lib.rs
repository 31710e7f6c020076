//! # Rolodex Model
//!
//! Contact record types shared across the Rolodex crates:
//!
//! - [`Contact`] - a persisted contact with its assigned identifier
//! - [`ContactInput`] - the payload for creating or updating a contact
//! - [`ContactId`] - numeric contact identifier
//! - [`ModelError`] - validation errors with field-level detail
//!
//! The one invariant enforced here is that a contact's `name` is never
//! empty; identifier assignment belongs to whatever store owns the data.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contact;
mod error;

pub use contact::{Contact, ContactId, ContactInput};
pub use error::{FieldErrors, ModelError};
