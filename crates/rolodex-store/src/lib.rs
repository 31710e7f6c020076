//! # Rolodex Store
//!
//! In-memory contact repository: create, list, get, update, and delete
//! [`Contact`](rolodex_model::Contact) records behind a read-write lock.
//!
//! Identifiers are assigned sequentially on create and never change. The
//! store validates inputs through the model crate, so the non-empty-name
//! invariant holds for every record it hands out.
//!
//! # Example
//!
//! ```rust
//! use rolodex_model::ContactInput;
//! use rolodex_store::ContactStore;
//!
//! let store = ContactStore::new();
//! let contact = store.create(ContactInput::named("Ada Lovelace")).unwrap();
//!
//! assert_eq!(store.get(contact.id).unwrap().name, "Ada Lovelace");
//! assert_eq!(store.list().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod memory;

pub use error::StoreError;
pub use memory::ContactStore;
