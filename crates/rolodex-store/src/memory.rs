//! In-memory contact storage.

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;

use rolodex_model::{Contact, ContactId, ContactInput};

use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    contacts: IndexMap<ContactId, Contact>,
    next_id: u64,
}

/// Thread-safe in-memory contact repository.
///
/// Records are kept in insertion order, which is also the order
/// [`list`](ContactStore::list) returns them in. All methods take `&self`;
/// the store can be shared across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct ContactStore {
    inner: RwLock<Inner>,
}

impl ContactStore {
    /// Creates an empty store. Identifier assignment starts at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the input, assigns the next identifier, and stores the
    /// new contact.
    pub fn create(&self, input: ContactInput) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write();
        let id = ContactId::new(inner.next_id + 1);

        let contact = Contact::from_input(id, input)?;
        inner.next_id += 1;
        inner.contacts.insert(id, contact.clone());

        debug!(contact_id = %id, name = %contact.name, "contact created");
        Ok(contact)
    }

    /// Returns all contacts in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Contact> {
        self.inner.read().contacts.values().cloned().collect()
    }

    /// Returns the contact with the given identifier.
    pub fn get(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.inner
            .read()
            .contacts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Replaces every field of an existing contact except its identifier.
    pub fn update(&self, id: ContactId, input: ContactInput) -> Result<Contact, StoreError> {
        input.validate()?;

        let mut inner = self.inner.write();
        let contact = inner
            .contacts
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        contact.name = input.name;
        contact.phone_number = input.phone_number;
        contact.email = input.email;

        let updated = contact.clone();
        debug!(contact_id = %id, "contact updated");
        Ok(updated)
    }

    /// Removes the contact with the given identifier.
    pub fn delete(&self, id: ContactId) -> Result<(), StoreError> {
        let removed = self.inner.write().contacts.shift_remove(&id);
        match removed {
            Some(_) => {
                debug!(contact_id = %id, "contact deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }

    /// Returns the number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().contacts.len()
    }

    /// Returns true if the store holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().contacts.is_empty()
    }
}
