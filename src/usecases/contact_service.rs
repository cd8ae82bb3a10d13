//! Contact store operations: list and append.
//!
//! Append is load -> push -> rewrite whole document. No dedup, no trimming.

use super::load_report::report;
use crate::domain::{Contact, DomainError, LoadOutcome};
use crate::ports::ContactStorePort;
use std::sync::Arc;
use tracing::info;

pub struct ContactService {
    store: Arc<dyn ContactStorePort>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStorePort>) -> Self {
        Self { store }
    }

    /// All contacts in insertion order. Empty when the store is absent or unreadable.
    pub async fn load_contacts(&self) -> Vec<Contact> {
        let outcome = self.store.load().await;
        report("contacts.json", &outcome);
        outcome.or_default().friends
    }

    /// Append a contact exactly as given and persist the whole list.
    ///
    /// # Errors
    /// `DomainError::Store` if the document cannot be written, or if it is valid JSON
    /// of an unexpected shape (rewriting it would drop data).
    pub async fn add_contact(&self, name: &str, id: &str, ip: &str) -> Result<Contact, DomainError> {
        let outcome = self.store.load().await;
        report("contacts.json", &outcome);
        // Non-JSON content is replaced by a fresh document holding only the new contact.
        let mut book = match outcome {
            LoadOutcome::Mismatch(detail) => {
                return Err(DomainError::Store(format!(
                    "contacts.json left untouched, unexpected content: {}",
                    detail
                )));
            }
            other => other.or_default(),
        };

        let contact = Contact::new(name, id, ip);
        book.friends.push(contact.clone());
        self.store.save(&book).await?;

        info!(
            id = %contact.id,
            count = book.friends.len(),
            "contact added"
        );
        Ok(contact)
    }
}
