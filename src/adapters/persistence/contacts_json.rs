//! Implements ContactStorePort using `contacts.json`.
//!
//! Document shape: `{"friends": [{"name", "id", "ip"}, ...]}`. Always rewritten whole.

use super::json_doc::{read_document, write_document};
use crate::domain::{ContactBook, DomainError, LoadOutcome};
use crate::ports::ContactStorePort;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON file-based contact store.
pub struct ContactsJson {
    path: PathBuf,
}

impl ContactsJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ContactStorePort for ContactsJson {
    async fn load(&self) -> LoadOutcome<ContactBook> {
        read_document(&self.path).await
    }

    async fn save(&self, book: &ContactBook) -> Result<(), DomainError> {
        write_document(&self.path, book)
            .await
            .map_err(|e| DomainError::Store(format!("{}: {}", self.path.display(), e)))?;
        debug!(
            path = %self.path.display(),
            count = book.friends.len(),
            "contacts saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactsJson::new(dir.path().join("contacts.json"));
        assert_eq!(store.load().await, LoadOutcome::Absent);

        let book = ContactBook {
            friends: vec![Contact::new("Mari", "id-9", "10.0.0.5")],
            ..Default::default()
        };
        store.save(&book).await.unwrap();
        assert_eq!(store.load().await, LoadOutcome::Loaded(book));
    }

    #[tokio::test]
    async fn test_unknown_top_level_keys_survive_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, r#"{"friends":[],"version":2}"#).unwrap();

        let store = ContactsJson::new(&path);
        let mut book = store.load().await.or_default();
        book.friends.push(Contact::new("Jaan", "id-1", "10.0.0.1"));
        store.save(&book).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 2);
        assert_eq!(raw["friends"][0]["name"], "Jaan");
    }

    #[tokio::test]
    async fn test_save_into_file_path_fails_with_store_error() {
        let dir = tempfile::tempdir().unwrap();
        // Parent "directory" is a regular file, so create_dir_all cannot succeed.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = ContactsJson::new(blocker.join("contacts.json"));

        let err = store.save(&ContactBook::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Store(_)));
    }
}
