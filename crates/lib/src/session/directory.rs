//! Repository over the durable account directory.

use std::collections::HashMap;
use std::sync::Arc;

use crate::Result;
use crate::constants::DIRECTORY_KEY;
use crate::storage::Storage;
use crate::user::{DirectoryEntry, UserError};

/// Access to the `users` storage record: the mapping from email address to
/// full account entry.
///
/// The directory is read and written as a whole, matching the storage model
/// of a single JSON blob. A missing record reads as an empty directory; a
/// record that fails to decode is a fatal error, not something to repair.
#[derive(Clone)]
pub struct Directory {
    storage: Arc<dyn Storage>,
}

impl Directory {
    /// Create a repository over the given storage.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Load the full directory. Absent record yields an empty map.
    pub fn load(&self) -> Result<HashMap<String, DirectoryEntry>> {
        match self.storage.get(DIRECTORY_KEY)? {
            None => Ok(HashMap::new()),
            Some(json) => serde_json::from_str(&json)
                .map_err(|source| UserError::CorruptDirectory { source }.into()),
        }
    }

    /// Write the full directory back to storage.
    pub fn save(&self, directory: &HashMap<String, DirectoryEntry>) -> Result<()> {
        let json = serde_json::to_string(directory)?;
        self.storage.set(DIRECTORY_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DIRECTORY_KEY;
    use crate::storage::InMemoryStorage;

    #[test]
    fn missing_record_is_empty_directory() {
        let directory = Directory::new(Arc::new(InMemoryStorage::new()));
        assert!(directory.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let directory = Directory::new(Arc::new(InMemoryStorage::new()));
        let mut map = HashMap::new();
        let entry: DirectoryEntry = serde_json::from_str(
            r#"{"name":"Asha","email":"asha@example.com","password":"pw"}"#,
        )
        .unwrap();
        map.insert("asha@example.com".to_string(), entry);
        directory.save(&map).unwrap();

        let loaded = directory.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["asha@example.com"].password, "pw");
    }

    #[test]
    fn corrupt_record_is_fatal() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.set(DIRECTORY_KEY, "{not json").unwrap();
        let err = Directory::new(storage).load().unwrap_err();
        assert!(err.is_corrupt());
    }
}
