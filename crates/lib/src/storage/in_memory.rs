//! In-memory storage with optional JSON file persistence.

use std::any::Any;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Storage, StorageError};
use crate::Result;

/// A simple in-memory storage implementation using a `HashMap`.
///
/// This is the standard backing for the session store: it mirrors the
/// browser-local storage of the original deployment, holding whole JSON
/// values under string keys. It is suitable for testing, development, or
/// scenarios where durability is handled externally by saving/loading the
/// entire state to/from a file.
///
/// It provides basic persistence via [`save_to_file`](Self::save_to_file) and
/// [`load_from_file`](Self::load_from_file), serializing the map to JSON.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// Key-value pairs with a read-write lock for shared access
    values: RwLock<HashMap<String, String>>,
}

impl Serialize for InMemoryStorage {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.read().unwrap().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InMemoryStorage {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = HashMap::deserialize(deserializer)?;
        Ok(InMemoryStorage {
            values: RwLock::new(values),
        })
    }
}

impl InMemoryStorage {
    /// Creates a new, empty `InMemoryStorage`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the entire storage state to a specified file as JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|source| StorageError::StateSerialization { source })?;
        fs::write(path, json).map_err(|source| StorageError::FileIo { source })?;
        Ok(())
    }

    /// Loads storage state from a specified JSON file.
    ///
    /// If the file does not exist, a new, empty `InMemoryStorage` is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::new());
        }

        let json =
            fs::read_to_string(path).map_err(|source| StorageError::FileIo { source })?;
        let storage: Self = serde_json::from_str(&json)
            .map_err(|source| StorageError::StateDeserialization { source })?;
        Ok(storage)
    }

    /// Returns a vector containing all keys currently stored.
    pub fn all_keys(&self) -> Vec<String> {
        self.values.read().unwrap().keys().cloned().collect()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.read().unwrap().is_empty()
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.write().unwrap().remove(key);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
