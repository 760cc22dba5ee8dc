//! Error types for the storage module
use thiserror::Error;

/// Errors that can occur in storage implementations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error: {source}")]
    FileIo {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize storage state: {source}")]
    StateSerialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize storage state: {source}")]
    StateDeserialization {
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StorageError::FileIo { .. })
    }

    /// Check if this error came from persisting or restoring storage state.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            StorageError::StateSerialization { .. } | StorageError::StateDeserialization { .. }
        )
    }
}

impl From<StorageError> for crate::Error {
    fn from(err: StorageError) -> Self {
        crate::Error::Storage(err)
    }
}
