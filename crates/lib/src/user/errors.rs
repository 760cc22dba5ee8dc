//! Error types for account records
use thiserror::Error;

/// Errors raised when persisted account records cannot be decoded.
///
/// The store assumes full control over its own storage keys; a record that
/// fails to decode is a fatal condition, not a recoverable one.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Corrupt session record in storage: {source}")]
    CorruptSession {
        #[source]
        source: serde_json::Error,
    },

    #[error("Corrupt account directory in storage: {source}")]
    CorruptDirectory {
        #[source]
        source: serde_json::Error,
    },
}

impl UserError {
    /// Check if this error indicates a corrupt persisted record.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            UserError::CorruptSession { .. } | UserError::CorruptDirectory { .. }
        )
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
