//!
//! Zamanix Account: client-side account, session, and rewards state for the
//! Zamanix storefront.
//!
//! The library is a synchronous state container scoped to a single front-end
//! instance. It holds the active user session in memory, mirrors it into a
//! durable key-value slot, and keeps a directory of every registered account
//! as the system of record.
//!
//! ## Core Concepts
//!
//! * **Storage (`storage::Storage`)**: A pluggable string key-value layer used
//!   for the two persisted records, the session slot and the account directory.
//! * **SessionStore (`session::SessionStore`)**: The main entry point. Exposes
//!   login/signup/logout, the loyalty-coin balance with daily-login streaks,
//!   address book management, and the personal events list. Every mutation
//!   republishes the session and mirrors the touched fields into the directory.
//! * **Directory (`session::Directory`)**: Repository over the `users` storage
//!   slot, mapping email addresses to full account records (credentials
//!   included).
//! * **Clock (`clock::Clock`)**: Time source abstraction so streak logic and
//!   timestamp-derived ids are controllable in tests.

pub mod clock;
pub mod constants;
pub mod session;
pub mod storage;
pub mod user;

pub use clock::{Clock, FixedClock, SystemClock};
pub use session::{Directory, SessionStore};
pub use storage::{InMemoryStorage, Storage};
pub use user::{Address, DirectoryEntry, Event, Order, Recurrence, SignupMethod, User};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured storage errors from the storage module
    #[error(transparent)]
    Storage(storage::StorageError),

    /// Structured account record errors from the user module
    #[error(transparent)]
    User(user::UserError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Storage(_) => "storage",
            Error::User(_) => "user",
        }
    }

    /// Check if this error indicates a corrupt persisted record.
    ///
    /// Corrupt records are fatal: the store assumes full control over its own
    /// storage keys and does not attempt recovery.
    pub fn is_corrupt(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_corrupt(),
            Error::Serialize(_) => true,
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Storage(storage_err) => storage_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is storage-related.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
