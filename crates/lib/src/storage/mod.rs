//! Storage layer for the account state
//!
//! This module provides the [`Storage`] trait and its implementations. The
//! trait models the durable medium the original front-end ran against: a
//! synchronous, string-keyed key-value mapping with whole-value reads and
//! writes, no transactions, and immediate visibility.
//!
//! The session store only ever touches two keys (the session slot and the
//! account directory), but the trait is deliberately narrow so the medium can
//! be swapped without touching session logic.

use std::any::Any;

use crate::Result;

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::InMemoryStorage;

/// Storage trait abstracting the durable key-value medium.
///
/// Values are opaque strings; callers own serialization. Reads and writes are
/// synchronous and assumed to always succeed against a healthy medium, so the
/// error surface is limited to I/O-level failures of a concrete backend.
///
/// All implementations must be `Send` and `Sync` to allow sharing across
/// threads, and implement `Any` to allow for downcasting if needed.
pub trait Storage: Send + Sync + Any {
    /// Retrieves the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` and its value. Succeeds even if the key is absent.
    fn remove(&self, key: &str) -> Result<()>;

    /// Returns a reference to the storage instance as a dynamic `Any` type.
    ///
    /// This allows for downcasting to a concrete implementation if necessary,
    /// enabling access to implementation-specific methods such as file
    /// persistence. Use with caution.
    fn as_any(&self) -> &dyn Any;
}
