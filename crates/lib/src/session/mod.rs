//! Session state for the storefront
//!
//! The [`SessionStore`] owns the active user session and every mutation the
//! presentation layer can trigger: authentication, the loyalty-coin balance
//! with daily-login streaks, the address book, and the personal events list.
//! Each mutation republishes the session into its storage slot and mirrors
//! the touched fields into the account directory.
//!
//! The [`Directory`] is the repository over the durable `users` record, the
//! system of record across sessions.

mod directory;
mod store;


pub use directory::Directory;
pub use store::{SessionStore, Watcher, WatcherId};
