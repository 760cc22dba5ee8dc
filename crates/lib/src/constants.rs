//! Constants used throughout the account library.
//!
//! This module provides central definitions for the persisted storage keys and
//! the fixed values baked into the account system.

/// Storage key holding the active session's user record.
pub const SESSION_KEY: &str = "currentUser";

/// Storage key holding the account directory (email -> full record).
pub const DIRECTORY_KEY: &str = "users";

/// Coins granted to every new account, and to the synthesized admin session.
pub const INITIAL_COINS: i64 = 10;

/// Fixed administrator login. The admin identity bypasses the directory
/// entirely; no directory entry is created or required for it.
pub const ADMIN_EMAIL: &str = "admin@zamanix.com";

/// Fixed administrator password.
pub const ADMIN_PASSWORD: &str = "zamanix_admin";

/// Display name for the synthesized admin session.
pub const ADMIN_NAME: &str = "Admin";

/// Milliseconds in one calendar day, used by the login-time streak check.
pub const DAY_MS: u64 = 86_400_000;
