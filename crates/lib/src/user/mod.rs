//! Account records for the Zamanix storefront
//!
//! Defines the persisted user record shapes: the session projection, the
//! directory entry (the durable superset carrying the credential), and the
//! owned sub-records (addresses, events, orders).

pub mod errors;
pub mod types;

pub use errors::UserError;
pub use types::*;
