//! Core data types for account records
//!
//! All persisted records serialize with camelCase field names so the stored
//! JSON matches the shape the storefront has always written. Email is the
//! natural key across the directory; no two entries share one.

use serde::{Deserialize, Serialize};

/// A saved delivery address.
///
/// No invariant enforces that exactly one address is the default; zero or
/// several defaults are representable states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique within a user, derived from the creation timestamp
    pub id: String,
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
}

/// Address submission, before an id has been assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
}

impl NewAddress {
    /// Attach the assigned id, producing a full [`Address`].
    pub fn with_id(self, id: impl Into<String>) -> Address {
        Address {
            id: id.into(),
            name: self.name,
            phone: self.phone,
            street: self.street,
            city: self.city,
            state: self.state,
            pincode: self.pincode,
            is_default: self.is_default,
        }
    }
}

/// How often a saved event repeats. Stored but not otherwise interpreted;
/// recurrence expansion happens elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    Once,
    Weekly,
    Monthly,
    Yearly,
}

/// A personal reminder (birthday, anniversary, and the like).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique within a user, derived from the creation timestamp
    pub id: String,
    pub date: String,
    pub occasion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub recurrence: Recurrence,
}

/// Event submission, before an id has been assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub date: String,
    pub occasion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub recurrence: Recurrence,
}

impl NewEvent {
    /// Attach the assigned id, producing a full [`Event`].
    pub fn with_id(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            date: self.date,
            occasion: self.occasion,
            name: self.name,
            notes: self.notes,
            recurrence: self.recurrence,
        }
    }
}

/// Partial event update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl EventPatch {
    /// Shallow-merge this patch into `event`.
    pub fn apply(&self, event: &mut Event) {
        if let Some(date) = &self.date {
            event.date = date.clone();
        }
        if let Some(occasion) = &self.occasion {
            event.occasion = occasion.clone();
        }
        if let Some(name) = &self.name {
            event.name = Some(name.clone());
        }
        if let Some(notes) = &self.notes {
            event.notes = Some(notes.clone());
        }
        if let Some(recurrence) = self.recurrence {
            event.recurrence = recurrence;
        }
    }
}

/// A past order. Carried through account records unchanged; this component
/// never creates or mutates one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    pub total: f64,
    pub status: String,
}

/// How the account was created. Only manual signup exists today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignupMethod {
    #[default]
    Manual,
}

/// The active session's user record.
///
/// This is a projection of the directory entry for the logged-in account.
/// Login-produced sessions carry no password; signup-produced sessions keep
/// the submitted password in the record, and that asymmetry is part of the
/// persisted contract rather than something to normalize away.
///
/// `events` distinguishes an absent list from an empty one: event operations
/// are no-ops when the list is absent, but work normally when it is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub last_login_date: String,
    #[serde(default)]
    pub login_streak: u32,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub signup_method: SignupMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A stored account: the durable superset of [`User`] that also retains the
/// plaintext credential. The directory maps email to one of these; entries
/// are created once at signup and never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub last_login_date: String,
    #[serde(default)]
    pub login_streak: u32,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub signup_method: SignupMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

impl DirectoryEntry {
    /// Merge a published session record back into this entry, keeping the
    /// stored password. This is the write-back half of every mirroring step
    /// that replaces the whole entry.
    pub fn absorb(&mut self, user: &User) {
        let password = self.password.clone();
        *self = DirectoryEntry {
            name: user.name.clone(),
            email: user.email.clone(),
            password,
            coins: user.coins,
            last_login_date: user.last_login_date.clone(),
            login_streak: user.login_streak,
            addresses: user.addresses.clone(),
            orders: user.orders.clone(),
            phone: user.phone.clone(),
            signup_method: user.signup_method,
            events: user.events.clone(),
        };
    }
}

/// Signup submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Partial user update for `update_user_details`. `None` fields are left
/// untouched; any present field overwrites the session value, including
/// `email` (which does not re-key the directory).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_streak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

impl UserPatch {
    /// Shallow-merge this patch into `user`.
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(coins) = self.coins {
            user.coins = coins;
        }
        if let Some(date) = &self.last_login_date {
            user.last_login_date = date.clone();
        }
        if let Some(streak) = self.login_streak {
            user.login_streak = streak;
        }
        if let Some(addresses) = &self.addresses {
            user.addresses = addresses.clone();
        }
        if let Some(orders) = &self.orders {
            user.orders = orders.clone();
        }
        if let Some(events) = &self.events {
            user.events = Some(events.clone());
        }
    }
}
