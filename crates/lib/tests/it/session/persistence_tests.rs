//! Session hydration and storage persistence.

use std::sync::Arc;

use zamanix_account::{FixedClock, InMemoryStorage, SessionStore, Storage};

use crate::helpers::{DAY1_NOON, reopen, signup_data, test_store};

#[test]
fn session_survives_store_reopen() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());
    f.store.add_coins(4).unwrap();

    let reopened = reopen(&f);
    let user = reopened.current().unwrap();
    assert_eq!(user.email, "asha@example.com");
    assert_eq!(user.coins, 14);
    // The signup-produced session keeps the password through hydration
    assert_eq!(user.password.as_deref(), Some("watchword"));
}

#[test]
fn logout_clears_the_persisted_slot() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());
    f.store.logout().unwrap();

    let reopened = reopen(&f);
    assert!(reopened.current().is_none());
}

#[test]
fn full_state_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("account.json");

    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());
    f.store.add_coins(8).unwrap();
    f.storage.save_to_file(&path).unwrap();

    let storage = Arc::new(InMemoryStorage::load_from_file(&path).unwrap());
    let clock = Arc::new(FixedClock::new(DAY1_NOON));
    let store = SessionStore::open(storage, clock).unwrap();

    assert!(store.logout().is_ok());
    assert!(store.login("asha@example.com", "watchword").unwrap());
    assert_eq!(store.current().unwrap().coins, 18);
}

#[test]
fn corrupt_session_slot_is_fatal_on_open() {
    let storage = Arc::new(InMemoryStorage::new());
    storage.set("currentUser", "{oops").unwrap();
    let clock = Arc::new(FixedClock::new(DAY1_NOON));

    let err = SessionStore::open(storage, clock).unwrap_err();
    assert!(err.is_corrupt());
    assert_eq!(err.module(), "user");
}

#[test]
fn stored_session_json_uses_the_historical_shape() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());

    let raw = f.storage.get("currentUser").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["email"], "asha@example.com");
    assert_eq!(json["signupMethod"], "manual");
    assert_eq!(json["loginStreak"], 1);
    assert!(json["lastLoginDate"].is_string());
    assert!(json["addresses"].is_array());

    let raw = f.storage.get("users").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["asha@example.com"]["password"], "watchword");
}
