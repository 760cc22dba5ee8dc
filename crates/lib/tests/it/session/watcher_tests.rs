//! Watcher notification behavior.

use std::sync::{Arc, Mutex};

use zamanix_account::session::WatcherId;
use zamanix_account::{FixedClock, InMemoryStorage, SessionStore};

use crate::helpers::{DAY1_NOON, signup_data, test_store};

#[test]
fn watchers_observe_every_publish_including_logout() {
    let f = test_store();
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = seen.clone();
    f.store.subscribe(Box::new(move |user| {
        sink.lock()
            .unwrap()
            .push(user.map(|u| u.email.clone()));
    }));

    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());
    f.store.add_coins(1).unwrap();
    f.store.logout().unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            Some("asha@example.com".to_string()),
            Some("asha@example.com".to_string()),
            None,
        ]
    );
}

#[test]
fn unsubscribed_watchers_stop_receiving_updates() {
    let f = test_store();
    let count = Arc::new(Mutex::new(0usize));

    let sink = count.clone();
    let id = f.store.subscribe(Box::new(move |_| {
        *sink.lock().unwrap() += 1;
    }));

    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());
    assert_eq!(*count.lock().unwrap(), 1);

    f.store.unsubscribe(id);
    f.store.add_coins(1).unwrap();
    f.store.logout().unwrap();
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn watcher_may_unsubscribe_itself_during_notification() {
    let storage = Arc::new(InMemoryStorage::new());
    let clock = Arc::new(FixedClock::new(DAY1_NOON));
    let store = Arc::new(SessionStore::open(storage, clock).unwrap());

    let count = Arc::new(Mutex::new(0usize));
    let slot: Arc<Mutex<Option<WatcherId>>> = Arc::new(Mutex::new(None));

    let sink = count.clone();
    let slot_in = slot.clone();
    let store_in = store.clone();
    let id = store.subscribe(Box::new(move |_| {
        *sink.lock().unwrap() += 1;
        if let Some(id) = slot_in.lock().unwrap().take() {
            store_in.unsubscribe(id);
        }
    }));
    *slot.lock().unwrap() = Some(id);

    // The first publish must return despite the in-callback unsubscribe
    assert!(store.signup(signup_data("asha@example.com")).unwrap());
    assert_eq!(*count.lock().unwrap(), 1);

    // The self-removal took effect for every later publish
    store.logout().unwrap();
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn failed_login_publishes_nothing() {
    let f = test_store();
    let count = Arc::new(Mutex::new(0usize));

    let sink = count.clone();
    f.store.subscribe(Box::new(move |_| {
        *sink.lock().unwrap() += 1;
    }));

    assert!(!f.store.login("nobody@example.com", "x").unwrap());
    assert_eq!(*count.lock().unwrap(), 0);
}
