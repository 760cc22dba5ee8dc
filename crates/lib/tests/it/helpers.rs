use std::sync::Arc;

use zamanix_account::user::SignupData;
use zamanix_account::{FixedClock, InMemoryStorage, SessionStore};

/// 2024-01-01 12:00:00 UTC, a midday anchor for streak scenarios.
pub const DAY1_NOON: u64 = 1_704_110_400_000;

/// Test fixture bundling the store with its shared storage and clock.
pub struct TestStore {
    pub store: SessionStore,
    pub storage: Arc<InMemoryStorage>,
    pub clock: Arc<FixedClock>,
}

/// Creates a session store over fresh in-memory storage and a fixed clock.
pub fn test_store() -> TestStore {
    let storage = Arc::new(InMemoryStorage::new());
    let clock = Arc::new(FixedClock::new(DAY1_NOON));
    let store = SessionStore::open(storage.clone(), clock.clone()).unwrap();
    TestStore {
        store,
        storage,
        clock,
    }
}

/// Reopens a store over existing storage, sharing the fixture's clock.
pub fn reopen(fixture: &TestStore) -> SessionStore {
    SessionStore::open(fixture.storage.clone(), fixture.clock.clone()).unwrap()
}

/// Standard signup payload for a test account.
pub fn signup_data(email: &str) -> SignupData {
    SignupData {
        name: "Asha".to_string(),
        email: email.to_string(),
        password: "watchword".to_string(),
        phone: "9876543210".to_string(),
    }
}
