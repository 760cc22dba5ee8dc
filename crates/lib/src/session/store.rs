//! The session store and its mutation operations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::Result;
use crate::clock::Clock;
use crate::constants::{
    ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD, DAY_MS, INITIAL_COINS, SESSION_KEY,
};
use crate::storage::Storage;
use crate::user::{
    EventPatch, NewAddress, NewEvent, SignupData, SignupMethod, User, UserError, UserPatch,
};

use super::Directory;

/// Callback invoked with the new session value after every publish.
pub type Watcher = Box<dyn Fn(Option<&User>) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatcherId(usize);

/// The session store: the single component holding client-side account state.
///
/// Holds the active user session in memory, mirrors it into the session
/// storage slot on every change (clearing the slot on logout), and writes the
/// relevant fields of each mutation back into the account [`Directory`].
///
/// Every mutation silently no-ops when there is no active session; that is
/// the only failure mode besides the boolean results of [`login`] and
/// [`signup`] and propagated storage errors.
///
/// [`login`]: SessionStore::login
/// [`signup`]: SessionStore::signup
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    directory: Directory,
    current: RwLock<Option<User>>,
    watchers: RwLock<Vec<(usize, Arc<Watcher>)>>,
    next_watcher: AtomicUsize,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current.read().unwrap())
            .field("watchers", &self.watchers.read().unwrap().len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open the store over the given storage and clock.
    ///
    /// Hydrates the session from the session slot if one is persisted. A
    /// session record that fails to decode is a fatal initialization error:
    /// the store assumes full control over its own keys and expects no
    /// foreign or corrupted input there.
    pub fn open(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Result<Self> {
        let current = match storage.get(SESSION_KEY)? {
            None => None,
            Some(json) => Some(
                serde_json::from_str(&json)
                    .map_err(|source| UserError::CorruptSession { source })?,
            ),
        };
        Ok(Self {
            directory: Directory::new(storage.clone()),
            storage,
            clock,
            current: RwLock::new(current),
            watchers: RwLock::new(Vec::new()),
            next_watcher: AtomicUsize::new(0),
        })
    }

    /// The active session's user record, if any.
    pub fn current(&self) -> Option<User> {
        self.current.read().unwrap().clone()
    }

    /// Replace the session value directly, bypassing all account logic.
    ///
    /// Exposed for the presentation layer, which historically had raw access
    /// to the session setter. Publishes and persists like any mutation.
    pub fn replace(&self, next: Option<User>) -> Result<()> {
        self.publish(next)
    }

    /// Register a watcher invoked after every publish, including the clear
    /// on logout. Watchers may subscribe, unsubscribe, or mutate the store
    /// from inside the callback.
    pub fn subscribe(&self, watcher: Watcher) -> WatcherId {
        let id = self.next_watcher.fetch_add(1, Ordering::Relaxed);
        self.watchers.write().unwrap().push((id, Arc::new(watcher)));
        WatcherId(id)
    }

    /// Remove a previously registered watcher. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: WatcherId) {
        self.watchers.write().unwrap().retain(|(wid, _)| *wid != id.0);
    }

    /// Authenticate against the directory, or the fixed admin credential
    /// pair. Returns `false` on unknown email or password mismatch, leaving
    /// the current session untouched.
    ///
    /// On success the published record carries today's date and the updated
    /// streak, with the password stripped; all published fields are merged
    /// back into the directory entry, preserving the stored password. Login
    /// itself never awards coins.
    pub fn login(&self, email: &str, password: &str) -> Result<bool> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            // The admin identity bypasses the directory entirely; nothing is
            // created or persisted for it.
            let admin = User {
                name: ADMIN_NAME.to_string(),
                email: ADMIN_EMAIL.to_string(),
                coins: INITIAL_COINS,
                last_login_date: self.clock.today().to_string(),
                login_streak: 1,
                addresses: Vec::new(),
                orders: Vec::new(),
                phone: None,
                signup_method: SignupMethod::Manual,
                events: Some(Vec::new()),
                password: None,
            };
            tracing::info!("admin login");
            self.publish(Some(admin))?;
            return Ok(true);
        }

        let mut directory = self.directory.load()?;
        let Some(entry) = directory.get_mut(email) else {
            tracing::debug!("login rejected for {email}: not registered");
            return Ok(false);
        };
        if entry.password != password {
            tracing::debug!("login rejected for {email}: password mismatch");
            return Ok(false);
        }

        let today = self.clock.today().to_string();
        // The streak check compares against the calendar date 24 hours
        // before the evaluation instant, not against `today` minus one day.
        // The daily check in `check_daily_login` computes its own notion of
        // yesterday; the two are intentionally not shared.
        let yesterday = self
            .clock
            .date_of(self.clock.now_millis().saturating_sub(DAY_MS))
            .to_string();
        let was_yesterday = entry.last_login_date == yesterday;
        let streak_base = if entry.login_streak != 0 {
            entry.login_streak
        } else {
            1
        };

        let user = User {
            name: entry.name.clone(),
            email: entry.email.clone(),
            phone: entry.phone.clone(),
            // A zero balance reads as the initial grant, as it always has.
            coins: if entry.coins != 0 {
                entry.coins
            } else {
                INITIAL_COINS
            },
            last_login_date: today,
            login_streak: if was_yesterday { streak_base + 1 } else { 1 },
            addresses: entry.addresses.clone(),
            orders: entry.orders.clone(),
            signup_method: SignupMethod::Manual,
            events: Some(entry.events.clone().unwrap_or_default()),
            password: None,
        };

        entry.absorb(&user);
        self.directory.save(&directory)?;
        tracing::info!("login for {email} (streak {})", user.login_streak);
        self.publish(Some(user))?;
        Ok(true)
    }

    /// Register a new account. Returns `false` if the email is already in
    /// the directory, leaving the existing entry untouched.
    ///
    /// The new entry receives the initial coin grant, a streak of one, and
    /// today's date. The published session keeps the submitted password in
    /// the record; only login-produced sessions strip it.
    pub fn signup(&self, data: SignupData) -> Result<bool> {
        let mut directory = self.directory.load()?;
        if directory.contains_key(&data.email) {
            tracing::debug!("signup rejected for {}: already registered", data.email);
            return Ok(false);
        }

        let user = User {
            name: data.name,
            email: data.email.clone(),
            coins: INITIAL_COINS,
            last_login_date: self.clock.today().to_string(),
            login_streak: 1,
            addresses: Vec::new(),
            orders: Vec::new(),
            phone: Some(data.phone),
            signup_method: SignupMethod::Manual,
            events: Some(Vec::new()),
            password: Some(data.password.clone()),
        };

        let entry = crate::user::DirectoryEntry {
            name: user.name.clone(),
            email: user.email.clone(),
            password: data.password,
            coins: user.coins,
            last_login_date: user.last_login_date.clone(),
            login_streak: user.login_streak,
            addresses: Vec::new(),
            orders: Vec::new(),
            phone: user.phone.clone(),
            signup_method: SignupMethod::Manual,
            events: Some(Vec::new()),
        };
        directory.insert(data.email.clone(), entry);
        self.directory.save(&directory)?;
        tracing::info!("signup for {}", data.email);
        self.publish(Some(user))?;
        Ok(true)
    }

    /// Clear the active session. The session slot is removed and watchers
    /// are notified with the absent value.
    pub fn logout(&self) -> Result<()> {
        tracing::info!("logout");
        self.publish(None)
    }

    /// Adjust the loyalty-coin balance by `amount` (negative amounts are
    /// allowed; no floor is enforced). The new balance is mirrored into the
    /// directory entry if one exists; the admin session has none, so its
    /// balance changes are published but not durable.
    pub fn add_coins(&self, amount: i64) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        user.coins += amount;
        self.publish(Some(user.clone()))?;

        let mut directory = self.directory.load()?;
        if let Some(entry) = directory.get_mut(&user.email) {
            entry.coins = user.coins;
            self.directory.save(&directory)?;
        }
        Ok(())
    }

    /// Apply the daily-login reward. A no-op when the session already
    /// carries today's date. Otherwise the streak advances (or resets to
    /// one) and the coin bonus equals the new streak length when the streak
    /// continued, or a single coin when it broke.
    pub fn check_daily_login(&self) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        let today = self.clock.today();
        if user.last_login_date == today.to_string() {
            return Ok(());
        }

        // Calendar yesterday relative to today. Computed independently of
        // the login-time check, which works from the evaluation instant.
        let yesterday = today
            .pred_opt()
            .map(|d| d.to_string())
            .unwrap_or_default();
        let was_yesterday = user.last_login_date == yesterday;

        user.last_login_date = today.to_string();
        user.login_streak = if was_yesterday { user.login_streak + 1 } else { 1 };
        let bonus = if was_yesterday {
            user.login_streak as i64
        } else {
            1
        };
        user.coins += bonus;
        tracing::debug!(
            "daily login for {}: streak {}, bonus {bonus}",
            user.email,
            user.login_streak
        );
        self.publish(Some(user.clone()))?;

        let mut directory = self.directory.load()?;
        if let Some(entry) = directory.get_mut(&user.email) {
            entry.last_login_date = user.last_login_date.clone();
            entry.login_streak = user.login_streak;
            entry.coins = user.coins;
            self.directory.save(&directory)?;
        }
        Ok(())
    }

    /// Append an address, assigning a timestamp-derived id. Order is
    /// preserved; nothing deduplicates or enforces default uniqueness.
    pub fn add_address(&self, address: NewAddress) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        let address = address.with_id(self.clock.now_millis().to_string());
        user.addresses.push(address);
        self.publish(Some(user.clone()))?;

        let mut directory = self.directory.load()?;
        if let Some(entry) = directory.get_mut(&user.email) {
            entry.addresses = user.addresses.clone();
            self.directory.save(&directory)?;
        }
        Ok(())
    }

    /// Shallow-merge `patch` into the session. Any field may be overwritten,
    /// including the email; the directory keeps its original key, so an
    /// email change desynchronizes the session from its entry. Only `name`
    /// and `phone` are mirrored, each keeping the stored value when the
    /// incoming field is absent or empty.
    pub fn update_user_details(&self, patch: &UserPatch) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        // The mirror target is keyed by the pre-patch email.
        let lookup_email = user.email.clone();
        patch.apply(&mut user);
        self.publish(Some(user))?;

        let mut directory = self.directory.load()?;
        if let Some(entry) = directory.get_mut(&lookup_email) {
            if let Some(name) = patch.name.as_ref().filter(|n| !n.is_empty()) {
                entry.name = name.clone();
            }
            if let Some(phone) = patch.phone.as_ref().filter(|p| !p.is_empty()) {
                entry.phone = Some(phone.clone());
            }
            self.directory.save(&directory)?;
        }
        Ok(())
    }

    /// Append an event, assigning a timestamp-derived id. A no-op when the
    /// session's events list is absent (distinct from empty).
    pub fn add_event(&self, event: NewEvent) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        let Some(events) = user.events.as_mut() else {
            return Ok(());
        };
        events.push(event.with_id(self.clock.now_millis().to_string()));
        self.publish(Some(user.clone()))?;
        self.mirror_events(&user)
    }

    /// Shallow-merge `patch` into the event matching `id`. A non-matching id
    /// leaves the list unchanged (the unchanged list is still republished
    /// and mirrored); an absent events list is a no-op.
    pub fn update_event(&self, id: &str, patch: &EventPatch) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        let Some(events) = user.events.as_mut() else {
            return Ok(());
        };
        for event in events.iter_mut() {
            if event.id == id {
                patch.apply(event);
            }
        }
        self.publish(Some(user.clone()))?;
        self.mirror_events(&user)
    }

    /// Remove the event matching `id`. A non-matching id is a no-op on the
    /// list contents; an absent events list skips the operation entirely.
    pub fn delete_event(&self, id: &str) -> Result<()> {
        let Some(mut user) = self.current() else {
            return Ok(());
        };
        let Some(events) = user.events.as_mut() else {
            return Ok(());
        };
        events.retain(|event| event.id != id);
        self.publish(Some(user.clone()))?;
        self.mirror_events(&user)
    }

    /// Write the session's events list into the matching directory entry.
    fn mirror_events(&self, user: &User) -> Result<()> {
        let mut directory = self.directory.load()?;
        if let Some(entry) = directory.get_mut(&user.email) {
            entry.events = user.events.clone();
            self.directory.save(&directory)?;
        }
        Ok(())
    }

    /// Persist `next` into the session slot (clearing the slot when absent),
    /// swap it in as the current session, and notify watchers.
    fn publish(&self, next: Option<User>) -> Result<()> {
        match &next {
            Some(user) => {
                let json = serde_json::to_string(user)?;
                self.storage.set(SESSION_KEY, &json)?;
            }
            None => self.storage.remove(SESSION_KEY)?,
        }
        *self.current.write().unwrap() = next.clone();
        // Notify from a snapshot with the lock released: a callback may
        // subscribe, unsubscribe, or republish without re-entering the lock.
        // Watchers added during notification first fire on the next publish.
        let snapshot: Vec<Arc<Watcher>> = self
            .watchers
            .read()
            .unwrap()
            .iter()
            .map(|(_, watcher)| watcher.clone())
            .collect();
        for watcher in snapshot {
            watcher(next.as_ref());
        }
        Ok(())
    }
}
