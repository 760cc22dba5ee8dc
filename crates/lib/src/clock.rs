//! Time provider abstraction
//!
//! This module provides a [`Clock`] trait that abstracts over time sources,
//! allowing production code to use real system time while tests drive streak
//! and id-generation logic with a controllable clock.
//!
//! Calendar dates derive from epoch milliseconds in UTC and render as ISO
//! `YYYY-MM-DD` strings, which is the shape the persisted records use.
//!
//! # Example
//!
//! ```
//! use zamanix_account::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let millis = clock.now_millis();
//! let today = clock.today();
//! ```

use std::fmt::Debug;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate};

/// A time provider for timestamps and calendar dates.
///
/// This trait abstracts over time sources to enable:
/// - Controllable time in tests (fixed starting point, manual advance)
/// - Distinct timestamp-derived ids within a single clock instance
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time as milliseconds since Unix epoch.
    fn now_millis(&self) -> u64;

    /// Returns the UTC calendar date for a millisecond timestamp.
    fn date_of(&self, millis: u64) -> NaiveDate {
        DateTime::from_timestamp_millis(millis as i64)
            .map(|dt| dt.date_naive())
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns today's calendar date.
    fn today(&self) -> NaiveDate {
        self.date_of(self.now_millis())
    }
}

/// Production clock using real system time.
///
/// This is the default clock implementation used in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Test clock with auto-advancing time.
///
/// This clock auto-advances one millisecond on each `now_millis()` call, so
/// consecutive timestamp-derived ids (addresses, events) come out distinct.
/// Use `hold()` to temporarily freeze the clock when a test needs stable
/// timestamps, and `advance_days()` to cross calendar-day boundaries for
/// streak scenarios.
///
/// # Example
///
/// ```
/// use zamanix_account::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1000);
/// let t1 = clock.now_millis();  // Returns 1000, then advances
/// let t2 = clock.now_millis();  // Returns next value
/// assert!(t2 > t1);
///
/// // Use hold() for stable timestamps
/// {
///     let _hold = clock.hold();
///     let a = clock.now_millis();
///     let b = clock.now_millis();
///     assert_eq!(a, b);  // Frozen
/// }
/// ```
pub struct FixedClock {
    state: Mutex<FixedClockState>,
}

struct FixedClockState {
    millis: u64,
    held: bool,
}

/// RAII guard that freezes a [`FixedClock`] while held.
///
/// The clock resumes auto-advancing when this guard is dropped.
pub struct ClockHold<'a>(&'a FixedClock);

impl Drop for ClockHold<'_> {
    fn drop(&mut self) {
        self.0.state.lock().unwrap().held = false;
    }
}

impl FixedClock {
    /// Create a new fixed clock with the given initial time in milliseconds.
    pub fn new(millis: u64) -> Self {
        Self {
            state: Mutex::new(FixedClockState {
                millis,
                held: false,
            }),
        }
    }

    /// Hold the clock, preventing auto-advance until the guard is dropped.
    pub fn hold(&self) -> ClockHold<'_> {
        self.state.lock().unwrap().held = true;
        ClockHold(self)
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: u64) {
        self.state.lock().unwrap().millis += ms;
    }

    /// Advance the clock by whole calendar days.
    pub fn advance_days(&self, days: u64) {
        self.advance(days * crate::constants::DAY_MS);
    }

    /// Set the clock to a specific time in milliseconds.
    pub fn set(&self, ms: u64) {
        self.state.lock().unwrap().millis = ms;
    }

    /// Get the current time without advancing (even if not held).
    pub fn get(&self) -> u64 {
        self.state.lock().unwrap().millis
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        let mut state = self.state.lock().unwrap();
        if state.held {
            state.millis
        } else {
            let t = state.millis;
            state.millis += 1;
            t
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        // Default to a reasonable timestamp (2024-01-01 00:00:00 UTC)
        Self::new(1704067200000)
    }
}

impl Clone for FixedClock {
    fn clone(&self) -> Self {
        // Clone creates independent clock at current value, not held
        Self::new(self.get())
    }
}

impl Debug for FixedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("FixedClock")
            .field("millis", &state.millis)
            .field("held", &state.held)
            .finish()
    }
}
