//! Debounced search input.
//!
//! Raw keystrokes become a committed query only after an idle interval with
//! no further input. The debouncer holds a single pending slot: every call to
//! [`SearchDebouncer::input`] replaces the slot and its deadline, so the last
//! keystroke always wins and out-of-order commits cannot occur.
//!
//! Time is injected: callers pass an [`Instant`] to `input` and `poll`, which
//! keeps the component deterministic and testable. Dropping the debouncer (or
//! the controller that owns it) drops the pending slot, so no commit can fire
//! after teardown.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tabview::debounce::SearchDebouncer;
//!
//! let mut debouncer = SearchDebouncer::new(Duration::from_millis(300));
//! let t0 = Instant::now();
//!
//! debouncer.input("  acme  ", t0);
//! assert_eq!(debouncer.poll(t0 + Duration::from_millis(100)), None);
//! assert_eq!(
//!     debouncer.poll(t0 + Duration::from_millis(300)),
//!     Some("acme".to_string())
//! );
//! ```

use std::time::{Duration, Instant};

/// Idle interval used by [`SearchDebouncer::default`].
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending {
    raw: String,
    deadline: Instant,
}

/// Turns raw search keystrokes into a committed query on an idle timer.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    interval: Duration,
    pending: Option<Pending>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl SearchDebouncer {
    /// Creates a debouncer with the given idle interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Returns the idle interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Records a keystroke at `now`, replacing any pending commit.
    ///
    /// The commit deadline moves to `now + interval`; at most one commit is
    /// ever pending.
    pub fn input(&mut self, raw: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            raw: raw.into(),
            deadline: now + self.interval,
        });
    }

    /// Returns whether a commit is pending.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the deadline of the pending commit, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Commits the pending query if its deadline has passed.
    ///
    /// Returns the trimmed query exactly once; subsequent polls return `None`
    /// until the next `input`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            let committed = self.pending.take().map(|p| p.raw.trim().to_string());
            if let Some(query) = &committed {
                tracing::trace!(query = %query, "debounce commit");
            }
            return committed;
        }
        None
    }

    /// Commits the pending query immediately (explicit submit).
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.raw.trim().to_string())
    }

    /// Drops any pending commit.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
