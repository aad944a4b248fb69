//! One-slot scheduler for delayed game callbacks.
//!
//! The game needs two kinds of one-shot delays: the short pause before a
//! pair is evaluated and the longer pause before a mismatched pair is
//! concealed. The scheduler holds at most one pending callback. Scheduling
//! a new one cancels whatever was pending, and every callback carries a
//! `TimerToken` so a host timer that fires late can be recognised as stale.
//!
//! Time is logical. The session moves the clock with `advance`, or the host
//! fires a callback directly by token when it runs real timers.
//!
//! ```
//! use pair_match::core::{Scheduler, TimerTask};
//! use std::time::Duration;
//!
//! let mut scheduler = Scheduler::new();
//! let stale = scheduler.schedule(TimerTask::Evaluate, Duration::from_millis(300));
//! let fresh = scheduler.schedule(TimerTask::Evaluate, Duration::from_millis(300));
//!
//! assert!(scheduler.take_token(stale).is_none());
//! assert!(scheduler.take_token(fresh).is_some());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl TimerToken {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a callback does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerTask {
    /// Compare the two selected cards.
    Evaluate,
    /// Flip a mismatched pair face-down again.
    ConcealMismatch,
}

/// A pending callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledCallback {
    pub token: TimerToken,
    pub task: TimerTask,
    /// Logical time at which the callback is due.
    pub due: Duration,
}

impl ScheduledCallback {
    /// Time left until this callback is due, measured from `now`.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.due.saturating_sub(now)
    }
}

/// Logical clock plus a single cancellable callback slot.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    pending: Option<ScheduledCallback>,
    next_token: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// The pending callback, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledCallback> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule `task` after `delay`, replacing any pending callback.
    ///
    /// Due times saturate at `Duration::MAX`.
    pub fn schedule(&mut self, task: TimerTask, delay: Duration) -> TimerToken {
        if let Some(stale) = self.cancel() {
            log::warn!("replacing pending {:?} callback {}", stale.task, stale.token);
        }

        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(ScheduledCallback {
            token,
            task,
            due: self.now.saturating_add(delay),
        });
        log::debug!("scheduled {:?} as {} in {:?}", task, token, delay);
        token
    }

    /// Drop the pending callback and return it.
    pub fn cancel(&mut self) -> Option<ScheduledCallback> {
        self.pending.take()
    }

    /// Take the pending callback if it is due at or before `until`.
    ///
    /// The clock moves forward to the callback's due time so that anything
    /// it schedules is measured from when it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledCallback> {
        match self.pending {
            Some(callback) if callback.due <= until => {
                self.pending = None;
                self.now = self.now.max(callback.due);
                Some(callback)
            }
            _ => None,
        }
    }

    /// Take the pending callback only if `token` is current.
    ///
    /// Used when the host runs real timers and reports which one fired.
    pub fn take_token(&mut self, token: TimerToken) -> Option<ScheduledCallback> {
        match self.pending {
            Some(callback) if callback.token == token => {
                self.pending = None;
                self.now = self.now.max(callback.due);
                Some(callback)
            }
            _ => None,
        }
    }

    /// Move the clock forward to `time`. Never moves backwards.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }
}
