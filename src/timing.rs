//! Elapsed-time deadlines
//!
//! A [`Deadline`] stores when a period started and how long it lasts, and
//! only ever compares elapsed durations. Instants produced by different
//! loops may be observed slightly out of order; `saturating_duration_since`
//! turns that into a zero elapsed time instead of a huge one.

use embassy_time::{Duration, Instant};

const ZERO: Duration = Duration::from_ticks(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    since: Instant,
    after: Duration,
}

impl Deadline {
    pub const fn new(since: Instant, after: Duration) -> Self {
        Self { since, after }
    }

    /// A deadline that is already due
    pub const fn immediate(now: Instant) -> Self {
        Self::new(now, ZERO)
    }

    /// Time since the period started
    #[inline]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.since)
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.after
    }

    /// Time left until due, zero once due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.after.checked_sub(self.elapsed(now)).unwrap_or(ZERO)
    }

    /// Start a new period at `now`
    pub fn restart(&mut self, now: Instant, after: Duration) {
        self.since = now;
        self.after = after;
    }

    pub const fn since(&self) -> Instant {
        self.since
    }

    pub const fn after(&self) -> Duration {
        self.after
    }
}
