//! Clocks for the period engine
//!
//! Provides the clock implementations behind [`TimeSource`]:
//! - System clock (production)
//! - Fixed clock (tests, replays)
//! - Request clock (one consistent "now" per request)

use chrono::{DateTime, Duration, TimeZone, Utc};

pub use crate::traits::TimeSource;

/// UTC instant with millisecond precision
pub type Timestamp = DateTime<Utc>;

/// Wall clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    /// Clock frozen at `instant`
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Clock frozen at `ms` milliseconds since the Unix epoch
    pub fn from_millis(ms: i64) -> Self {
        Self::new(Utc.timestamp_millis_opt(ms).single().unwrap_or_default())
    }

    /// Move the clock to `instant`
    pub fn set(&mut self, instant: Timestamp) {
        self.instant = instant;
    }

    /// Move the clock by `ms` milliseconds; no-op if that leaves chrono's range
    pub fn advance(&mut self, ms: i64) {
        self.instant = self
            .instant
            .checked_add_signed(Duration::milliseconds(ms))
            .unwrap_or(self.instant);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }
}

/// Captures "now" once and replays it
///
/// Build one per request so that a navigation chain started from an absent
/// epoch sees the same instant at every step.
#[derive(Debug, Clone, Copy)]
pub struct RequestClock {
    captured: Timestamp,
}

impl RequestClock {
    /// Read `source` once and keep that instant
    pub fn capture(source: &dyn TimeSource) -> Self {
        Self { captured: source.now() }
    }
}

impl TimeSource for RequestClock {
    fn now(&self) -> Timestamp {
        self.captured
    }
}
