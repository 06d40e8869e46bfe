//! Time Source Abstraction
//!
//! "Now" is the only non-deterministic input the period engine reads: an
//! absent or malformed epoch resolves to the current instant. Every read goes
//! through [`TimeSource`] so that:
//!
//! - **Testability**: tests freeze time with [`crate::time::FixedClock`]
//! - **Consistency**: all periods built while serving one request observe the
//!   same instant ([`crate::time::RequestClock`])
//!
//! ## Example Implementation
//!
//! ```rust
//! use voltwatch_core::traits::TimeSource;
//! use voltwatch_core::time::Timestamp;
//! use chrono::{TimeZone, Utc};
//!
//! /// Clock pinned to the last telemetry sample received
//! struct LastSampleClock {
//!     last_sample: Timestamp,
//! }
//!
//! impl TimeSource for LastSampleClock {
//!     fn now(&self) -> Timestamp {
//!         self.last_sample
//!     }
//! }
//!
//! let clock = LastSampleClock {
//!     last_sample: Utc.with_ymd_and_hms(2019, 11, 10, 5, 51, 13).unwrap(),
//! };
//! assert_eq!(clock.now().timestamp(), 1_573_365_073);
//! ```

use crate::time::Timestamp;

/// Source of the current UTC instant
///
/// Implementations must be cheap to call and safe to share between threads.
pub trait TimeSource: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
