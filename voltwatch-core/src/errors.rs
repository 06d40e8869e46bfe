//! Error Types for the Period Engine
//!
//! ## Design Philosophy
//!
//! Most bad input never becomes an error here. Report URLs are often typed by
//! hand or only partially specified, so the engine is lenient with them:
//!
//! - An unparseable epoch resolves to "now" (see [`crate::epoch`]).
//! - An unknown granularity token resolves to a caller-supplied default
//!   (see [`crate::Granularity::parse_or`]).
//! - `parent()` on `fiveyear` and `child()` on `instant` return `None`.
//!
//! What remains are caller bugs, which fail fast:
//!
//! - `InvalidDuration`: a span must cover at least one unit.
//! - `UnknownGranularity`: only from the strict [`core::str::FromStr`] path.
//! - `OutOfRange`: calendar arithmetic left the representable range.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use voltwatch_core::{Granularity, Period, PeriodError, FixedClock};
//!
//! let clock = FixedClock::from_millis(1_573_365_073_269);
//! match Period::new(Granularity::Day, Some("20190204"), 0, &clock) {
//!     Ok(_) => unreachable!(),
//!     Err(PeriodError::InvalidDuration { duration }) => assert_eq!(duration, 0),
//!     Err(e) => panic!("unexpected: {e}"),
//! }
//! ```

use thiserror::Error;

/// Result type for period operations
pub type PeriodResult<T> = Result<T, PeriodError>;

/// Period engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// A span must cover at least one unit
    #[error("Invalid duration {duration}: a period covers at least one unit")]
    InvalidDuration {
        /// The rejected duration
        duration: u32,
    },

    /// Token is not one of the fixed granularities
    #[error("Unknown granularity: {token:?}")]
    UnknownGranularity {
        /// The rejected token
        token: String,
    },

    /// Calendar arithmetic overflowed the representable range
    #[error("Period arithmetic out of range")]
    OutOfRange,
}
