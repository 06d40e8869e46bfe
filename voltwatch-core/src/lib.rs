//! Period engine for Voltwatch energy reports
//!
//! Buckets telemetry from battery packs, MPPT charge controllers and inverters
//! into calendar periods, and navigates between them.
//!
//! Key properties:
//! - Pure and synchronous: no I/O, no shared mutable state
//! - Periods are immutable values, safe to share across threads
//! - "Now" is read only through an injected [`TimeSource`]
//! - Malformed caller input never errors; it resolves to "now"
//!
//! ```no_run
//! use voltwatch_core::{Granularity, Period, SystemClock};
//!
//! let clock = SystemClock;
//! let granularity = Granularity::parse_or(Some("month"), Granularity::Day);
//! let period = Period::new(granularity, Some("201902"), 1, &clock)?;
//!
//! for day in period.each_child_unit() {
//!     println!("{} {}", day.compact_start(), day.label());
//! }
//! # Ok::<(), voltwatch_core::PeriodError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calendar;
pub mod constants;
pub mod duration;
pub mod epoch;
pub mod errors;
pub mod period;
pub mod time;
pub mod traits;

// Public API
pub use calendar::{Granularity, TimeOfDay};
pub use errors::{PeriodError, PeriodResult};
pub use period::{EachUnit, Period, Relation, RenderHint};
pub use time::{FixedClock, RequestClock, SystemClock, Timestamp};
pub use traits::TimeSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
