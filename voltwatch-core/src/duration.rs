//! Duration Resolution
//!
//! Computes the inclusive end of a span of `duration` consecutive units that
//! starts at a bucket-aligned instant:
//!
//! ```text
//! end = end_of_unit(start + (duration - 1) units)
//! ```
//!
//! - `instant`: units are milliseconds and there is no end-of-unit rounding.
//! - `timeofday`: units are six-hour blocks, so a span of `n` blocks ends
//!   `n * 6` hours after the start, minus one millisecond.
//! - `week`: ISO weeks, ending Sunday 23:59:59.999.
//! - `fiveyear`: units are five calendar years.
//!
//! Month-based units use calendar month addition, never fixed day counts.

use crate::calendar::arith::{end_of, shift};
use crate::calendar::Granularity;
use crate::errors::{PeriodError, PeriodResult};
use crate::time::Timestamp;

/// Inclusive end of `duration` units of `granularity` starting at `start`
///
/// `start` is expected to be bucket-aligned; an unaligned start is snapped
/// as part of the end-of-unit step.
pub fn resolve_end(start: Timestamp, granularity: Granularity, duration: u32) -> PeriodResult<Timestamp> {
    if duration == 0 {
        return Err(PeriodError::InvalidDuration { duration });
    }

    let last_unit = shift(start, granularity, i64::from(duration) - 1).ok_or(PeriodError::OutOfRange)?;
    Ok(end_of(last_unit, granularity))
}
