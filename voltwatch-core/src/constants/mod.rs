//! Constants for Voltwatch Core
//!
//! Centralized numeric values for the period engine. Always use these
//! instead of magic numbers; names carry their units.

/// Unit conversions, bucket sizes and epoch input limits.
pub mod time;

pub use time::{
    MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY,
    HOURS_PER_TIME_OF_DAY, MONTHS_PER_QUARTER, YEARS_PER_FIVE_YEAR,
};
