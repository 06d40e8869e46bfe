//! Calendar Constants
//!
//! Unit conversions and bucket sizes used by the period engine.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1_000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: i64 = 24;

/// Days per ISO week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = MS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per day.
pub const MS_PER_DAY: i64 = MS_PER_HOUR * HOURS_PER_DAY;

// ===== BUCKET SIZES =====

/// Hours in one time-of-day block.
///
/// The day splits into four fixed blocks: night, morning, afternoon, evening.
pub const HOURS_PER_TIME_OF_DAY: i64 = 6;

/// Time-of-day blocks per day.
pub const TIME_OF_DAY_PER_DAY: i64 = HOURS_PER_DAY / HOURS_PER_TIME_OF_DAY;

/// Months per quarter.
pub const MONTHS_PER_QUARTER: i64 = 3;

/// Months per year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Quarters per year.
pub const QUARTERS_PER_YEAR: i64 = MONTHS_PER_YEAR / MONTHS_PER_QUARTER;

/// Years per five-year block.
///
/// Blocks start on years divisible by five (2015, 2020, 2025).
pub const YEARS_PER_FIVE_YEAR: i64 = 5;

// ===== EPOCH INPUT =====

/// Shortest date portion for year-level granularities (`YYYY`).
pub const MIN_DATE_LEN_YEAR: usize = 4;

/// Shortest date portion for month-level granularities (`YYYYMM`).
pub const MIN_DATE_LEN_MONTH: usize = 6;

/// Shortest date portion for everything else (`YYYYMMDD`).
pub const MIN_DATE_LEN_DAY: usize = 8;

/// Accepted time portion lengths: `HH`, `HHmm`, `HHmmss`, `HHmmss.SSS`.
pub const TIME_PORTION_LENGTHS: [usize; 4] = [2, 4, 6, 10];
