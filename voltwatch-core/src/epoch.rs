//! Epoch Normalization
//!
//! Turns the caller-supplied epoch string of a report URL into the exact
//! start instant of a bucket.
//!
//! ## Accepted Input
//!
//! Compact ISO-like strings, UTC only:
//!
//! ```text
//! YYYY[MM[DD]][T|' ']HH[mm[ss[.SSS]]]
//! 2019                     year, fiveyear
//! 201902                   month, quarter (and coarser)
//! 20190204                 any granularity
//! 20190204T13              + hour
//! 20190204T1345            + minutes
//! 20190204T134512          + seconds
//! 20190204T134512.123      + milliseconds
//! ```
//!
//! Hyphens in the date, colons in the time and a trailing `Z` are ignored, so
//! `2019-02-04T13:45:12.123Z` is accepted too. The date portion must be at
//! least as long as the granularity needs (4, 6 or 8 digits); the time portion
//! must be exactly 2, 4, 6 or 10 characters long. Years are four unsigned
//! digits, so only 0000 through 9999 can be addressed.
//!
//! ## Leniency
//!
//! Anything else (absent, empty, garbage, impossible dates such as
//! `20190230`) silently resolves to the clock's "now". This mirrors how report
//! URLs behave in practice: they are often typed by hand and a best-effort
//! answer beats an error page.
//!
//! ```rust
//! use voltwatch_core::{epoch, FixedClock, Granularity};
//!
//! let clock = FixedClock::from_millis(1_573_365_073_269); // 2019-11-10T05:51:13.269Z
//! let start = epoch::normalize(Some("not-a-date"), Granularity::Day, &clock);
//! assert_eq!(start.to_rfc3339(), "2019-11-10T00:00:00+00:00");
//! ```

use crate::calendar::arith::{start_of, utc};
use crate::calendar::Granularity;
use crate::constants::time::TIME_PORTION_LENGTHS;
use crate::time::{TimeSource, Timestamp};

/// Parse a raw epoch string without snapping or fallback
///
/// Returns `None` when the input is malformed or too short for `granularity`.
pub fn parse_epoch(raw: &str, granularity: Granularity) -> Option<Timestamp> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);

    let (date_part, time_part) = match trimmed.split_once(|c: char| c == 'T' || c == 't' || c == ' ') {
        Some((date, time)) => (date, Some(time)),
        None => (trimmed, None),
    };

    let (year, month, day) = parse_date(date_part, granularity.rule().min_date_len)?;
    let (hour, minute, second, milli) = match time_part {
        Some(time) => parse_time(time)?,
        None => (0, 0, 0, 0),
    };

    utc(year, month, day, hour, minute, second, milli)
}

/// Resolve `raw` to the start of its `granularity` bucket
///
/// Absent or invalid input falls back to `clock.now()`.
pub fn normalize(raw: Option<&str>, granularity: Granularity, clock: &dyn TimeSource) -> Timestamp {
    let candidate = raw
        .and_then(|input| parse_epoch(input, granularity))
        .unwrap_or_else(|| {
            log_debug!("epoch {:?} unusable for {}, falling back to now", raw, granularity);
            clock.now()
        });

    start_of(candidate, granularity)
}

/// Snap an already-known instant to the start of its bucket
pub fn snap(instant: Timestamp, granularity: Granularity) -> Timestamp {
    start_of(instant, granularity)
}

fn parse_date(part: &str, min_len: usize) -> Option<(i32, u32, u32)> {
    // Hyphens are separators, never a year sign
    if part.starts_with('-') {
        return None;
    }
    let digits: String = part.chars().filter(|c| *c != '-').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() < min_len || !matches!(digits.len(), 4 | 6 | 8) {
        return None;
    }

    let year = digits[0..4].parse().ok()?;
    let month = if digits.len() >= 6 { digits[4..6].parse().ok()? } else { 1 };
    let day = if digits.len() == 8 { digits[6..8].parse().ok()? } else { 1 };
    Some((year, month, day))
}

fn parse_time(part: &str) -> Option<(u32, u32, u32, u32)> {
    let compact: String = part.chars().filter(|c| *c != ':').collect();
    if !TIME_PORTION_LENGTHS.contains(&compact.len()) {
        return None;
    }

    let (clock_digits, millis) = match compact.split_once('.') {
        Some((hms, ms)) if hms.len() == 6 && ms.len() == 3 => (hms, Some(ms)),
        Some(_) => return None,
        None if compact.len() <= 6 => (compact.as_str(), None),
        None => return None,
    };
    if !clock_digits.bytes().all(|b| b.is_ascii_digit())
        || !millis.map_or(true, |ms| ms.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let field = |range: core::ops::Range<usize>| -> Option<u32> {
        clock_digits.get(range).map_or(Some(0), |s| s.parse().ok())
    };
    let hour = field(0..2)?;
    let minute = field(2..4)?;
    let second = field(4..6)?;
    let milli = match millis {
        Some(ms) => ms.parse().ok()?,
        None => 0,
    };
    Some((hour, minute, second, milli))
}
