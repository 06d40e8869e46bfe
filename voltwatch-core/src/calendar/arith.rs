//! Bucket arithmetic
//!
//! Month-based units go through chrono's calendar-aware month addition, so
//! quarter/year boundaries and leap days are exact. Fixed-length units use
//! millisecond offsets.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Timelike, Utc};

use super::Granularity;
use crate::constants::time::{
    DAYS_PER_WEEK, HOURS_PER_TIME_OF_DAY, MONTHS_PER_QUARTER, MONTHS_PER_YEAR, MS_PER_DAY,
    MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, YEARS_PER_FIVE_YEAR,
};
use crate::time::Timestamp;

/// Assemble a UTC instant, `None` if any component is out of range
pub(crate) fn utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
) -> Option<Timestamp> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_milli_opt(hour, minute, second, milli)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Earliest instant of the bucket containing `t`
pub(crate) fn start_of(t: Timestamp, granularity: Granularity) -> Timestamp {
    let (y, mo, d) = (t.year(), t.month(), t.day());
    let (h, mi, s) = (t.hour(), t.minute(), t.second());

    let start = match granularity {
        Granularity::Instant => utc(y, mo, d, h, mi, s, t.timestamp_subsec_millis().min(999)),
        Granularity::Second => utc(y, mo, d, h, mi, s, 0),
        Granularity::Minute => utc(y, mo, d, h, mi, 0, 0),
        Granularity::Hour => utc(y, mo, d, h, 0, 0, 0),
        Granularity::TimeOfDay => {
            let block_hours = HOURS_PER_TIME_OF_DAY as u32;
            utc(y, mo, d, h - h % block_hours, 0, 0, 0)
        }
        Granularity::Day => utc(y, mo, d, 0, 0, 0, 0),
        Granularity::Week => {
            let back = i64::from(t.weekday().num_days_from_monday());
            utc(y, mo, d, 0, 0, 0, 0)
                .and_then(|midnight| midnight.checked_sub_signed(Duration::days(back)))
        }
        Granularity::Month => utc(y, mo, 1, 0, 0, 0, 0),
        Granularity::Quarter => {
            let quarter_months = MONTHS_PER_QUARTER as u32;
            utc(y, mo - (mo - 1) % quarter_months, 1, 0, 0, 0, 0)
        }
        Granularity::Year => utc(y, 1, 1, 0, 0, 0, 0),
        Granularity::FiveYear => {
            let block_years = YEARS_PER_FIVE_YEAR as i32;
            utc(y - y.rem_euclid(block_years), 1, 1, 0, 0, 0, 0)
        }
    };

    start.unwrap_or_else(|| {
        log_warn!("bucket start for {} {} is out of range, saturating", granularity, t);
        DateTime::<Utc>::MIN_UTC
    })
}

/// Move `t` by `n` whole units of `granularity` (negative moves back)
pub(crate) fn shift(t: Timestamp, granularity: Granularity, n: i64) -> Option<Timestamp> {
    let months = |per_unit: i64| -> Option<Timestamp> {
        let total = n.checked_mul(per_unit)?;
        let magnitude = Months::new(u32::try_from(total.unsigned_abs()).ok()?);
        if total >= 0 {
            t.checked_add_months(magnitude)
        } else {
            t.checked_sub_months(magnitude)
        }
    };
    let millis = |per_unit: i64| -> Option<Timestamp> {
        let total = n.checked_mul(per_unit)?;
        t.checked_add_signed(Duration::milliseconds(total))
    };

    match granularity {
        Granularity::Instant => millis(1),
        Granularity::Second => millis(MS_PER_SECOND),
        Granularity::Minute => millis(MS_PER_MINUTE),
        Granularity::Hour => millis(MS_PER_HOUR),
        Granularity::TimeOfDay => millis(MS_PER_HOUR * HOURS_PER_TIME_OF_DAY),
        Granularity::Day => millis(MS_PER_DAY),
        Granularity::Week => millis(MS_PER_DAY * DAYS_PER_WEEK),
        Granularity::Month => months(1),
        Granularity::Quarter => months(MONTHS_PER_QUARTER),
        Granularity::Year => months(MONTHS_PER_YEAR),
        Granularity::FiveYear => months(MONTHS_PER_YEAR * YEARS_PER_FIVE_YEAR),
    }
}

/// Last millisecond of the bucket containing `t`
///
/// An instant has no sub-structure, so its end is its start.
pub(crate) fn end_of(t: Timestamp, granularity: Granularity) -> Timestamp {
    let start = start_of(t, granularity);
    if granularity == Granularity::Instant {
        return start;
    }

    shift(start, granularity, 1)
        .and_then(|next| next.checked_sub_signed(Duration::milliseconds(1)))
        .unwrap_or_else(|| {
            log_warn!("bucket end for {} {} is out of range, saturating", granularity, t);
            DateTime::<Utc>::MAX_UTC
        })
}

/// Move by a signed number of milliseconds, saturating at the calendar bounds
pub(crate) fn offset_ms(t: Timestamp, ms: i64) -> Timestamp {
    t.checked_add_signed(Duration::milliseconds(ms)).unwrap_or(if ms < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
