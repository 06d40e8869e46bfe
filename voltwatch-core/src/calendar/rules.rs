//! Calendar Rules Table
//!
//! One entry per granularity holding every static fact the engine needs:
//!
//! | Granularity | Parent    | Child     | Child units | Compact              |
//! |-------------|-----------|-----------|-------------|----------------------|
//! | instant     | second    | -         | -           | `YYYYMMDDTHHmmss.SSS`|
//! | second      | minute    | instant   | 1000        | `YYYYMMDDTHHmmss`    |
//! | minute      | hour      | second    | 60          | `YYYYMMDDTHHmm`      |
//! | hour        | timeofday | minute    | 60          | `YYYYMMDDTHH`        |
//! | timeofday   | day       | hour      | 6           | `YYYYMMDDTHH`        |
//! | day         | week      | timeofday | 4           | `YYYYMMDD`           |
//! | week        | month     | day       | 7           | `YYYYMMDD`           |
//! | month       | quarter   | day       | 28-31       | `YYYYMM`             |
//! | quarter     | year      | month     | 3           | `YYYYMM`             |
//! | year        | fiveyear  | quarter   | 4           | `YYYY`               |
//! | fiveyear    | -         | year      | 5           | `YYYY`               |
//!
//! Label formats use chrono strftime syntax plus four placeholders filled in
//! by the label renderer: `{ord}` (day of month with English ordinal suffix),
//! `{tod}` (time-of-day name), `{q}` (quarter number) and `{fy}` (five-year
//! range).

use chrono::{Datelike, NaiveDate};

use super::Granularity;
use crate::constants::time::{
    DAYS_PER_WEEK, HOURS_PER_TIME_OF_DAY, MINUTES_PER_HOUR, MIN_DATE_LEN_DAY, MIN_DATE_LEN_MONTH,
    MIN_DATE_LEN_YEAR, MONTHS_PER_QUARTER, MS_PER_SECOND, QUARTERS_PER_YEAR, SECONDS_PER_MINUTE,
    TIME_OF_DAY_PER_DAY, YEARS_PER_FIVE_YEAR,
};
use crate::time::Timestamp;

/// How many child units fit in one parent instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildUnits {
    /// No finer granularity exists
    None,
    /// Same count for every instance
    Fixed(u32),
    /// Number of days in the month containing the instance
    DaysInMonth,
}

/// Static facts for one granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRule {
    /// Granularity this entry describes
    pub granularity: Granularity,
    /// Next coarser granularity
    pub parent: Option<Granularity>,
    /// Next finer granularity
    pub child: Option<Granularity>,
    /// Count of `child` units in one instance
    pub child_units: ChildUnits,
    /// Display label format
    pub label_format: &'static str,
    /// Compact format embeddable in URLs; re-parses to the bucket start
    pub compact_format: &'static str,
    /// Shortest accepted date portion of an epoch string
    pub min_date_len: usize,
}

impl CalendarRule {
    /// Child unit count for the instance starting at `start`
    pub fn child_units_at(&self, start: Timestamp) -> Option<u32> {
        match self.child_units {
            ChildUnits::None => None,
            ChildUnits::Fixed(units) => Some(units),
            ChildUnits::DaysInMonth => Some(days_in_month(start.year(), start.month())),
        }
    }
}

/// Days in `month` of `year`, leap years included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        // Only reachable at the edge of chrono's range
        _ => 31,
    }
}

/// Table entry for `granularity`
pub const fn rule(granularity: Granularity) -> &'static CalendarRule {
    match granularity {
        Granularity::Instant => &INSTANT,
        Granularity::Second => &SECOND,
        Granularity::Minute => &MINUTE,
        Granularity::Hour => &HOUR,
        Granularity::TimeOfDay => &TIME_OF_DAY,
        Granularity::Day => &DAY,
        Granularity::Week => &WEEK,
        Granularity::Month => &MONTH,
        Granularity::Quarter => &QUARTER,
        Granularity::Year => &YEAR,
        Granularity::FiveYear => &FIVE_YEAR,
    }
}

const INSTANT: CalendarRule = CalendarRule {
    granularity: Granularity::Instant,
    parent: Some(Granularity::Second),
    child: None,
    child_units: ChildUnits::None,
    label_format: "%a %b {ord} %H:%M:%S%.3f",
    compact_format: "%Y%m%dT%H%M%S%.3f",
    min_date_len: MIN_DATE_LEN_DAY,
};

const SECOND: CalendarRule = CalendarRule {
    granularity: Granularity::Second,
    parent: Some(Granularity::Minute),
    child: Some(Granularity::Instant),
    child_units: ChildUnits::Fixed(MS_PER_SECOND as u32),
    label_format: "%a %b {ord} %H:%M:%S",
    compact_format: "%Y%m%dT%H%M%S",
    min_date_len: MIN_DATE_LEN_DAY,
};

const MINUTE: CalendarRule = CalendarRule {
    granularity: Granularity::Minute,
    parent: Some(Granularity::Hour),
    child: Some(Granularity::Second),
    child_units: ChildUnits::Fixed(SECONDS_PER_MINUTE as u32),
    label_format: "%a %b {ord} %H:%M",
    compact_format: "%Y%m%dT%H%M",
    min_date_len: MIN_DATE_LEN_DAY,
};

const HOUR: CalendarRule = CalendarRule {
    granularity: Granularity::Hour,
    parent: Some(Granularity::TimeOfDay),
    child: Some(Granularity::Minute),
    child_units: ChildUnits::Fixed(MINUTES_PER_HOUR as u32),
    label_format: "%a %b {ord} %Hh",
    compact_format: "%Y%m%dT%H",
    min_date_len: MIN_DATE_LEN_DAY,
};

const TIME_OF_DAY: CalendarRule = CalendarRule {
    granularity: Granularity::TimeOfDay,
    parent: Some(Granularity::Day),
    child: Some(Granularity::Hour),
    child_units: ChildUnits::Fixed(HOURS_PER_TIME_OF_DAY as u32),
    label_format: "%a %b {ord} {tod}",
    compact_format: "%Y%m%dT%H",
    min_date_len: MIN_DATE_LEN_DAY,
};

const DAY: CalendarRule = CalendarRule {
    granularity: Granularity::Day,
    parent: Some(Granularity::Week),
    child: Some(Granularity::TimeOfDay),
    child_units: ChildUnits::Fixed(TIME_OF_DAY_PER_DAY as u32),
    label_format: "%a %b {ord}",
    compact_format: "%Y%m%d",
    min_date_len: MIN_DATE_LEN_DAY,
};

const WEEK: CalendarRule = CalendarRule {
    granularity: Granularity::Week,
    parent: Some(Granularity::Month),
    child: Some(Granularity::Day),
    child_units: ChildUnits::Fixed(DAYS_PER_WEEK as u32),
    label_format: "Week %-V %G",
    compact_format: "%Y%m%d",
    min_date_len: MIN_DATE_LEN_DAY,
};

const MONTH: CalendarRule = CalendarRule {
    granularity: Granularity::Month,
    parent: Some(Granularity::Quarter),
    child: Some(Granularity::Day),
    child_units: ChildUnits::DaysInMonth,
    label_format: "%b %Y",
    compact_format: "%Y%m",
    min_date_len: MIN_DATE_LEN_MONTH,
};

const QUARTER: CalendarRule = CalendarRule {
    granularity: Granularity::Quarter,
    parent: Some(Granularity::Year),
    child: Some(Granularity::Month),
    child_units: ChildUnits::Fixed(MONTHS_PER_QUARTER as u32),
    label_format: "Q{q} %Y",
    compact_format: "%Y%m",
    min_date_len: MIN_DATE_LEN_MONTH,
};

const YEAR: CalendarRule = CalendarRule {
    granularity: Granularity::Year,
    parent: Some(Granularity::FiveYear),
    child: Some(Granularity::Quarter),
    child_units: ChildUnits::Fixed(QUARTERS_PER_YEAR as u32),
    label_format: "%Y",
    compact_format: "%Y",
    min_date_len: MIN_DATE_LEN_YEAR,
};

const FIVE_YEAR: CalendarRule = CalendarRule {
    granularity: Granularity::FiveYear,
    parent: None,
    child: Some(Granularity::Year),
    child_units: ChildUnits::Fixed(YEARS_PER_FIVE_YEAR as u32),
    label_format: "5 Years {fy}",
    compact_format: "%Y",
    min_date_len: MIN_DATE_LEN_YEAR,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::arith::{end_of, offset_ms, shift, start_of};
    use chrono::{TimeZone, Utc};

    #[test]
    fn table_entries_match_their_key() {
        for g in Granularity::ALL {
            assert_eq!(rule(g).granularity, g);
        }
    }

    #[test]
    fn parent_and_child_are_consistent() {
        // Every child's parent leads back, except month which shares `day` with week
        for g in Granularity::ALL {
            if let Some(child) = g.child() {
                if g != Granularity::Month {
                    assert_eq!(child.parent(), Some(g), "{g} -> {child}");
                }
            }
        }
    }

    #[test]
    fn child_units_match_child_presence() {
        for g in Granularity::ALL {
            let start = Utc.with_ymd_and_hms(2019, 2, 4, 0, 0, 0).unwrap();
            assert_eq!(g.child().is_some(), g.rule().child_units_at(start).is_some());
        }
    }

    #[test]
    fn fixed_child_units_tile_the_parent() {
        let instant = Utc.with_ymd_and_hms(2019, 2, 7, 13, 45, 12).unwrap();
        for g in Granularity::ALL {
            let (Some(child), ChildUnits::Fixed(units)) = (g.child(), g.rule().child_units) else {
                continue;
            };
            let start = start_of(instant, g);
            let after_last = shift(start, child, i64::from(units));
            assert_eq!(after_last, Some(offset_ms(end_of(start, g), 1)), "{g} -> {units} x {child}");
        }
    }

    #[test]
    fn month_days_follow_leap_years() {
        assert_eq!(days_in_month(2019, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2019, 4), 30);
        assert_eq!(days_in_month(2019, 12), 31);
    }
}
