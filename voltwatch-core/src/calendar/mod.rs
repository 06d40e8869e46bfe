//! Calendar Granularities
//!
//! ## Overview
//!
//! Reports bucket telemetry into a fixed set of calendar granularities. The
//! set is closed: there is no recurrence language and no timezone database,
//! every bucket is computed in UTC.
//!
//! ## Hierarchy
//!
//! The parent/child relation is not a single chain. Both `week` and `month`
//! drill down into `day`, while `day` rolls up into `week`:
//!
//! ```text
//! fiveyear ─► year ─► quarter ─► month ─► day
//!                                  ▲
//!                                  │ (parent)
//!                     week ─► day ─► timeofday ─► hour ─► minute ─► second ─► instant
//! ```
//!
//! Per-granularity facts live in one table, [`rules`], so that every rule
//! for a granularity is a single match arm checked for exhaustiveness.

pub(crate) mod arith;
pub mod rules;

use core::fmt;
use core::str::FromStr;

use crate::errors::PeriodError;

pub use rules::{CalendarRule, ChildUnits};

/// Calendar bucket size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Granularity {
    /// Single millisecond
    Instant,
    /// Calendar second
    Second,
    /// Calendar minute
    Minute,
    /// Clock hour
    Hour,
    /// Six-hour block of the day (night, morning, afternoon, evening)
    TimeOfDay,
    /// Calendar day, midnight to midnight UTC
    Day,
    /// ISO week, Monday to Sunday
    Week,
    /// Calendar month, 28 to 31 days
    Month,
    /// Jan-Mar, Apr-Jun, Jul-Sep or Oct-Dec
    Quarter,
    /// Calendar year
    Year,
    /// Five calendar years starting on a year divisible by five
    FiveYear,
}

impl Granularity {
    /// Every granularity, finest first
    pub const ALL: [Granularity; 11] = [
        Granularity::Instant,
        Granularity::Second,
        Granularity::Minute,
        Granularity::Hour,
        Granularity::TimeOfDay,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::Year,
        Granularity::FiveYear,
    ];

    /// Lowercase token used in URLs and configuration
    pub const fn as_str(&self) -> &'static str {
        match self {
            Granularity::Instant => "instant",
            Granularity::Second => "second",
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::TimeOfDay => "timeofday",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
            Granularity::FiveYear => "fiveyear",
        }
    }

    /// Static calendar facts for this granularity
    pub const fn rule(&self) -> &'static CalendarRule {
        rules::rule(*self)
    }

    /// Next coarser granularity, `None` for `fiveyear`
    pub const fn parent(&self) -> Option<Granularity> {
        self.rule().parent
    }

    /// Next finer granularity, `None` for `instant`
    pub const fn child(&self) -> Option<Granularity> {
        self.rule().child
    }

    /// Compact timestamp format (chrono strftime syntax)
    pub const fn compact_format(&self) -> &'static str {
        self.rule().compact_format
    }

    /// Lenient parse: unknown or missing tokens resolve to `default`
    pub fn parse_or(token: Option<&str>, default: Granularity) -> Granularity {
        match token.map(str::parse::<Granularity>) {
            Some(Ok(granularity)) => granularity,
            Some(Err(_)) => {
                log_debug!("unknown granularity {:?}, using {}", token, default);
                default
            }
            None => default,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Granularity::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| PeriodError::UnknownGranularity { token: s.to_string() })
    }
}

/// Fixed six-hour block of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeOfDay {
    /// 00:00 - 05:59
    Night,
    /// 06:00 - 11:59
    Morning,
    /// 12:00 - 17:59
    Afternoon,
    /// 18:00 - 23:59
    Evening,
}

impl TimeOfDay {
    /// Block containing `hour` (0-23). Hours past 23 count as evening.
    pub const fn of_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeOfDay::Night,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    /// First hour of the block
    pub const fn start_hour(&self) -> u32 {
        match self {
            TimeOfDay::Night => 0,
            TimeOfDay::Morning => 6,
            TimeOfDay::Afternoon => 12,
            TimeOfDay::Evening => 18,
        }
    }

    /// Display name used in `timeofday` labels
    pub const fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Night => "Night",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }
}
