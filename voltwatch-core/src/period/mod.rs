//! Periods: Labeled, Navigable Spans of Time
//!
//! ## Overview
//!
//! A [`Period`] is `duration` consecutive buckets of one [`Granularity`],
//! starting exactly on a bucket boundary. Every report is computed over a
//! Period, and every link in a report points at one.
//!
//! ```text
//! Period(week, "20190207", 2)
//!   start = Mon 2019-02-04 00:00:00.000
//!   end   = Sun 2019-02-17 23:59:59.999
//! ```
//!
//! ## Construction
//!
//! Periods come from exactly two places:
//!
//! 1. [`Period::new`] / [`Period::from_instant`] with caller input
//! 2. Navigation on an existing Period (`next`, `prev`, `parent`, `child`,
//!    `each_unit`, `each_child_unit`), which always builds a new value
//!
//! A Period is never mutated after construction. It holds no clock and no
//! caches, so it can be cloned and shared across threads freely.
//!
//! ## Navigation
//!
//! ```rust
//! use voltwatch_core::{FixedClock, Granularity, Period, Relation};
//!
//! let clock = FixedClock::from_millis(0);
//! let week = Period::new(Granularity::Week, Some("20190207"), 1, &clock)?;
//!
//! assert_eq!(week.label(), "Week 6 2019");
//! assert_eq!(week.next().label(), "Week 7 2019");
//! assert_eq!(week.parent().unwrap().label(), "Feb 2019");
//!
//! let days = week.child().unwrap();
//! assert_eq!(days.context(), "week.day");
//! assert_eq!(days.duration(), 7);
//! assert_eq!(days.relation(), Relation::Collection);
//! assert_eq!(week.each_child_unit().count(), 7);
//! # Ok::<(), voltwatch_core::PeriodError>(())
//! ```

mod label;
mod navigation;

use core::fmt;

use chrono::{DateTime, Utc};

use crate::calendar::arith::{end_of, start_of};
use crate::calendar::Granularity;
use crate::duration::resolve_end;
use crate::epoch;
use crate::errors::PeriodResult;
use crate::time::{TimeSource, Timestamp};

pub use navigation::EachUnit;

/// Hypermedia role a Period plays relative to the Period it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Relation {
    /// The Period itself
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Current,
    /// Child units of the originating Period
    Collection,
    /// Parent of the originating Period
    Up,
    /// Unit right after the originating span
    Next,
    /// Unit right before the originating span
    Prev,
}

impl Relation {
    /// Link relation name (`self`, `up`, ...)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Relation::Current => "self",
            Relation::Collection => "collection",
            Relation::Up => "up",
            Relation::Next => "next",
            Relation::Prev => "prev",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory rendering flag for link builders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RenderHint {
    /// Render as a navigable link
    Link,
    /// Render inline as an image
    Image,
    /// No rendering preference
    #[default]
    None,
}

impl RenderHint {
    /// Lowercase hint name
    pub const fn as_str(&self) -> &'static str {
        match self {
            RenderHint::Link => "link",
            RenderHint::Image => "image",
            RenderHint::None => "none",
        }
    }
}

/// Immutable, bucket-aligned span of time
///
/// Equality compares the span (granularity, start, end, duration, context);
/// `relation` and `render_hint` are link metadata and do not take part.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Period {
    granularity: Granularity,
    start: Timestamp,
    end: Timestamp,
    duration: u32,
    context: String,
    relation: Relation,
    render_hint: RenderHint,
}

impl Period {
    /// Build a Period from raw request input
    ///
    /// An absent or invalid `epoch` resolves to `clock.now()`. Fails only when
    /// `duration` is zero or the span leaves the representable calendar.
    pub fn new(
        granularity: Granularity,
        epoch: Option<&str>,
        duration: u32,
        clock: &dyn TimeSource,
    ) -> PeriodResult<Self> {
        let start = epoch::normalize(epoch, granularity, clock);
        Self::spanning(granularity, start, duration)
    }

    /// Build a Period covering `instant` and the `duration - 1` units after it
    pub fn from_instant(granularity: Granularity, instant: Timestamp, duration: u32) -> PeriodResult<Self> {
        Self::spanning(granularity, start_of(instant, granularity), duration)
    }

    fn spanning(granularity: Granularity, start: Timestamp, duration: u32) -> PeriodResult<Self> {
        let end = resolve_end(start, granularity, duration)?;
        Ok(Self::assemble(granularity, start, end, duration))
    }

    /// Single bucket containing `instant`; never fails
    fn unit(granularity: Granularity, instant: Timestamp) -> Self {
        let start = start_of(instant, granularity);
        Self::assemble(granularity, start, end_of(start, granularity), 1)
    }

    fn assemble(granularity: Granularity, start: Timestamp, end: Timestamp, duration: u32) -> Self {
        Self {
            granularity,
            start,
            end,
            duration,
            context: granularity.as_str().to_string(),
            relation: Relation::Current,
            render_hint: RenderHint::None,
        }
    }

    fn with_link(mut self, relation: Relation, render_hint: RenderHint) -> Self {
        self.relation = relation;
        self.render_hint = render_hint;
        self
    }

    fn with_context(mut self, context: &str) -> Self {
        if self.context != context {
            self.context = context.to_string();
        }
        self
    }

    /// Bucket size of every unit in the span
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// First millisecond of the span, always bucket-aligned
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Last millisecond of the span (inclusive)
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Number of consecutive units covered, at least 1
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Granularity token, or `"<parent>.<child>"` for a child collection
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Role relative to the Period this one was navigated from
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Advisory rendering flag
    pub fn render_hint(&self) -> RenderHint {
        self.render_hint
    }

    /// Whether `instant` falls inside the span
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Length of the span in milliseconds, both ends included
    pub fn span_ms(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_milliseconds() + 1
    }

    /// Start formatted with the granularity's compact format
    ///
    /// For years 0000 through 9999 the result re-parses through
    /// [`epoch::normalize`] to the same start. Signed years fall back to now.
    pub fn compact_start(&self) -> String {
        self.start.format(self.granularity.compact_format()).to_string()
    }

    /// Human-readable label, `"<start> - <end>"` when the span has two
    pub fn label(&self) -> String {
        let first = label::render(self.granularity, self.start);
        let last = label::render(self.granularity, start_of(self.end, self.granularity));
        if first == last {
            first
        } else {
            format!("{first} - {last}")
        }
    }
}

impl PartialEq for Period {
    fn eq(&self, other: &Self) -> bool {
        self.granularity == other.granularity
            && self.start == other.start
            && self.end == other.end
            && self.duration == other.duration
            && self.context == other.context
    }
}

impl Eq for Period {}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Latest representable instant, used when arithmetic saturates
pub(crate) fn saturated_end() -> Timestamp {
    DateTime::<Utc>::MAX_UTC
}
