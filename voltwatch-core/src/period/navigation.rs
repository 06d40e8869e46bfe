//! Period navigation
//!
//! `next`/`prev` step one whole span's edge at `duration = 1`, `parent`
//! collapses to a single parent unit, and `child` expands to every child unit
//! of the span's first instance.

use core::iter::FusedIterator;

use super::{saturated_end, Period, Relation, RenderHint};
use crate::calendar::arith::offset_ms;
use crate::duration::resolve_end;

impl Period {
    /// Unit immediately after the span's end
    pub fn next(&self) -> Period {
        Period::unit(self.granularity, offset_ms(self.end, 1)).with_link(Relation::Next, RenderHint::Link)
    }

    /// Unit immediately before the span's start
    pub fn prev(&self) -> Period {
        Period::unit(self.granularity, offset_ms(self.start, -1)).with_link(Relation::Prev, RenderHint::Link)
    }

    /// `(prev, next)` pair
    pub fn siblings(&self) -> (Period, Period) {
        (self.prev(), self.next())
    }

    /// Single parent unit covering the start; `None` for `fiveyear`
    pub fn parent(&self) -> Option<Period> {
        let parent = self.granularity.parent()?;
        Some(Period::unit(parent, self.start).with_link(Relation::Up, RenderHint::Link))
    }

    /// Every child unit of the first instance; `None` for `instant`
    ///
    /// For `month` the duration is the month's day count (28-31).
    pub fn child(&self) -> Option<Period> {
        let rule = self.granularity.rule();
        let child = rule.child?;
        let units = rule.child_units_at(self.start)?;

        let end = resolve_end(self.start, child, units).unwrap_or_else(|_err| {
            log_warn!("child span of {} at {} saturated: {}", self.granularity, self.start, _err);
            saturated_end()
        });
        let context = format!("{}.{}", self.granularity, child);

        Some(
            Period::assemble(child, self.start, end, units)
                .with_context(&context)
                .with_link(Relation::Collection, RenderHint::Link),
        )
    }

    /// Each unit of the span, in order, as a `duration = 1` Period
    pub fn each_unit(&self) -> EachUnit {
        EachUnit {
            cursor: Some(Period::unit(self.granularity, self.start)),
            remaining: self.duration,
            context: self.context.clone(),
        }
    }

    /// Each child unit of the span's first instance; empty for `instant`
    pub fn each_child_unit(&self) -> EachUnit {
        self.child().map_or_else(EachUnit::empty, |child| child.each_unit())
    }
}

/// Lazy, finite iterator over the units of a Period
///
/// Clone it (or call `each_unit` again) to restart.
#[derive(Debug, Clone)]
pub struct EachUnit {
    cursor: Option<Period>,
    remaining: u32,
    context: String,
}

impl EachUnit {
    fn empty() -> Self {
        Self { cursor: None, remaining: 0, context: String::new() }
    }
}

impl Iterator for EachUnit {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor.take()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.cursor = Some(current.next());
        }

        Some(current.with_context(&self.context).with_link(Relation::Current, RenderHint::Link))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.cursor.is_some() { self.remaining as usize } else { 0 };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EachUnit {}

impl FusedIterator for EachUnit {}
