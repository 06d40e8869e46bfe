//! Request Resolution
//!
//! Turns the three raw values of a report URL into a [`Period`]:
//!
//! ```text
//! /period/<granularity>/<epoch>?duration=<n>
//!            │             │              │
//!            │             │              └─ parsed, clamped to [1, cap]
//!            │             └─ lenient, invalid → now (engine policy)
//!            └─ unknown → configured default
//! ```

use voltwatch_core::{Granularity, Period, TimeSource};

use crate::config::LinkConfig;
use crate::errors::LinkResult;

/// Raw report request values, as they arrive from the URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodRequest<'a> {
    pub granularity: Option<&'a str>,
    pub epoch: Option<&'a str>,
    pub duration: Option<&'a str>,
}

impl<'a> PeriodRequest<'a> {
    pub fn new(granularity: Option<&'a str>, epoch: Option<&'a str>, duration: Option<&'a str>) -> Self {
        Self { granularity, epoch, duration }
    }

    /// Granularity after default substitution
    pub fn granularity(&self, config: &LinkConfig) -> Granularity {
        Granularity::parse_or(self.granularity, config.default_granularity)
    }

    /// Duration clamped to `[1, cap]`; missing or unparseable input is 1
    pub fn duration(&self, granularity: Granularity, config: &LinkConfig) -> u32 {
        let requested = self
            .duration
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(1);
        let cap = u64::from(config.max_duration(granularity).max(1));

        if requested > cap {
            log::debug!("duration {} for {} capped at {}", requested, granularity, cap);
        }
        requested.clamp(1, cap) as u32
    }

    /// Build the requested Period
    pub fn resolve(&self, config: &LinkConfig, clock: &dyn TimeSource) -> LinkResult<Period> {
        let granularity = self.granularity(config);
        let duration = self.duration(granularity, config);
        Ok(Period::new(granularity, self.epoch, duration, clock)?)
    }
}
