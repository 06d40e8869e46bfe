//! Common test utilities for period integration tests
//!
//! This module provides:
//! - A frozen clock at a known instant
//! - Instant builders and ISO formatting for readable assertions
//! - proptest strategies for granularities and instants

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use voltwatch_core::{FixedClock, Granularity, Period, Timestamp};

/// 2019-11-10T05:51:13.269Z
pub const NOW_MS: i64 = 1_573_365_073_269;

/// 1990-01-01T00:00:00Z
pub const RANGE_START_MS: i64 = 631_152_000_000;

/// 2040-01-01T00:00:00Z
pub const RANGE_END_MS: i64 = 2_208_988_800_000;

pub fn clock() -> FixedClock {
    FixedClock::from_millis(NOW_MS)
}

pub fn at_ms(ms: i64) -> Timestamp {
    Utc.timestamp_millis_opt(ms).unwrap()
}

pub fn iso(t: Timestamp) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

pub fn period(granularity: Granularity, epoch: &str, duration: u32) -> Period {
    Period::new(granularity, Some(epoch), duration, &clock()).unwrap()
}

pub fn any_granularity() -> impl Strategy<Value = Granularity> {
    prop::sample::select(Granularity::ALL.to_vec())
}

pub fn any_instant() -> impl Strategy<Value = Timestamp> {
    (RANGE_START_MS..RANGE_END_MS).prop_map(at_ms)
}

/// Periods with small durations, sized so fine granularities stay cheap
pub fn any_period() -> impl Strategy<Value = Period> {
    (any_granularity(), any_instant(), 1u32..6)
        .prop_map(|(g, t, duration)| Period::from_instant(g, t, duration).unwrap())
}
