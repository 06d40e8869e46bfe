//! Shared fixtures for link layer integration tests

#![allow(dead_code)]

use proptest::prelude::*;

use voltwatch_core::{FixedClock, Granularity, Period, TimeSource};
use voltwatch_links::PeriodRequest;

/// 2019-11-10T05:51:13.269Z
pub const NOW_MS: i64 = 1_573_365_073_269;

pub fn clock() -> FixedClock {
    FixedClock::from_millis(NOW_MS)
}

/// Split an href into the raw values a router would hand over
pub fn request_from_href<'a>(base_path: &str, href: &'a str) -> PeriodRequest<'a> {
    let path = href.strip_prefix(base_path).unwrap_or(href);
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };
    let mut segments = path.trim_start_matches('/').splitn(2, '/');
    let granularity = segments.next();
    let epoch = segments.next();
    let duration = query.and_then(|q| q.strip_prefix("duration="));

    PeriodRequest::new(granularity, epoch, duration)
}

pub fn any_period() -> impl Strategy<Value = Period> {
    // 1990-01-01 .. 2040-01-01
    let granularity = prop::sample::select(Granularity::ALL.to_vec());
    (granularity, 631_152_000_000i64..2_208_988_800_000i64, 1u32..6).prop_map(|(g, ms, duration)| {
        let instant = FixedClock::from_millis(ms).now();
        Period::from_instant(g, instant, duration).unwrap()
    })
}
