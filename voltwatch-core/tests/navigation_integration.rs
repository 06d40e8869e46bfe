//! Integration tests for period construction and navigation
//!
//! Walks the same paths a report request takes: raw input to Period, then
//! drill-down, roll-up and paging.

mod common;

use voltwatch_core::{
    epoch, FixedClock, Granularity, Period, PeriodError, Relation, RenderHint, RequestClock,
};

use common::{clock, iso, period, NOW_MS};

#[test]
fn invalid_epochs_resolve_to_start_of_today() {
    for raw in [None, Some(""), Some("not-a-date"), Some("2019-13-45")] {
        let day = Period::new(Granularity::Day, raw, 1, &clock()).unwrap();
        assert_eq!(iso(day.start()), "2019-11-10T00:00:00.000Z", "{raw:?}");
        assert_eq!(iso(day.end()), "2019-11-10T23:59:59.999Z");
    }
}

#[test]
fn iso_week_alignment() {
    let c = clock();
    assert_eq!(iso(epoch::normalize(Some("20190204"), Granularity::Week, &c)), "2019-02-04T00:00:00.000Z");
    assert_eq!(iso(epoch::normalize(Some("20190207"), Granularity::Week, &c)), "2019-02-04T00:00:00.000Z");
}

#[test]
fn five_year_alignment() {
    let c = clock();
    assert_eq!(iso(epoch::normalize(Some("2023"), Granularity::FiveYear, &c)), "2020-01-01T00:00:00.000Z");
    assert_eq!(
        iso(epoch::normalize(Some("20230615T12"), Granularity::FiveYear, &c)),
        "2020-01-01T00:00:00.000Z"
    );
    assert_eq!(iso(epoch::normalize(Some("2025"), Granularity::FiveYear, &c)), "2025-01-01T00:00:00.000Z");
}

#[test]
fn time_of_day_boundaries() {
    let cases = [("05", "00", "Night"), ("06", "06", "Morning"), ("12", "12", "Afternoon"), ("23", "18", "Evening")];
    for (hour, block, name) in cases {
        let p = period(Granularity::TimeOfDay, &format!("20190204T{hour}30"), 1);
        assert_eq!(iso(p.start()), format!("2019-02-04T{block}:00:00.000Z"));
        assert!(p.label().ends_with(name), "{}", p.label());
    }
}

#[test]
fn drill_down_from_year_to_instant() {
    let mut current = period(Granularity::FiveYear, "2019", 1);
    let mut path = vec![current.granularity()];

    // fiveyear → year → quarter → month → day → timeofday → hour → minute → second → instant
    while let Some(child) = current.each_child_unit().next() {
        assert_eq!(child.start(), current.start());
        current = child;
        path.push(current.granularity());
    }

    assert_eq!(
        path,
        vec![
            Granularity::FiveYear,
            Granularity::Year,
            Granularity::Quarter,
            Granularity::Month,
            Granularity::Day,
            Granularity::TimeOfDay,
            Granularity::Hour,
            Granularity::Minute,
            Granularity::Second,
            Granularity::Instant,
        ]
    );
    assert_eq!(iso(current.start()), "2015-01-01T00:00:00.000Z");
}

#[test]
fn roll_up_from_instant() {
    let mut current = period(Granularity::Instant, "20190207T134512.123", 1);
    let mut labels = vec![current.label()];
    while let Some(parent) = current.parent() {
        assert_eq!(parent.relation(), Relation::Up);
        current = parent;
        labels.push(current.label());
    }

    assert_eq!(
        labels,
        vec![
            "Thu Feb 7th 13:45:12.123",
            "Thu Feb 7th 13:45:12",
            "Thu Feb 7th 13:45",
            "Thu Feb 7th 13h",
            "Thu Feb 7th Afternoon",
            "Thu Feb 7th",
            "Week 6 2019",
            "Feb 2019",
            "Q1 2019",
            "2019",
            "5 Years 2015-2019",
        ]
    );
}

#[test]
fn month_day_collection() {
    let feb = period(Granularity::Month, "201902", 1);
    let days = feb.child().unwrap();
    assert_eq!(days.duration(), 28);
    assert_eq!(days.context(), "month.day");
    assert_eq!(feb.each_child_unit().count(), 28);

    let leap = period(Granularity::Month, "202002", 1);
    assert_eq!(leap.child().unwrap().duration(), 29);
    let last = leap.each_child_unit().last().unwrap();
    assert_eq!(iso(last.start()), "2020-02-29T00:00:00.000Z");
    assert_eq!(last.render_hint(), RenderHint::Link);
}

#[test]
fn paging_through_weeks_across_new_year() {
    let mut week = period(Granularity::Week, "20191216", 1);
    let mut labels = Vec::new();
    for _ in 0..4 {
        labels.push(week.label());
        week = week.next();
    }
    assert_eq!(labels, ["Week 51 2019", "Week 52 2019", "Week 1 2020", "Week 2 2020"]);
}

#[test]
fn one_request_sees_one_now() {
    let mut source = FixedClock::from_millis(NOW_MS);
    let request = RequestClock::capture(&source);

    let today = Period::new(Granularity::Day, None, 1, &request).unwrap();
    source.advance(24 * 60 * 60 * 1000);
    let still_today = Period::new(Granularity::Day, Some("garbage"), 1, &request).unwrap();

    assert_eq!(today, still_today);
}

#[test]
fn zero_duration_is_a_caller_bug() {
    let err = Period::new(Granularity::Week, Some("20190204"), 0, &clock()).unwrap_err();
    assert_eq!(err, PeriodError::InvalidDuration { duration: 0 });
}

#[test]
fn periods_are_shareable_across_threads() {
    let p = std::sync::Arc::new(period(Granularity::Quarter, "201904", 4));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || p.each_unit().nth(i).map(|q| q.label()))
        })
        .collect();

    let labels: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(labels, ["Q2 2019", "Q3 2019", "Q4 2019", "Q1 2020"]);
}
