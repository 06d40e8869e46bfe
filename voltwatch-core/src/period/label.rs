//! Label rendering
//!
//! Formats come from the calendar rules table; placeholders chrono cannot
//! express are substituted after formatting.

use chrono::{Datelike, Timelike};

use crate::calendar::{Granularity, TimeOfDay};
use crate::constants::time::{MONTHS_PER_QUARTER, YEARS_PER_FIVE_YEAR};
use crate::time::Timestamp;

/// Label of the single `granularity` unit starting at `start`
pub(crate) fn render(granularity: Granularity, start: Timestamp) -> String {
    let mut label = start.format(granularity.rule().label_format).to_string();

    if label.contains("{ord}") {
        label = label.replace("{ord}", &ordinal(start.day()));
    }
    if label.contains("{tod}") {
        label = label.replace("{tod}", TimeOfDay::of_hour(start.hour()).label());
    }
    if label.contains("{q}") {
        let quarter = (start.month() - 1) / MONTHS_PER_QUARTER as u32 + 1;
        label = label.replace("{q}", &quarter.to_string());
    }
    if label.contains("{fy}") {
        // both years inclusive
        let first = start.year();
        let last = first + YEARS_PER_FIVE_YEAR as i32 - 1;
        label = label.replace("{fy}", &format!("{first}-{last}"));
    }

    label
}

/// `1st`, `2nd`, `3rd`, `4th`, ..., `11th`, ..., `21st`
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Period;
    use crate::time::FixedClock;

    fn label(g: Granularity, epoch: &str, duration: u32) -> String {
        Period::new(g, Some(epoch), duration, &FixedClock::from_millis(0))
            .unwrap()
            .label()
    }

    #[test]
    fn ordinals() {
        let rendered: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31].iter().map(|n| ordinal(*n)).collect();
        assert_eq!(
            rendered,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "31st"]
        );
    }

    #[test]
    fn single_unit_labels() {
        assert_eq!(label(Granularity::Instant, "20190101T134512.123", 1), "Tue Jan 1st 13:45:12.123");
        assert_eq!(label(Granularity::Second, "20190101T134512", 1), "Tue Jan 1st 13:45:12");
        assert_eq!(label(Granularity::Minute, "20190101T1345", 1), "Tue Jan 1st 13:45");
        assert_eq!(label(Granularity::Hour, "20190101T13", 1), "Tue Jan 1st 13h");
        assert_eq!(label(Granularity::TimeOfDay, "20190101T13", 1), "Tue Jan 1st Afternoon");
        assert_eq!(label(Granularity::Day, "20180101", 1), "Mon Jan 1st");
        assert_eq!(label(Granularity::Week, "20190325", 1), "Week 13 2019");
        assert_eq!(label(Granularity::Month, "201902", 1), "Feb 2019");
        assert_eq!(label(Granularity::Quarter, "201908", 1), "Q3 2019");
        assert_eq!(label(Granularity::Year, "2019", 1), "2019");
        assert_eq!(label(Granularity::FiveYear, "2017", 1), "5 Years 2015-2019");
        assert_eq!(label(Granularity::FiveYear, "2019", 1), "5 Years 2015-2019");
    }

    #[test]
    fn multi_unit_labels_show_both_ends() {
        assert_eq!(label(Granularity::Day, "20190204", 3), "Mon Feb 4th - Wed Feb 6th");
        assert_eq!(label(Granularity::Month, "201911", 3), "Nov 2019 - Jan 2020");
        assert_eq!(label(Granularity::FiveYear, "2015", 2), "5 Years 2015-2019 - 5 Years 2020-2024");
    }

    #[test]
    fn iso_week_year_at_boundary() {
        // Monday 2019-12-30 opens ISO week 1 of 2020
        assert_eq!(label(Granularity::Week, "20191231", 1), "Week 1 2020");
    }
}
