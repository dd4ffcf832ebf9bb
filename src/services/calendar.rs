//! Calendar resolution: date-range expansion, holiday sets, and per-user
//! week-off sets. Everything here is pure; the payroll calculator feeds it
//! rows it has already fetched.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::database::models::{
    DAY_TAG_FULL_DAY, DAY_TAG_HALF_DAY, DAY_TAG_WEEK_OFF, Holiday, WEEK_ORDINAL_LABELS,
    WeekOffRule,
};

/// Ordered, inclusive sequence of dates. Empty when `start > end`.
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        let Some(next) = current.succ_opt() else { break };
        current = next;
    }
    dates
}

/// Union of all inclusive holiday spans.
pub fn holiday_dates(holidays: &[Holiday]) -> HashSet<NaiveDate> {
    let mut dates = HashSet::new();
    for holiday in holidays {
        dates.extend(expand_range(holiday.start_date, holiday.end_date));
    }
    dates
}

/// Weekday name as stored in week-off rule configuration keys.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Ordinal label for a date's occurrence of its weekday within the month:
/// day 1-7 is "First", 8-14 "Second", and so on. A fifth occurrence has no
/// label and can never match a rule qualifier.
pub fn week_ordinal_label(date: NaiveDate) -> Option<&'static str> {
    let ordinal = (date.day() as usize).div_ceil(7);
    WEEK_ORDINAL_LABELS.get(ordinal - 1).copied()
}

/// Dates in `[start, end]` that the rule marks as off for its holder.
///
/// A weekday with no configuration, an empty list, or a `FullDay`/`HalfDay`
/// tag is a working day. A `WeekOff` tag with no qualifiers takes every
/// occurrence off; with qualifiers, only the listed ordinal occurrences.
/// The rule's effective date does not narrow the window.
pub fn week_off_dates(
    rule: Option<&WeekOffRule>,
    start: NaiveDate,
    end: NaiveDate,
) -> HashSet<NaiveDate> {
    let mut off = HashSet::new();
    let Some(rule) = rule else {
        return off;
    };

    for date in expand_range(start, end) {
        let Some(config) = rule.days.get(weekday_name(date.weekday())) else {
            continue;
        };
        let Some(tag) = config.first() else {
            continue;
        };
        // FullDay/HalfDay classify the day as working; only the WeekOff
        // tag marks absence
        if tag == DAY_TAG_FULL_DAY || tag == DAY_TAG_HALF_DAY {
            continue;
        }
        if tag != DAY_TAG_WEEK_OFF {
            continue;
        }

        let qualifiers = &config[1..];
        if qualifiers.is_empty() {
            off.insert(date);
        } else if let Some(label) = week_ordinal_label(date) {
            if qualifiers.iter().any(|q| q == label) {
                off.insert(date);
            }
        }
    }

    off
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    next_month_start(date).pred_opt().unwrap_or(date)
}

/// First day of the month after the one containing `date`.
pub fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// First day of the month before the one containing `date`.
pub fn previous_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Inclusive sequence of month starts from `from`'s month through `to`'s
/// month. Empty when `from`'s month is later than `to`'s.
pub fn month_sequence(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut current = month_start(from);
    let last = month_start(to);
    while current <= last {
        months.push(current);
        current = next_month_start(current);
    }
    months
}
