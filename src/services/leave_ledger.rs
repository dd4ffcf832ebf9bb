//! Leave accounting: approved leave spans into per-day markers and
//! fractional day totals for one payroll month.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::models::{Leave, LeaveDayType};
use crate::services::calendar;

/// One user's leave footprint inside a payroll month.
#[derive(Debug, Clone, Default)]
pub struct LeaveLedger {
    /// Dates inside the month covered by approved leave.
    pub dates: HashSet<NaiveDate>,
    /// Cumulative leave days, in 0.5-day steps.
    pub total_days: f64,
}

/// Per-user ledgers for all leaves overlapping `[period_start, period_end]`.
///
/// Each leave's full span is expanded and then clipped to the window. The
/// clipped list is what gets credited: its first date by the start-day
/// type, its last date by the end-day type, interior dates a full day
/// each. A single clipped date uses the start-day type alone.
pub fn build_ledgers(
    leaves: &[Leave],
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> HashMap<Uuid, LeaveLedger> {
    let mut ledgers: HashMap<Uuid, LeaveLedger> = HashMap::new();

    for leave in leaves {
        let ledger = ledgers.entry(leave.user_id).or_default();

        let in_period: Vec<NaiveDate> = calendar::expand_range(leave.start_date, leave.span_end())
            .into_iter()
            .filter(|date| *date >= period_start && *date <= period_end)
            .collect();

        let last_index = in_period.len().saturating_sub(1);
        for (i, date) in in_period.iter().enumerate() {
            ledger.dates.insert(*date);
            ledger.total_days += if in_period.len() == 1 || i == 0 {
                day_type_credit(Some(leave.start_day_type))
            } else if i == last_index {
                day_type_credit(leave.end_day_type)
            } else {
                1.0
            };
        }
    }

    ledgers
}

/// A full day of leave counts 1.0; either half-day variant (or a missing
/// end-day type) counts 0.5.
fn day_type_credit(day_type: Option<LeaveDayType>) -> f64 {
    match day_type {
        Some(LeaveDayType::FullDay) => 1.0,
        _ => 0.5,
    }
}
