//! Attendance aggregation: raw punch timestamps for one user/day into
//! worked minutes and a day credit.

use chrono::NaiveDateTime;

/// Minutes of logged work that earn a full day's credit.
pub const FULL_DAY_MINUTES: i64 = 360;
/// Minutes of logged work that earn a half day's credit.
pub const HALF_DAY_MINUTES: i64 = 240;
/// Assumed checkout hour for a dangling final punch.
pub const FALLBACK_CHECKOUT_HOUR: u32 = 19;

/// Total worked minutes for one user on one date.
///
/// Punches carry no direction, so they are sorted and paired positionally:
/// first with second, third with fourth, and so on. A dangling final punch
/// before 19:00 gets a synthesized 19:00 checkout on its own date; at or
/// after 19:00 it is dropped. A pair whose first punch is not strictly
/// earlier than its second contributes nothing.
pub fn worked_minutes(punches: &[NaiveDateTime]) -> i64 {
    let mut sorted = punches.to_vec();
    sorted.sort();

    let mut total = 0;
    let mut i = 0;
    while i < sorted.len() {
        let clock_in = sorted[i];
        let clock_out = match sorted.get(i + 1) {
            Some(&out) => out,
            None => {
                let Some(cutoff) = clock_in.date().and_hms_opt(FALLBACK_CHECKOUT_HOUR, 0, 0)
                else {
                    break;
                };
                if clock_in >= cutoff {
                    break;
                }
                cutoff
            }
        };

        if clock_in < clock_out {
            total += (clock_out - clock_in).num_minutes();
        }
        i += 2;
    }

    total
}

/// Day credit earned by a minute total: 1.0 from six logged hours, 0.5
/// from four, otherwise nothing.
pub fn day_credit(minutes: i64) -> f64 {
    if minutes >= FULL_DAY_MINUTES {
        1.0
    } else if minutes >= HALF_DAY_MINUTES {
        0.5
    } else {
        0.0
    }
}
