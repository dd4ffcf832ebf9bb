#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::services::calendar::{month_sequence, previous_month_start};
    use crate::services::runner::RunSummary;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The driver walks a user's months from the join month through the
    /// month before the current one, never the current month itself.
    #[test]
    fn driver_month_range_covers_join_month_through_last_closed_month() {
        let join_date = date(2025, 11, 20);
        let today = date(2026, 2, 10);

        let months = month_sequence(join_date, previous_month_start(today));

        assert_eq!(
            months,
            vec![date(2025, 11, 1), date(2025, 12, 1), date(2026, 1, 1)]
        );
    }

    #[test]
    fn a_user_who_joined_this_month_has_no_payable_months_yet() {
        let join_date = date(2026, 2, 5);
        let today = date(2026, 2, 10);

        let months = month_sequence(join_date, previous_month_start(today));

        assert_eq!(months, vec![]);
    }

    #[test]
    fn january_rolls_back_to_december_of_the_previous_year() {
        assert_eq!(previous_month_start(date(2026, 1, 1)), date(2025, 12, 1));
    }

    #[test]
    fn summary_message_reports_success_and_failure_counts() {
        let summary = RunSummary {
            generated: 12,
            failed: 3,
            skipped: 40,
        };
        assert_eq!(
            summary.message(),
            "Payroll generation complete. Success: 12, Failed: 3"
        );
    }

    #[test]
    fn summary_counts_start_at_zero() {
        assert_eq!(
            RunSummary::default(),
            RunSummary {
                generated: 0,
                failed: 0,
                skipped: 0
            }
        );
    }
}
