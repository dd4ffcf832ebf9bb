#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use crate::database::models::{Leave, LeaveDayType, LeaveStatus};
    use crate::services::leave_ledger::build_ledgers;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave(
        user_id: Uuid,
        start: NaiveDate,
        start_day: LeaveDayType,
        end: Option<NaiveDate>,
        end_day: Option<LeaveDayType>,
    ) -> Leave {
        Leave {
            id: Uuid::new_v4(),
            user_id,
            start_date: start,
            start_day_type: start_day,
            end_date: end,
            end_day_type: end_day,
            status: LeaveStatus::Approved,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn multi_day_leave_credits_edges_by_day_type() {
        let user_id = Uuid::new_v4();
        let rows = vec![leave(
            user_id,
            date(2024, 6, 10),
            LeaveDayType::FirstHalf,
            Some(date(2024, 6, 12)),
            Some(LeaveDayType::FullDay),
        )];

        let ledgers = build_ledgers(&rows, date(2024, 6, 1), date(2024, 6, 30));
        let ledger = &ledgers[&user_id];

        // 0.5 (First Half start) + 1.0 (interior) + 1.0 (Full Day end)
        assert_eq!(ledger.total_days, 2.5);
        assert_eq!(ledger.dates.len(), 3);
        assert!(ledger.dates.contains(&date(2024, 6, 11)));
    }

    #[test]
    fn single_day_leave_uses_the_start_day_type() {
        let user_id = Uuid::new_v4();
        let full = vec![leave(
            user_id,
            date(2024, 6, 10),
            LeaveDayType::FullDay,
            Some(date(2024, 6, 10)),
            Some(LeaveDayType::FullDay),
        )];
        let half = vec![leave(
            user_id,
            date(2024, 6, 10),
            LeaveDayType::SecondHalf,
            Some(date(2024, 6, 10)),
            Some(LeaveDayType::SecondHalf),
        )];

        let window = (date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(build_ledgers(&full, window.0, window.1)[&user_id].total_days, 1.0);
        assert_eq!(build_ledgers(&half, window.0, window.1)[&user_id].total_days, 0.5);
    }

    #[test]
    fn missing_end_date_reads_as_single_day() {
        let user_id = Uuid::new_v4();
        let rows = vec![leave(user_id, date(2024, 6, 10), LeaveDayType::FullDay, None, None)];

        let ledgers = build_ledgers(&rows, date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(ledgers[&user_id].total_days, 1.0);
        assert_eq!(ledgers[&user_id].dates.len(), 1);
    }

    #[test]
    fn span_is_clipped_to_the_month_window() {
        let user_id = Uuid::new_v4();
        // Jan 30 - Feb 2, evaluated for February: only Feb 1 and Feb 2
        // remain, and the clipped edges take the start/end day types.
        let rows = vec![leave(
            user_id,
            date(2024, 1, 30),
            LeaveDayType::FullDay,
            Some(date(2024, 2, 2)),
            Some(LeaveDayType::FirstHalf),
        )];

        let ledgers = build_ledgers(&rows, date(2024, 2, 1), date(2024, 2, 29));
        let ledger = &ledgers[&user_id];

        assert_eq!(ledger.total_days, 1.5);
        assert_eq!(ledger.dates.len(), 2);
        assert!(ledger.dates.contains(&date(2024, 2, 1)));
        assert!(ledger.dates.contains(&date(2024, 2, 2)));
    }

    #[test]
    fn multi_day_leave_without_end_day_type_credits_half_for_the_last_day() {
        let user_id = Uuid::new_v4();
        let rows = vec![leave(
            user_id,
            date(2024, 6, 10),
            LeaveDayType::FullDay,
            Some(date(2024, 6, 11)),
            None,
        )];

        let ledgers = build_ledgers(&rows, date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(ledgers[&user_id].total_days, 1.5);
    }

    #[test]
    fn leaves_accumulate_per_user() {
        let user_id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let rows = vec![
            leave(user_id, date(2024, 6, 3), LeaveDayType::FullDay, None, None),
            leave(user_id, date(2024, 6, 20), LeaveDayType::FirstHalf, None, None),
            leave(other, date(2024, 6, 5), LeaveDayType::FullDay, None, None),
        ];

        let ledgers = build_ledgers(&rows, date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(ledgers[&user_id].total_days, 1.5);
        assert_eq!(ledgers[&other].total_days, 1.0);
    }

    #[test]
    fn leave_entirely_outside_the_window_contributes_nothing() {
        let user_id = Uuid::new_v4();
        let rows = vec![leave(
            user_id,
            date(2024, 5, 28),
            LeaveDayType::FullDay,
            Some(date(2024, 5, 30)),
            Some(LeaveDayType::FullDay),
        )];

        let ledgers = build_ledgers(&rows, date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(ledgers[&user_id].total_days, 0.0);
        assert!(ledgers[&user_id].dates.is_empty());
    }
}
