#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use sqlx::types::Json;
    use uuid::Uuid;

    use crate::database::models::{Holiday, WeekOffRule};
    use crate::services::calendar::{
        expand_range, holiday_dates, month_end, month_sequence, month_start, next_month_start,
        previous_month_start, week_off_dates, week_ordinal_label,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(start: NaiveDate, end: NaiveDate) -> Holiday {
        Holiday {
            id: Uuid::new_v4(),
            name: None,
            start_date: start,
            end_date: end,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn rule(days: &[(&str, &[&str])]) -> WeekOffRule {
        let map: HashMap<String, Vec<String>> = days
            .iter()
            .map(|(day, config)| {
                (
                    day.to_string(),
                    config.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        WeekOffRule {
            id: Uuid::new_v4(),
            name: Some("Standard".to_string()),
            effective_date: date(2024, 1, 1),
            days: Json(map),
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn expand_range_is_inclusive_on_both_ends() {
        let dates = expand_range(date(2024, 6, 28), date(2024, 7, 2));
        assert_eq!(
            dates,
            vec![
                date(2024, 6, 28),
                date(2024, 6, 29),
                date(2024, 6, 30),
                date(2024, 7, 1),
                date(2024, 7, 2),
            ]
        );
    }

    #[test]
    fn expand_range_is_empty_when_inverted() {
        assert_eq!(expand_range(date(2024, 6, 2), date(2024, 6, 1)), vec![]);
    }

    #[test]
    fn holiday_dates_unions_overlapping_spans() {
        let dates = holiday_dates(&[
            holiday(date(2024, 6, 14), date(2024, 6, 16)),
            holiday(date(2024, 6, 16), date(2024, 6, 17)),
        ]);
        assert_eq!(dates.len(), 4);
        assert!(dates.contains(&date(2024, 6, 14)));
        assert!(dates.contains(&date(2024, 6, 17)));
    }

    #[test]
    fn week_ordinal_labels_follow_day_of_month() {
        assert_eq!(week_ordinal_label(date(2024, 6, 1)), Some("First"));
        assert_eq!(week_ordinal_label(date(2024, 6, 7)), Some("First"));
        assert_eq!(week_ordinal_label(date(2024, 6, 8)), Some("Second"));
        assert_eq!(week_ordinal_label(date(2024, 6, 28)), Some("Fourth"));
        // a fifth occurrence has no label
        assert_eq!(week_ordinal_label(date(2024, 6, 29)), None);
        assert_eq!(week_ordinal_label(date(2024, 6, 30)), None);
    }

    #[test]
    fn no_rule_means_no_week_offs() {
        let off = week_off_dates(None, date(2024, 6, 1), date(2024, 6, 30));
        assert!(off.is_empty());
    }

    #[test]
    fn unqualified_week_off_takes_every_occurrence() {
        // June 2024 has Sundays on 2, 9, 16, 23, 30
        let rule = rule(&[("Sunday", &["WeekOff"])]);
        let off = week_off_dates(Some(&rule), date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(off.len(), 5);
        assert!(off.contains(&date(2024, 6, 2)));
        assert!(off.contains(&date(2024, 6, 30)));
    }

    #[test]
    fn qualified_week_off_matches_only_listed_ordinals() {
        let rule = rule(&[("Sunday", &["WeekOff", "Second", "Fourth"])]);
        let off = week_off_dates(Some(&rule), date(2024, 6, 1), date(2024, 6, 30));

        // The 2nd Sunday (9th) and 4th Sunday (23rd) are off; the 30th is
        // the month's fifth Sunday and never matches a qualifier.
        assert_eq!(off.len(), 2);
        assert!(off.contains(&date(2024, 6, 9)));
        assert!(off.contains(&date(2024, 6, 23)));
        assert!(!off.contains(&date(2024, 6, 2)));
        assert!(!off.contains(&date(2024, 6, 16)));
        assert!(!off.contains(&date(2024, 6, 30)));
    }

    #[test]
    fn working_day_tags_are_not_week_offs() {
        let rule = rule(&[("Saturday", &["HalfDay"]), ("Friday", &["FullDay"]), ("Monday", &[])]);
        let off = week_off_dates(Some(&rule), date(2024, 6, 1), date(2024, 6, 30));
        assert!(off.is_empty());
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(month_start(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(month_end(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(month_end(date(2023, 2, 3)), date(2023, 2, 28));
        assert_eq!(next_month_start(date(2024, 12, 15)), date(2025, 1, 1));
        assert_eq!(previous_month_start(date(2024, 1, 15)), date(2023, 12, 1));
    }

    #[test]
    fn month_sequence_is_inclusive_of_both_months() {
        assert_eq!(
            month_sequence(date(2024, 11, 20), date(2025, 2, 1)),
            vec![
                date(2024, 11, 1),
                date(2024, 12, 1),
                date(2025, 1, 1),
                date(2025, 2, 1),
            ]
        );
    }

    #[test]
    fn month_sequence_is_empty_when_start_is_later() {
        assert_eq!(month_sequence(date(2025, 3, 1), date(2025, 2, 28)), vec![]);
    }
}
