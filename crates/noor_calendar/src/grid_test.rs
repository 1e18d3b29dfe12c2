#[cfg(test)]
mod tests {
    use crate::grid::{
        days_in_month, generate_calendar_grid, shift_month, weekday_labels, CalendarMonth,
    };
    use chrono::NaiveDate;
    use noor_common::Locale;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_february_2024_starts_on_thursday() {
        let weeks = generate_calendar_grid(d(2024, 2, 1));

        assert_eq!(
            weeks[0],
            [
                None,
                None,
                None,
                Some(d(2024, 2, 1)),
                Some(d(2024, 2, 2)),
                Some(d(2024, 2, 3)),
                Some(d(2024, 2, 4)),
            ]
        );
        // 3 padding slots + 29 days = 32 slots -> 5 rows
        assert_eq!(weeks.len(), 5);
        assert_eq!(
            weeks[4],
            [
                Some(d(2024, 2, 26)),
                Some(d(2024, 2, 27)),
                Some(d(2024, 2, 28)),
                Some(d(2024, 2, 29)),
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_any_day_of_month_gives_same_grid() {
        assert_eq!(
            generate_calendar_grid(d(2024, 2, 1)),
            generate_calendar_grid(d(2024, 2, 17))
        );
    }

    #[test]
    fn test_month_starting_sunday_gets_six_leading_slots() {
        // 1 September 2024 is a Sunday
        let weeks = generate_calendar_grid(d(2024, 9, 10));

        assert_eq!(weeks[0][..6], [None; 6]);
        assert_eq!(weeks[0][6], Some(d(2024, 9, 1)));
        // 6 + 30 = 36 slots -> 6 rows
        assert_eq!(weeks.len(), 6);
    }

    #[test]
    fn test_month_without_padding() {
        // February 2021 starts on a Monday and has 28 days
        let weeks = generate_calendar_grid(d(2021, 2, 5));

        assert_eq!(weeks.len(), 4);
        assert!(weeks.iter().flatten().all(|slot| slot.is_some()));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(d(2024, 1, 31), 1), Some(d(2024, 2, 29)));
        assert_eq!(shift_month(d(2024, 3, 31), -1), Some(d(2024, 2, 29)));
        assert_eq!(shift_month(d(2024, 11, 15), 2), Some(d(2025, 1, 15)));
        assert_eq!(shift_month(d(2024, 5, 5), 0), Some(d(2024, 5, 5)));
    }

    #[test]
    fn test_calendar_month_header() {
        let month = CalendarMonth::for_date(d(2024, 2, 14), 0);

        assert_eq!(month.year, 2024);
        assert_eq!(month.month, 2);
        assert_eq!(month.weeks.len(), 5);
        assert_eq!(month.hijri_start.month, 7);
        assert_eq!(month.hijri_end.month, 8);
        assert_eq!(
            month.header(Locale::English),
            "February 2024 · Rajab – Sha'ban 1445 AH"
        );
        assert!(month.header(Locale::Arabic).contains("٢٠٢٤"));
        assert!(month.header(Locale::French).starts_with("février 2024"));
    }

    #[test]
    fn test_weekday_labels_start_on_monday() {
        assert_eq!(weekday_labels(Locale::English)[0], "Mon");
        assert_eq!(weekday_labels(Locale::English)[6], "Sun");
        assert_eq!(weekday_labels(Locale::Arabic)[4], "الجمعة");
    }
}
