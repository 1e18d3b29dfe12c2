#[cfg(test)]
mod tests {
    use crate::grid::{days_in_month, generate_calendar_grid};
    use crate::hijri::to_hijri;
    use crate::week::iso_week_number;
    use chrono::{Datelike, Duration, NaiveDate};
    use proptest::prelude::*;

    // Valid dates between 1900 and 2200
    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2200, 1u32..=12, 1u32..=31).prop_map(|(year, month, day)| {
            let day = day.min(days_in_month(year, month));
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        })
    }

    proptest! {
        // Every week is 7 slots and the filled slots are 1..=days_in_month in order
        #[test]
        fn test_grid_is_rectangular_and_ordered(date in any_date()) {
            let weeks = generate_calendar_grid(date);
            let days: Vec<u32> = weeks
                .iter()
                .flat_map(|week| week.iter())
                .filter_map(|slot| slot.map(|d| d.day()))
                .collect();

            let expected: Vec<u32> = (1..=days_in_month(date.year(), date.month())).collect();
            prop_assert_eq!(days, expected);

            for week in &weeks {
                prop_assert_eq!(week.len(), 7);
            }
            for slot in weeks.iter().flatten().flatten() {
                prop_assert_eq!(slot.month(), date.month());
                prop_assert_eq!(slot.year(), date.year());
            }
        }

        // Leading padding equals the Monday-first weekday index of the 1st
        #[test]
        fn test_grid_leading_padding(date in any_date()) {
            let weeks = generate_calendar_grid(date);
            let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();

            let leading = weeks[0].iter().take_while(|slot| slot.is_none()).count();
            prop_assert_eq!(leading as u32, first.weekday().num_days_from_monday());

            let days = days_in_month(date.year(), date.month()) as usize;
            let expected_rows = (leading + days).div_ceil(7);
            prop_assert_eq!(weeks.len(), expected_rows);
        }

        // Range check and agreement with chrono's ISO calendar
        #[test]
        fn test_iso_week_matches_chrono(date in any_date()) {
            let week = iso_week_number(date);
            prop_assert!((1..=53).contains(&week));
            prop_assert_eq!(week, date.iso_week().week());
        }

        // Away from the year boundaries the week number never goes backwards
        #[test]
        fn test_iso_week_non_decreasing_within_year(year in 1900i32..2200, ordinal in 4u32..=361) {
            let day = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let next = day + Duration::days(1);
            prop_assert!(iso_week_number(next) >= iso_week_number(day));
        }

        // The Hijri conversion is total and yields a sane date
        #[test]
        fn test_hijri_conversion_is_total(date in any_date()) {
            let hijri = to_hijri(date);
            prop_assert!((1..=12).contains(&hijri.month));
            prop_assert!((1..=30).contains(&hijri.day));
            prop_assert!(hijri.year > 1300 && hijri.year < 1700);
        }
    }
}
