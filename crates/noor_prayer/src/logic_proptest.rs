#[cfg(test)]
mod tests {
    use crate::logic::compute_prayer_times;
    use crate::params::{CalculationMethod, Coordinates, HighLatitudeRule, Madhab};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn any_method() -> impl Strategy<Value = CalculationMethod> {
        proptest::sample::select(CalculationMethod::ALL.to_vec())
    }

    fn any_rule() -> impl Strategy<Value = HighLatitudeRule> {
        prop_oneof![
            Just(HighLatitudeRule::MiddleOfTheNight),
            Just(HighLatitudeRule::SeventhOfTheNight),
            Just(HighLatitudeRule::TwilightAngle),
        ]
    }

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2050, 1u32..=366).prop_map(|(year, ordinal)| {
            NaiveDate::from_yo_opt(year, ordinal)
                .unwrap_or_else(|| NaiveDate::from_yo_opt(year, 365).unwrap())
        })
    }

    proptest! {
        // Away from the poles every method yields strictly ordered times
        #[test]
        fn test_times_are_ordered(
            latitude in -55.0f64..55.0,
            longitude in -180.0f64..180.0,
            date in any_date(),
            method in any_method(),
            hanafi in any::<bool>(),
            rule in any_rule(),
        ) {
            let madhab = if hanafi { Madhab::Hanafi } else { Madhab::Shafi };
            let params = method.parameters().with_madhab(madhab).with_high_latitude_rule(rule);
            let coordinates = Coordinates::new(latitude, longitude).unwrap();

            let daily = compute_prayer_times(date, coordinates, &params).unwrap();
            let t = daily.times;

            prop_assert!(t.fajr < t.sunrise);
            prop_assert!(t.sunrise < t.dhuhr);
            prop_assert!(t.dhuhr < t.asr);
            prop_assert!(t.asr < t.maghrib);
            prop_assert!(t.maghrib < t.isha);
            prop_assert!(t.maghrib < daily.sunnah.middle_of_the_night);
            prop_assert!(daily.sunnah.middle_of_the_night < daily.sunnah.last_third_of_the_night);
        }

        // Dhuhr falls within a few hours of the date's UTC noon shifted by longitude
        #[test]
        fn test_dhuhr_tracks_longitude(
            latitude in -60.0f64..60.0,
            longitude in -180.0f64..180.0,
            date in any_date(),
        ) {
            let coordinates = Coordinates::new(latitude, longitude).unwrap();
            let params = CalculationMethod::MuslimWorldLeague.parameters();
            let daily = compute_prayer_times(date, coordinates, &params).unwrap();

            let noon = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
            let expected_minutes = -longitude * 4.0;
            let actual_minutes = (daily.times.dhuhr - noon).num_minutes() as f64;
            prop_assert!((actual_minutes - expected_minutes).abs() < 20.0);
        }
    }
}
