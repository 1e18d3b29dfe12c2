#[cfg(test)]
mod tests {
    use crate::cache::{CacheStats, PrayerTimesCache};
    use crate::logic::{compute_prayer_times, PrayerError};
    use crate::params::{CalculationParameters, Coordinates};
    use chrono::NaiveDate;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn makkah() -> Coordinates {
        Coordinates::new(21.4225, 39.8262).unwrap()
    }

    #[test]
    fn test_second_lookup_is_a_hit() {
        let cache = PrayerTimesCache::new(CalculationParameters::default(), 4);

        let first = cache.get_or_compute(d(2024, 3, 11), makkah()).unwrap();
        let second = cache.get_or_compute(d(2024, 3, 11), makkah()).unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_value_matches_direct_computation() {
        let params = CalculationParameters::default();
        let cache = PrayerTimesCache::new(params, 4);

        let cached = cache.get_or_compute(d(2024, 6, 1), makkah()).unwrap();
        let direct = compute_prayer_times(d(2024, 6, 1), makkah(), &params).unwrap();

        assert_eq!(cached, direct);
    }

    #[test]
    fn test_nearby_coordinates_share_an_entry() {
        let cache = PrayerTimesCache::new(CalculationParameters::default(), 4);
        let nudged = Coordinates::new(21.422_51, 39.826_19).unwrap();

        cache.get_or_compute(d(2024, 3, 11), makkah()).unwrap();
        cache.get_or_compute(d(2024, 3, 11), nudged).unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_oldest_entry_is_evicted() {
        let cache = PrayerTimesCache::new(CalculationParameters::default(), 2);

        cache.get_or_compute(d(2024, 3, 1), makkah()).unwrap();
        cache.get_or_compute(d(2024, 3, 2), makkah()).unwrap();
        cache.get_or_compute(d(2024, 3, 3), makkah()).unwrap();
        assert_eq!(cache.len(), 2);

        // 2 and 3 are still cached, 1 was dropped
        cache.get_or_compute(d(2024, 3, 3), makkah()).unwrap();
        cache.get_or_compute(d(2024, 3, 2), makkah()).unwrap();
        assert_eq!(cache.stats(), CacheStats { hits: 2, misses: 3 });

        cache.get_or_compute(d(2024, 3, 1), makkah()).unwrap();
        assert_eq!(cache.stats().misses, 4);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = PrayerTimesCache::new(CalculationParameters::default(), 4);
        let tromso = Coordinates::new(69.6492, 18.9553).unwrap();

        for _ in 0..2 {
            assert!(matches!(
                cache.get_or_compute(d(2024, 6, 21), tromso),
                Err(PrayerError::NoSunriseOrSunset { .. })
            ));
        }
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_clear_empties_the_cache() {
        let cache = PrayerTimesCache::new(CalculationParameters::default(), 4);
        cache.get_or_compute(d(2024, 3, 11), makkah()).unwrap();

        cache.clear();

        assert!(cache.is_empty());
    }
}
