// --- File: crates/noor_store/src/prayer_query.rs ---
use crate::store::Store;
use chrono::{NaiveDate, TimeZone, Utc};
use noor_prayer::{Coordinates, DailyPrayers, PrayerError, PrayerTimesCache};
use serde::{Deserialize, Serialize};

/// Day and place the prayer screen shows. The times themselves are derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerQueryState {
    pub current_date: NaiveDate,
    pub coordinates: Coordinates,
}

pub struct PrayerQueryStore {
    store: Store<PrayerQueryState>,
}

impl PrayerQueryStore {
    pub fn new(current_date: NaiveDate, coordinates: Coordinates) -> Self {
        Self {
            store: Store::in_memory(
                "prayer_query",
                PrayerQueryState {
                    current_date,
                    coordinates,
                },
            ),
        }
    }

    pub fn store(&self) -> &Store<PrayerQueryState> {
        &self.store
    }

    pub fn state(&self) -> PrayerQueryState {
        self.store.snapshot()
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.store.mutate(|s| {
            let changed = s.current_date != date;
            s.current_date = date;
            changed
        });
    }

    pub fn set_coordinates(&self, coordinates: Coordinates) {
        self.store.mutate(|s| {
            let changed = s.coordinates != coordinates;
            s.coordinates = coordinates;
            changed
        });
    }

    pub fn next_day(&self) {
        self.store
            .mutate(|s| match s.current_date.succ_opt() {
                Some(next) => {
                    s.current_date = next;
                    true
                }
                None => false,
            });
    }

    pub fn previous_day(&self) {
        self.store
            .mutate(|s| match s.current_date.pred_opt() {
                Some(previous) => {
                    s.current_date = previous;
                    true
                }
                None => false,
            });
    }

    /// Back to today's date in `tz`, the zone of the configured location.
    pub fn reset_to_today<Z: TimeZone>(&self, tz: &Z) {
        self.set_date(Utc::now().with_timezone(tz).date_naive());
    }

    /// Prayer times for the current date and coordinates, through `cache`.
    pub fn prayer_times(&self, cache: &PrayerTimesCache) -> Result<DailyPrayers, PrayerError> {
        let PrayerQueryState {
            current_date,
            coordinates,
        } = self.state();
        cache.get_or_compute(current_date, coordinates)
    }
}
