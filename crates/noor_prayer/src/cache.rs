// --- File: crates/noor_prayer/src/cache.rs ---
use crate::logic::{compute_prayer_times, DailyPrayers, PrayerError};
use crate::params::{CalculationParameters, Coordinates};
use chrono::NaiveDate;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Coordinates closer than this (in degrees) share a cache entry.
/// 1e-4 degrees is about 11 m, far below what moves a time by a minute.
const COORDINATE_QUANTUM: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    date: NaiveDate,
    latitude: i64,
    longitude: i64,
}

impl CacheKey {
    fn new(date: NaiveDate, coordinates: Coordinates) -> Self {
        Self {
            date,
            latitude: (coordinates.latitude / COORDINATE_QUANTUM).round() as i64,
            longitude: (coordinates.longitude / COORDINATE_QUANTUM).round() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<CacheKey, DailyPrayers>,
    order: VecDeque<CacheKey>,
    stats: CacheStats,
}

/// Bounded memo of [`compute_prayer_times`] for one parameter set.
///
/// Entries are evicted oldest-inserted first. Errors are never cached.
pub struct PrayerTimesCache {
    params: CalculationParameters,
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl PrayerTimesCache {
    pub fn new(params: CalculationParameters, capacity: usize) -> Self {
        Self {
            params,
            capacity: capacity.max(1),
            inner: Mutex::new(CacheInner::default()),
        }
    }

    pub fn params(&self) -> &CalculationParameters {
        &self.params
    }

    pub fn get_or_compute(
        &self,
        date: NaiveDate,
        coordinates: Coordinates,
    ) -> Result<DailyPrayers, PrayerError> {
        let key = CacheKey::new(date, coordinates);
        {
            let mut inner = self.lock();
            if let Some(hit) = inner.entries.get(&key).copied() {
                inner.stats.hits += 1;
                return Ok(hit);
            }
            inner.stats.misses += 1;
        }

        let computed = compute_prayer_times(date, coordinates, &self.params)?;

        let mut inner = self.lock();
        if inner.entries.insert(key, computed).is_none() {
            inner.order.push_back(key);
        }
        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.entries.remove(&oldest);
                trace!(date = %oldest.date, "Evicted cached prayer times");
            }
        }
        Ok(computed)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    // A panic while holding the lock leaves the maps consistent, so a
    // poisoned mutex is still usable.
    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
