//! Prayer times from date and position.
//!
//! [`compute_prayer_times`] is a pure function; callers that recompute often
//! for the same day and place go through [`PrayerTimesCache`].

pub mod astronomy;
pub mod cache;
#[cfg(test)]
mod cache_test;
pub mod format;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod params;

pub use cache::{CacheStats, PrayerTimesCache};
pub use format::{format_time, DisplayRow};
pub use logic::{compute_prayer_times, DailyPrayers, PrayerError, PrayerTimes, SunnahTimes};
pub use params::{
    CalculationMethod, CalculationParameters, Coordinates, HighLatitudeRule, IshaRule, Madhab,
    Prayer, PrayerAdjustments, MAX_ADJUSTMENT_MINUTES,
};
