// --- File: crates/noor_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- General App Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppSection {
    /// Language code used for formatting ("en", "ar", "fr").
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Minimum log level for the `noor` targets.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            log_level: default_log_level(),
        }
    }
}

// --- Location Config ---
// Used until the user picks another position at runtime.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA time zone name used to display prayer times, e.g. "Asia/Riyadh".
    pub timezone: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        // Masjid al-Haram
        Self {
            latitude: 21.4225,
            longitude: 39.8262,
            timezone: "Asia/Riyadh".to_string(),
        }
    }
}

// --- Prayer Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PrayerConfig {
    /// Calculation method name, e.g. "muslim_world_league" or "umm_al_qura".
    #[serde(default = "default_method")]
    pub method: String,
    /// "shafi" or "hanafi".
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_high_latitude_rule")]
    pub high_latitude_rule: String,
    /// Number of computed days kept in the memoisation cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Per-prayer minute offsets keyed by prayer name ("fajr", "dhuhr", ...).
    #[serde(default)]
    pub adjustments: BTreeMap<String, i64>,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            method: default_method(),
            madhab: default_madhab(),
            high_latitude_rule: default_high_latitude_rule(),
            cache_capacity: default_cache_capacity(),
            adjustments: BTreeMap::new(),
        }
    }
}

// --- Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CalendarConfig {
    /// Moon-sighting correction applied before the Hijri conversion.
    #[serde(default)]
    pub hijri_adjustment_days: i64,
}

// --- Storage Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per persisted store.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
    /// Bookmarks are session-only unless this is switched on.
    #[serde(default)]
    pub persist_bookmarks: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            persist_bookmarks: false,
        }
    }
}

// --- Remote API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub prayer: PrayerConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_method() -> String {
    "muslim_world_league".to_string()
}

fn default_madhab() -> String {
    "shafi".to_string()
}

fn default_high_latitude_rule() -> String {
    "middle_of_the_night".to_string()
}

fn default_cache_capacity() -> usize {
    32
}

fn default_storage_dir() -> String {
    ".noor".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
