// --- File: crates/services/noor_app/src/app_state.rs ---
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use noor_common::{config_error, log_result, validation_error, Locale, NoorError};
use noor_calendar::MAX_HIJRI_ADJUSTMENT_DAYS;
use noor_config::AppConfig;
use noor_prayer::{
    CalculationParameters, Coordinates, DailyPrayers, PrayerError, PrayerTimesCache,
};
use noor_store::{
    AdhkarCatalog, AuthStore, BookmarkStore, ChatStore, FileStorage, KeyValueStorage,
    LanguageStore, PrayerQueryStore, ReadingStore,
};
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(feature = "remote")]
use noor_api::ApiClient;
#[cfg(feature = "remote")]
use std::time::Duration;

/// Every store and service of the application, built once at start-up and
/// handed out by reference.
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub timezone: Tz,
    pub hijri_adjustment_days: i64,
    pub auth: Arc<AuthStore>,
    pub reading: Arc<ReadingStore>,
    pub bookmarks: Arc<BookmarkStore>,
    pub chat: Arc<ChatStore>,
    pub language: Arc<LanguageStore>,
    pub prayer_query: Arc<PrayerQueryStore>,
    pub prayer_cache: Arc<PrayerTimesCache>,
    pub adhkar: Arc<AdhkarCatalog>,
    #[cfg(feature = "remote")]
    pub api: Option<Arc<ApiClient>>,
}

impl AppContext {
    /// Builds the context on file storage under `storage.dir`.
    pub fn from_config(config: AppConfig) -> Result<Self, NoorError> {
        let storage = Arc::new(FileStorage::new(&config.storage.dir));
        Self::new(config, storage)
    }

    /// Builds the context on an explicit storage backend. Nothing is read
    /// from storage until [`AppContext::hydrate`].
    pub fn new(config: AppConfig, storage: Arc<dyn KeyValueStorage>) -> Result<Self, NoorError> {
        let locale: Locale = config.app.locale.parse().map_err(config_error)?;
        let timezone: Tz = config
            .location
            .timezone
            .parse()
            .map_err(|e| config_error(format!("timezone '{}': {}", config.location.timezone, e)))?;
        let coordinates = Coordinates::new(config.location.latitude, config.location.longitude)
            .map_err(validation_error)?;
        let params = CalculationParameters::from_settings(
            &config.prayer.method,
            &config.prayer.madhab,
            &config.prayer.high_latitude_rule,
            &config.prayer.adjustments,
        )
        .map_err(config_error)?;
        let hijri_adjustment_days = config.calendar.hijri_adjustment_days;
        let hijri_range = -MAX_HIJRI_ADJUSTMENT_DAYS..=MAX_HIJRI_ADJUSTMENT_DAYS;
        if !hijri_range.contains(&hijri_adjustment_days) {
            return Err(config_error(format!(
                "calendar.hijri_adjustment_days {hijri_adjustment_days} is outside {hijri_range:?}"
            )));
        }
        let adhkar = AdhkarCatalog::bundled()?;

        let bookmarks = if config.storage.persist_bookmarks {
            BookmarkStore::persisted(storage.clone())
        } else {
            BookmarkStore::in_memory()
        };
        let today = Utc::now().with_timezone(&timezone).date_naive();
        let auth = Arc::new(AuthStore::new(storage.clone()));
        let chat = Arc::new(ChatStore::new());

        #[cfg(feature = "remote")]
        let api = if config.api.base_url.trim().is_empty() {
            None
        } else {
            let client = ApiClient::new(
                config.api.base_url.clone(),
                Duration::from_secs(config.api.timeout_secs),
                auth.clone(),
                chat.clone(),
            )?;
            Some(Arc::new(client))
        };

        debug!(method = %params.method, %locale, %timezone, "Built application context");

        Ok(Self {
            timezone,
            hijri_adjustment_days,
            auth,
            reading: Arc::new(ReadingStore::new(storage)),
            bookmarks: Arc::new(bookmarks),
            chat,
            language: Arc::new(LanguageStore::new(locale)),
            prayer_query: Arc::new(PrayerQueryStore::new(today, coordinates)),
            prayer_cache: Arc::new(PrayerTimesCache::new(params, config.prayer.cache_capacity)),
            adhkar: Arc::new(adhkar),
            #[cfg(feature = "remote")]
            api,
            config: Arc::new(config),
        })
    }

    /// Loads persisted state into the auth, reading and bookmark stores.
    ///
    /// A store that fails to load keeps its defaults; the failure is logged
    /// and does not stop start-up.
    pub async fn hydrate(&self) {
        let _ = log_result(
            self.auth.store().hydrate().await,
            "Session restored",
            "Failed to restore session",
        );
        let _ = log_result(
            self.reading.store().hydrate().await,
            "Reading position restored",
            "Failed to restore reading position",
        );
        let _ = log_result(
            self.bookmarks.store().hydrate().await,
            "Bookmarks restored",
            "Failed to restore bookmarks",
        );
        info!(
            authenticated = self.auth.is_authenticated(),
            guest = self.auth.is_guest(),
            "Application state restored"
        );
    }

    pub fn locale(&self) -> Locale {
        self.language.locale()
    }

    /// Today's date at the configured location.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Prayer times for the date and place held by the prayer query store.
    pub fn prayer_times(&self) -> Result<DailyPrayers, PrayerError> {
        self.prayer_query.prayer_times(&self.prayer_cache)
    }
}
