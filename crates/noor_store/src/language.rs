// --- File: crates/noor_store/src/language.rs ---
use crate::store::Store;
use noor_common::Locale;
use tracing::info;

pub struct LanguageStore {
    store: Store<Locale>,
}

impl LanguageStore {
    pub fn new(initial: Locale) -> Self {
        Self {
            store: Store::in_memory("language", initial),
        }
    }

    pub fn store(&self) -> &Store<Locale> {
        &self.store
    }

    pub fn locale(&self) -> Locale {
        self.store.snapshot()
    }

    pub fn set_locale(&self, locale: Locale) {
        if self.store.mutate(|current| {
            let changed = *current != locale;
            *current = locale;
            changed
        }) {
            info!(%locale, "Language changed");
        }
    }
}
