// --- File: crates/noor_store/src/adhkar.rs ---
use crate::error::StoreResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

const BUNDLED_ADHKAR: &str = include_str!("../data/adhkar.json");

/// When a dhikr is recited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdhkarType {
    Both,
    Morning,
    Evening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdhkarPeriod {
    Morning,
    Evening,
}

impl AdhkarType {
    pub fn applies_to(self, period: AdhkarPeriod) -> bool {
        matches!(
            (self, period),
            (AdhkarType::Both, _)
                | (AdhkarType::Morning, AdhkarPeriod::Morning)
                | (AdhkarType::Evening, AdhkarPeriod::Evening)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdhkarItem {
    pub order: u32,
    pub content: String,
    pub translation: String,
    pub transliteration: String,
    /// Number of repetitions.
    pub count: u32,
    #[serde(rename = "type")]
    pub kind: AdhkarType,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub benefit: Option<String>,
}

/// Read-only collection of morning and evening adhkar.
#[derive(Debug, Clone)]
pub struct AdhkarCatalog {
    items: Vec<AdhkarItem>,
}

impl AdhkarCatalog {
    /// The dataset compiled into the binary.
    pub fn bundled() -> StoreResult<Self> {
        Self::from_json(BUNDLED_ADHKAR)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        let mut items: Vec<AdhkarItem> = serde_json::from_str(json)?;
        items.sort_by_key(|item| item.order);
        debug!(count = items.len(), "Loaded adhkar");
        Ok(Self { items })
    }

    /// All items, sorted by `order`.
    pub fn items(&self) -> &[AdhkarItem] {
        &self.items
    }

    /// Items said in `period`, including those said in both, sorted by `order`.
    pub fn for_period(&self, period: AdhkarPeriod) -> Vec<&AdhkarItem> {
        self.items
            .iter()
            .filter(|item| item.kind.applies_to(period))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
