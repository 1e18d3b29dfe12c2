// --- File: crates/noor_common/src/models.rs ---

// Data structures shared by the calendar, prayer and store crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for dates, times and prayer names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fr")]
    French,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::English, Locale::Arabic, Locale::French];

    /// BCP 47 language code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
            Locale::French => "fr",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Arabic)
    }

    /// Rewrites ASCII digits in `text` with the digits of this locale.
    ///
    /// Arabic uses Arabic-Indic digits (٠١٢٣٤٥٦٧٨٩); other locales are
    /// returned unchanged.
    pub fn localize_digits(self, text: &str) -> String {
        match self {
            Locale::Arabic => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
            _ => text.to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    /// Accepts bare codes and region-qualified tags ("ar-SA", "en_GB").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::English),
            "ar" => Ok(Locale::Arabic),
            "fr" => Ok(Locale::French),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}
