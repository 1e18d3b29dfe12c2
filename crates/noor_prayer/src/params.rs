// --- File: crates/noor_prayer/src/params.rs ---
use crate::logic::PrayerError;
use noor_common::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    /// Validated constructor; rejects non-finite and out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PrayerError> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;
        Ok(coordinates)
    }

    pub fn validate(&self) -> Result<(), PrayerError> {
        let valid = self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude);
        if valid {
            Ok(())
        } else {
            Err(PrayerError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// The five daily prayers plus sunrise, which ends the Fajr window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// In chronological order within a day.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        }
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Arabic, Prayer::Fajr) => "الفجر",
            (Locale::Arabic, Prayer::Sunrise) => "الشروق",
            (Locale::Arabic, Prayer::Dhuhr) => "الظهر",
            (Locale::Arabic, Prayer::Asr) => "العصر",
            (Locale::Arabic, Prayer::Maghrib) => "المغرب",
            (Locale::Arabic, Prayer::Isha) => "العشاء",
            (Locale::French, Prayer::Fajr) => "Fajr",
            (Locale::French, Prayer::Sunrise) => "Lever du soleil",
            (Locale::French, Prayer::Dhuhr) => "Dhouhr",
            (Locale::French, Prayer::Asr) => "Asr",
            (Locale::French, Prayer::Maghrib) => "Maghrib",
            (Locale::French, Prayer::Isha) => "Icha",
            (Locale::English, Prayer::Fajr) => "Fajr",
            (Locale::English, Prayer::Sunrise) => "Sunrise",
            (Locale::English, Prayer::Dhuhr) => "Dhuhr",
            (Locale::English, Prayer::Asr) => "Asr",
            (Locale::English, Prayer::Maghrib) => "Maghrib",
            (Locale::English, Prayer::Isha) => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Prayer {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Prayer::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| PrayerError::UnknownPrayer(s.to_string()))
    }
}

/// Authority whose twilight angles are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    #[default]
    MuslimWorldLeague,
    Egyptian,
    Karachi,
    UmmAlQura,
    Dubai,
    NorthAmerica,
    Kuwait,
    Qatar,
    Singapore,
    Tehran,
    Turkey,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 11] = [
        CalculationMethod::MuslimWorldLeague,
        CalculationMethod::Egyptian,
        CalculationMethod::Karachi,
        CalculationMethod::UmmAlQura,
        CalculationMethod::Dubai,
        CalculationMethod::NorthAmerica,
        CalculationMethod::Kuwait,
        CalculationMethod::Qatar,
        CalculationMethod::Singapore,
        CalculationMethod::Tehran,
        CalculationMethod::Turkey,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CalculationMethod::MuslimWorldLeague => "muslim_world_league",
            CalculationMethod::Egyptian => "egyptian",
            CalculationMethod::Karachi => "karachi",
            CalculationMethod::UmmAlQura => "umm_al_qura",
            CalculationMethod::Dubai => "dubai",
            CalculationMethod::NorthAmerica => "north_america",
            CalculationMethod::Kuwait => "kuwait",
            CalculationMethod::Qatar => "qatar",
            CalculationMethod::Singapore => "singapore",
            CalculationMethod::Tehran => "tehran",
            CalculationMethod::Turkey => "turkey",
        }
    }

    /// Angles, intervals and built-in minute corrections of this method.
    pub fn parameters(self) -> CalculationParameters {
        use CalculationMethod::*;
        let (fajr_angle, isha) = match self {
            MuslimWorldLeague => (18.0, IshaRule::Angle(17.0)),
            Egyptian => (19.5, IshaRule::Angle(17.5)),
            Karachi => (18.0, IshaRule::Angle(18.0)),
            UmmAlQura => (18.5, IshaRule::Interval(90)),
            Dubai => (18.2, IshaRule::Angle(18.2)),
            NorthAmerica => (15.0, IshaRule::Angle(15.0)),
            Kuwait => (18.0, IshaRule::Angle(17.5)),
            Qatar => (18.0, IshaRule::Interval(90)),
            Singapore => (20.0, IshaRule::Angle(18.0)),
            Tehran => (17.7, IshaRule::Angle(14.0)),
            Turkey => (18.0, IshaRule::Angle(17.0)),
        };
        let method_adjustments = match self {
            MuslimWorldLeague | Egyptian | Karachi | NorthAmerica | Singapore => PrayerAdjustments {
                dhuhr: 1,
                ..PrayerAdjustments::default()
            },
            Dubai => PrayerAdjustments {
                sunrise: -3,
                dhuhr: 3,
                asr: 3,
                maghrib: 3,
                ..PrayerAdjustments::default()
            },
            Turkey => PrayerAdjustments {
                sunrise: -7,
                dhuhr: 5,
                asr: 4,
                maghrib: 7,
                ..PrayerAdjustments::default()
            },
            UmmAlQura | Kuwait | Qatar | Tehran => PrayerAdjustments::default(),
        };

        CalculationParameters {
            method: self,
            fajr_angle,
            isha,
            maghrib_angle: (self == Tehran).then_some(4.5),
            madhab: Madhab::default(),
            high_latitude_rule: HighLatitudeRule::default(),
            method_adjustments,
            adjustments: PrayerAdjustments::default(),
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CalculationMethod {
    type Err = PrayerError;

    /// Accepts the snake_case key plus the common short names ("mwl", "isna").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        match wanted.as_str() {
            "mwl" => return Ok(CalculationMethod::MuslimWorldLeague),
            "isna" => return Ok(CalculationMethod::NorthAmerica),
            "makkah" => return Ok(CalculationMethod::UmmAlQura),
            _ => {}
        }
        CalculationMethod::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| PrayerError::UnknownMethod(s.to_string()))
    }
}

/// School of jurisprudence; decides the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Madhab {
    #[default]
    Shafi,
    Hanafi,
}

impl Madhab {
    /// Shadow length as a multiple of object height at Asr.
    pub fn shadow_factor(self) -> f64 {
        match self {
            Madhab::Shafi => 1.0,
            Madhab::Hanafi => 2.0,
        }
    }
}

impl FromStr for Madhab {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shafi" | "standard" => Ok(Madhab::Shafi),
            "hanafi" => Ok(Madhab::Hanafi),
            _ => Err(PrayerError::UnknownMadhab(s.to_string())),
        }
    }
}

/// Fallback for Fajr and Isha when twilight never reaches the method's angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighLatitudeRule {
    #[default]
    MiddleOfTheNight,
    SeventhOfTheNight,
    TwilightAngle,
}

impl HighLatitudeRule {
    /// Fraction of the night allowed between the time and sunrise/sunset.
    pub fn night_portion(self, angle: f64) -> f64 {
        match self {
            HighLatitudeRule::MiddleOfTheNight => 1.0 / 2.0,
            HighLatitudeRule::SeventhOfTheNight => 1.0 / 7.0,
            HighLatitudeRule::TwilightAngle => angle / 60.0,
        }
    }
}

impl FromStr for HighLatitudeRule {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "middle_of_the_night" => Ok(HighLatitudeRule::MiddleOfTheNight),
            "seventh_of_the_night" => Ok(HighLatitudeRule::SeventhOfTheNight),
            "twilight_angle" => Ok(HighLatitudeRule::TwilightAngle),
            _ => Err(PrayerError::UnknownHighLatitudeRule(s.to_string())),
        }
    }
}

/// How Isha is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IshaRule {
    /// Sun this many degrees below the horizon.
    Angle(f64),
    /// Fixed number of minutes after Maghrib.
    Interval(i64),
}

/// Largest user adjustment accepted from configuration, in either direction.
pub const MAX_ADJUSTMENT_MINUTES: i64 = 24 * 60;

/// Per-prayer minute offsets added after the astronomical computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrayerAdjustments {
    pub fajr: i64,
    pub sunrise: i64,
    pub dhuhr: i64,
    pub asr: i64,
    pub maghrib: i64,
    pub isha: i64,
}

impl PrayerAdjustments {
    /// Builds offsets from a `prayer name -> minutes` map such as the
    /// `[prayer.adjustments]` config table.
    ///
    /// Offsets beyond [`MAX_ADJUSTMENT_MINUTES`] are rejected.
    pub fn from_map(map: &BTreeMap<String, i64>) -> Result<Self, PrayerError> {
        let mut adjustments = Self::default();
        for (name, &minutes) in map {
            let prayer: Prayer = name.parse()?;
            if !(-MAX_ADJUSTMENT_MINUTES..=MAX_ADJUSTMENT_MINUTES).contains(&minutes) {
                return Err(PrayerError::AdjustmentOutOfRange { prayer, minutes });
            }
            *adjustments.get_mut(prayer) = minutes;
        }
        Ok(adjustments)
    }

    pub fn get(&self, prayer: Prayer) -> i64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    fn get_mut(&mut self, prayer: Prayer) -> &mut i64 {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
        }
    }
}

/// Everything the computation needs besides date and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    pub method: CalculationMethod,
    pub fajr_angle: f64,
    pub isha: IshaRule,
    /// Only Tehran sets Maghrib by angle; everyone else uses sunset.
    pub maghrib_angle: Option<f64>,
    pub madhab: Madhab,
    pub high_latitude_rule: HighLatitudeRule,
    /// Corrections the method itself prescribes.
    pub method_adjustments: PrayerAdjustments,
    /// User corrections, added on top of `method_adjustments`.
    pub adjustments: PrayerAdjustments,
}

impl CalculationParameters {
    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Total minutes to add to `prayer`.
    pub fn offset_minutes(&self, prayer: Prayer) -> i64 {
        self.method_adjustments
            .get(prayer)
            .saturating_add(self.adjustments.get(prayer))
    }

    /// Builds parameters from the string settings of the `[prayer]` config section.
    pub fn from_settings(
        method: &str,
        madhab: &str,
        high_latitude_rule: &str,
        adjustments: &BTreeMap<String, i64>,
    ) -> Result<Self, PrayerError> {
        let method: CalculationMethod = method.parse()?;
        Ok(method
            .parameters()
            .with_madhab(madhab.parse()?)
            .with_high_latitude_rule(high_latitude_rule.parse()?)
            .with_adjustments(PrayerAdjustments::from_map(adjustments)?))
    }
}

impl Default for CalculationParameters {
    fn default() -> Self {
        CalculationMethod::default().parameters()
    }
}
