// --- File: crates/noor_calendar/src/hijri.rs ---
use chrono::{Datelike, NaiveDate, TimeDelta};
use noor_common::Locale;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// First Gregorian year covered by the Umm al-Qura table.
pub const UMM_AL_QURA_MIN_YEAR: i32 = 1938;
/// Last Gregorian year covered by the Umm al-Qura table.
pub const UMM_AL_QURA_MAX_YEAR: i32 = 2076;

/// Largest moon-sighting correction applied, in either direction.
pub const MAX_HIJRI_ADJUSTMENT_DAYS: i64 = 30;

/// Julian day number of 1 Muharram 1 AH (civil epoch) minus one.
const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;
/// `NaiveDate::num_days_from_ce` + this = Julian day number.
const CE_TO_JDN: i64 = 1_721_425;

const MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const MONTHS_FR: [&str; 12] = [
    "Mouharram",
    "Safar",
    "Rabia al awal",
    "Rabia ath-thani",
    "Joumada al oula",
    "Joumada ath-thania",
    "Rajab",
    "Chaabane",
    "Ramadan",
    "Chawwal",
    "Dhou al qi`da",
    "Dhou al-hijja",
];

/// Which calendar table produced a [`HijriDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HijriSource {
    /// Official Saudi Umm al-Qura calendar.
    UmmAlQura,
    /// Arithmetic (tabular) civil calendar, used outside the table range.
    Tabular,
}

/// A date in the Islamic (Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i64,
    /// 1 = Muharram ... 12 = Dhu al-Hijjah
    pub month: u32,
    pub day: u32,
    pub source: HijriSource,
}

impl HijriDate {
    /// Localized month name.
    pub fn month_name(&self, locale: Locale) -> &'static str {
        month_name(self.month, locale)
    }

    /// Day, month name and year, e.g. `1 Ramadan 1445 AH` or `١ رمضان ١٤٤٥ هـ`.
    pub fn format(&self, locale: Locale) -> String {
        let text = format!(
            "{} {} {} {}",
            self.day,
            self.month_name(locale),
            self.year,
            era_suffix(locale)
        );
        locale.localize_digits(&text)
    }
}

/// Localized Hijri month name for `month` in 1..=12.
pub fn month_name(month: u32, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::English => &MONTHS_EN,
        Locale::Arabic => &MONTHS_AR,
        Locale::French => &MONTHS_FR,
    };
    match month {
        1..=12 => names[(month - 1) as usize],
        _ => "?",
    }
}

pub(crate) fn era_suffix(locale: Locale) -> &'static str {
    match locale {
        Locale::Arabic => "هـ",
        Locale::English | Locale::French => "AH",
    }
}

/// Converts a Gregorian date to the Hijri calendar.
///
/// Uses the Umm al-Qura table inside its coverage and the tabular calendar
/// elsewhere, so every date has an answer.
pub fn to_hijri(date: NaiveDate) -> HijriDate {
    umm_al_qura(date).unwrap_or_else(|| tabular_hijri(date))
}

/// Like [`to_hijri`] after shifting `date` by `offset_days` (local moon
/// sighting, e.g. -1 when the local calendar runs a day behind Makkah).
///
/// The offset is clamped to [`MAX_HIJRI_ADJUSTMENT_DAYS`].
pub fn to_hijri_adjusted(date: NaiveDate, offset_days: i64) -> HijriDate {
    let offset = offset_days.clamp(-MAX_HIJRI_ADJUSTMENT_DAYS, MAX_HIJRI_ADJUSTMENT_DAYS);
    let shifted = TimeDelta::try_days(offset)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date);
    to_hijri(shifted)
}

/// Formats the Hijri date of `date` for display.
pub fn format_hijri_date(date: NaiveDate, locale: Locale) -> String {
    to_hijri(date).format(locale)
}

fn umm_al_qura(date: NaiveDate) -> Option<HijriDate> {
    if !(UMM_AL_QURA_MIN_YEAR..=UMM_AL_QURA_MAX_YEAR).contains(&date.year()) {
        return None;
    }
    match hijri_date::HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    ) {
        Ok(hd) => Some(HijriDate {
            year: hd.year() as i64,
            month: hd.month() as u32,
            day: hd.day() as u32,
            source: HijriSource::UmmAlQura,
        }),
        Err(e) => {
            debug!("Umm al-Qura lookup failed for {}: {}", date, e);
            None
        }
    }
}

/// Arithmetic Islamic calendar (30-year cycle, civil epoch).
///
/// Proleptic: dates before the Hijra yield years <= 0.
pub fn tabular_hijri(date: NaiveDate) -> HijriDate {
    let jdn = date.num_days_from_ce() as i64 + CE_TO_JDN;

    let mut l = jdn - ISLAMIC_EPOCH_JDN + 10632;
    let n = (l - 1).div_euclid(10631);
    l = l - 10631 * n + 354;
    let j = ((10985 - l) / 5316) * ((50 * l) / 17719) + (l / 5670) * ((43 * l) / 15238);
    l = l - ((30 - j) / 15) * ((17719 * j) / 50) - (j / 16) * ((15238 * j) / 43) + 29;
    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year = 30 * n + j - 30;

    HijriDate {
        year,
        month: month as u32,
        day: day as u32,
        source: HijriSource::Tabular,
    }
}
