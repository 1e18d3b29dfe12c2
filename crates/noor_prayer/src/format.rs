// --- File: crates/noor_prayer/src/format.rs ---
use crate::logic::DailyPrayers;
use crate::params::Prayer;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use noor_common::Locale;
use serde::Serialize;

/// Renders `instant` as a wall-clock time in `tz`.
///
/// English uses `h:mm AM/PM`, Arabic the same 12-hour clock with
/// Arabic-Indic digits and ص/م, French a 24-hour `HH:MM`.
pub fn format_time(instant: DateTime<Utc>, tz: Tz, locale: Locale) -> String {
    let local = instant.with_timezone(&tz);
    match locale {
        Locale::English => local.format("%-I:%M %p").to_string(),
        Locale::French => local.format("%H:%M").to_string(),
        Locale::Arabic => {
            let suffix = if local.hour() < 12 { "ص" } else { "م" };
            let clock = local.format("%-I:%M").to_string();
            format!("{} {}", locale.localize_digits(&clock), suffix)
        }
    }
}

/// One labelled line of a prayer timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: String,
    pub time: String,
}

fn last_third_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Last third of the night",
        Locale::Arabic => "الثلث الأخير من الليل",
        Locale::French => "Dernier tiers de la nuit",
    }
}

impl DailyPrayers {
    /// The six daily times followed by the last third of the night.
    pub fn display_rows(&self, tz: Tz, locale: Locale) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = Prayer::ALL
            .into_iter()
            .map(|prayer| DisplayRow {
                label: prayer.name(locale).to_string(),
                time: format_time(self.times.time(prayer), tz, locale),
            })
            .collect();
        rows.push(DisplayRow {
            label: last_third_label(locale).to_string(),
            time: format_time(self.sunnah.last_third_of_the_night, tz, locale),
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time_per_locale() {
        // 03:07 UTC = 06:07 in Riyadh (UTC+3, no DST)
        let morning = Utc.with_ymd_and_hms(2024, 3, 11, 3, 7, 0).unwrap();
        let tz = chrono_tz::Asia::Riyadh;

        assert_eq!(format_time(morning, tz, Locale::English), "6:07 AM");
        assert_eq!(format_time(morning, tz, Locale::French), "06:07");
        assert_eq!(format_time(morning, tz, Locale::Arabic), "٦:٠٧ ص");

        let evening = Utc.with_ymd_and_hms(2024, 3, 11, 15, 45, 0).unwrap();
        assert_eq!(format_time(evening, tz, Locale::English), "6:45 PM");
        assert_eq!(format_time(evening, tz, Locale::French), "18:45");
        assert_eq!(format_time(evening, tz, Locale::Arabic), "٦:٤٥ م");
    }

    #[test]
    fn test_format_time_noon_and_midnight() {
        let tz = chrono_tz::UTC;
        let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();

        assert_eq!(format_time(noon, tz, Locale::English), "12:00 PM");
        assert_eq!(format_time(midnight, tz, Locale::English), "12:30 AM");
        assert_eq!(format_time(midnight, tz, Locale::French), "00:30");
    }
}
