// --- File: crates/noor_calendar/src/grid.rs ---
use crate::hijri::{era_suffix, to_hijri_adjusted, HijriDate};
use chrono::{Datelike, Months, NaiveDate};
use noor_common::Locale;
use serde::Serialize;
use tracing::debug;

/// One calendar row, Monday first. `None` marks a padding slot.
pub type CalendarWeek = [Option<NaiveDate>; 7];

const GREGORIAN_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GREGORIAN_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const GREGORIAN_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Builds the month grid for the month containing `date`.
///
/// Every week has exactly 7 slots. The first week starts with as many empty
/// slots as the 1st is past Monday, the days follow in order and the last
/// week is padded with empty slots.
pub fn generate_calendar_grid(date: NaiveDate) -> Vec<CalendarWeek> {
    let first = first_of_month(date);
    // Sunday-based weekday 0 moves to slot 6, the rest shift down by one
    let leading = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(first.year(), first.month()) as usize;

    let mut slots: Vec<Option<NaiveDate>> = Vec::with_capacity(42);
    slots.extend(std::iter::repeat(None).take(leading));
    slots.extend(first.iter_days().take(days).map(Some));
    while slots.len() % 7 != 0 {
        slots.push(None);
    }

    let weeks: Vec<CalendarWeek> = slots
        .chunks(7)
        .map(|chunk| {
            let mut week: CalendarWeek = [None; 7];
            week.copy_from_slice(chunk);
            week
        })
        .collect();

    debug!(
        "Calendar grid for {}-{:02}: {} leading, {} days, {} weeks",
        first.year(),
        first.month(),
        leading,
        days,
        weeks.len()
    );
    weeks
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(0)
}

/// Moves `date` by `delta` months, clamping the day to the target month
/// (31 January + 1 month = 29 February in a leap year).
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Localized Gregorian month name for `month` in 1..=12.
pub fn gregorian_month_name(month: u32, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::English => &GREGORIAN_EN,
        Locale::Arabic => &GREGORIAN_AR,
        Locale::French => &GREGORIAN_FR,
    };
    match month {
        1..=12 => names[(month - 1) as usize],
        _ => "?",
    }
}

/// Short weekday headers in grid order (Monday first).
pub fn weekday_labels(locale: Locale) -> [&'static str; 7] {
    match locale {
        Locale::English => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        Locale::French => ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
        Locale::Arabic => [
            "الإثنين",
            "الثلاثاء",
            "الأربعاء",
            "الخميس",
            "الجمعة",
            "السبت",
            "الأحد",
        ],
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// A rendered month: the grid plus the Hijri dates spanned by it.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<CalendarWeek>,
    pub hijri_start: HijriDate,
    pub hijri_end: HijriDate,
}

impl CalendarMonth {
    /// Builds the month containing `date`; `hijri_offset_days` is the
    /// moon-sighting correction applied to the Hijri span.
    pub fn for_date(date: NaiveDate, hijri_offset_days: i64) -> Self {
        let first = first_of_month(date);
        let last_day = days_in_month(first.year(), first.month());
        let last = first.with_day(last_day).unwrap_or(first);

        Self {
            year: first.year(),
            month: first.month(),
            weeks: generate_calendar_grid(first),
            hijri_start: to_hijri_adjusted(first, hijri_offset_days),
            hijri_end: to_hijri_adjusted(last, hijri_offset_days),
        }
    }

    /// Title line, e.g. `February 2024 · Rajab – Sha'ban 1445 AH`.
    pub fn header(&self, locale: Locale) -> String {
        let gregorian = format!(
            "{} {}",
            gregorian_month_name(self.month, locale),
            self.year
        );
        let (start, end) = (&self.hijri_start, &self.hijri_end);
        let hijri = if start.year != end.year {
            format!(
                "{} {} – {} {}",
                start.month_name(locale),
                start.year,
                end.month_name(locale),
                end.year
            )
        } else if start.month != end.month {
            format!(
                "{} – {} {}",
                start.month_name(locale),
                end.month_name(locale),
                end.year
            )
        } else {
            format!("{} {}", start.month_name(locale), start.year)
        };
        locale.localize_digits(&format!("{} · {} {}", gregorian, hijri, era_suffix(locale)))
    }
}
