use chrono::{Datelike, Duration, NaiveDate};

/// ISO-8601 week number (1..=53) of `date`.
///
/// ISO weeks start on Monday and are identified by their Thursday: the week
/// belongs to the year its Thursday falls in, and week 1 is the week holding
/// that year's first Thursday.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    // Monday = 1 ... Sunday = 7
    let weekday = date.weekday().number_from_monday() as i64;
    let thursday = match date.checked_add_signed(Duration::days(4 - weekday)) {
        Some(thursday) => thursday,
        None => return date.iso_week().week(),
    };
    let year_start = match NaiveDate::from_ymd_opt(thursday.year(), 1, 1) {
        Some(start) => start,
        None => return date.iso_week().week(),
    };

    let days = thursday.signed_duration_since(year_start).num_days();
    // ceil((days + 1) / 7)
    (days / 7 + 1) as u32
}
