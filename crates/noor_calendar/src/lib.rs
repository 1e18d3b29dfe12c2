//! Calendar utilities: Gregorian → Hijri conversion and formatting, the
//! Monday-first month grid used by calendar views, and ISO-8601 week numbers.

pub mod grid;
#[cfg(test)]
mod grid_test;
pub mod hijri;
#[cfg(test)]
mod hijri_test;
#[cfg(test)]
mod logic_proptest;
pub mod week;

pub use grid::{
    days_in_month, generate_calendar_grid, gregorian_month_name, shift_month, weekday_labels,
    CalendarMonth, CalendarWeek,
};
pub use hijri::{
    format_hijri_date, to_hijri, to_hijri_adjusted, HijriDate, HijriSource,
    MAX_HIJRI_ADJUSTMENT_DAYS,
};
pub use week::iso_week_number;
