// --- File: crates/services/noor_app/src/report.rs ---
//! Plain-text rendering of the calendar, prayer and adhkar views.

use chrono::{Datelike, NaiveDate};
use noor_calendar::{weekday_labels, CalendarMonth};
use noor_common::Locale;
use noor_prayer::DisplayRow;
use noor_store::AdhkarItem;
use std::fmt::Write;

const CELL: usize = 5;

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

/// The month grid, Monday first. `today` is marked with `*`.
pub fn render_calendar(month: &CalendarMonth, today: NaiveDate, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month.header(locale));

    let labels: String = weekday_labels(locale)
        .iter()
        .map(|label| pad(&label.chars().take(3).collect::<String>(), CELL))
        .collect();
    let _ = writeln!(out, "{labels}");

    for week in &month.weeks {
        let line: String = week
            .iter()
            .map(|slot| match slot {
                Some(day) => {
                    let number = locale.localize_digits(&day.day().to_string());
                    let marker = if *day == today { "*" } else { "" };
                    pad(&format!("{number}{marker}"), CELL)
                }
                None => " ".repeat(CELL),
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// One `label  time` line per row, with `next` marked by an arrow.
pub fn render_prayers(rows: &[DisplayRow], next: Option<&str>) -> String {
    let width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|row| {
            let marker = if Some(row.label.as_str()) == next { "→" } else { " " };
            let gap = " ".repeat(width - row.label.chars().count());
            format!("{marker} {}{gap}  {}\n", row.label, row.time)
        })
        .collect()
}

pub fn render_adhkar(items: &[&AdhkarItem], locale: Locale) -> String {
    let mut out = String::new();
    for item in items {
        let times = locale.localize_digits(&item.count.to_string());
        let _ = writeln!(out, "{}. {} (×{})", item.order, item.content, times);
        if locale != Locale::Arabic {
            let _ = writeln!(out, "   {}", item.transliteration);
            let _ = writeln!(out, "   {}", item.translation);
        }
        if let Some(reference) = &item.reference {
            let _ = writeln!(out, "   [{reference}]");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use noor_store::{AdhkarCatalog, AdhkarPeriod};

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_calendar_marks_today_and_pads_first_week() {
        let month = CalendarMonth::for_date(d(2024, 2, 14), 0);
        let text = render_calendar(&month, d(2024, 2, 14), Locale::English);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "February 2024 · Rajab – Sha'ban 1445 AH");
        assert_eq!(lines[1], "  Mon  Tue  Wed  Thu  Fri  Sat  Sun");
        assert_eq!(lines[2], "                   1    2    3    4");
        assert!(text.contains("14*"));
        assert_eq!(lines.len(), 2 + month.weeks.len());
    }

    #[test]
    fn test_prayer_rows_align_and_mark_next() {
        let rows = vec![
            DisplayRow {
                label: "Fajr".to_string(),
                time: "5:07 AM".to_string(),
            },
            DisplayRow {
                label: "Sunrise".to_string(),
                time: "6:23 AM".to_string(),
            },
        ];

        let text = render_prayers(&rows, Some("Sunrise"));

        assert_eq!(text, "  Fajr     5:07 AM\n→ Sunrise  6:23 AM\n");
    }

    #[test]
    fn test_adhkar_lists_reference() {
        let catalog = AdhkarCatalog::bundled().unwrap();
        let morning = catalog.for_period(AdhkarPeriod::Morning);

        let text = render_adhkar(&morning, Locale::English);

        assert!(text.starts_with("1. "));
        assert!(text.contains("[Muslim 2723]"));
    }
}
