use crate::domain::models::user::WeekStart;
use chrono::{Datelike, NaiveDate};

/// One cell of the month grid: either a leading placeholder that pads the
/// first week into alignment, or a numbered calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Placeholder,
    Day(u32),
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Number of placeholder cells before day 1. The weekday index of the 1st is
/// Sunday-based; a Monday week start shifts it back by one, wrapping so that
/// a month starting on Sunday pads with 6 cells, never -1.
pub fn leading_placeholders(year: i32, month: u32, week_start: WeekStart) -> u32 {
    let weekday_of_first = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let shift = match week_start {
        WeekStart::Sunday => 0,
        WeekStart::Monday => 1,
    };
    (weekday_of_first + 7 - shift) % 7
}

/// Builds the ordered cell sequence for one month: placeholders first, then
/// one cell per day from 1 to the month's day count. `month` is 1-based.
pub fn build_month_cells(year: i32, month: u32, week_start: WeekStart) -> Vec<CalendarCell> {
    let mut cells = Vec::new();
    for _ in 0..leading_placeholders(year, month, week_start) {
        cells.push(CalendarCell::Placeholder);
    }
    for day in 1..=days_in_month(year, month) {
        cells.push(CalendarCell::Day(day));
    }
    cells
}

/// Weekday column headers in display order.
pub fn weekday_headers(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    }
}
