use crate::domain::models::event_type::EventType;
use chrono::{Datelike, NaiveDate};

/// One end of a booking window, reduced to day-of-month and zero-based
/// month-of-year. Comparisons deliberately ignore the year; the window acts
/// within the currently displayed year context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBound {
    pub day: u32,
    pub month: u32,
}

impl WindowBound {
    fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month0(),
        }
    }
}

/// The event type's optional [start, end] booking window. A missing or
/// unparseable bound degrades to "unbounded" on that side rather than an
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingWindow {
    pub start: Option<WindowBound>,
    pub end: Option<WindowBound>,
}

impl BookingWindow {
    pub fn from_event_type(event_type: &EventType) -> Self {
        Self {
            start: event_type.start_date.map(WindowBound::from_date),
            end: event_type.end_date.map(WindowBound::from_date),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Whether `day` of the displayed month falls inside the window.
    /// `displayed_month` is the zero-based month index; indices past the
    /// window's end month (or before its start month) admit no day at all.
    pub fn contains(&self, displayed_month: u32, day: u32) -> bool {
        let after_start = match self.start {
            None => true,
            Some(start) => {
                displayed_month > start.month || (displayed_month == start.month && day >= start.day)
            }
        };
        let before_end = match self.end {
            None => true,
            Some(end) => {
                displayed_month < end.month || (displayed_month == end.month && day <= end.day)
            }
        };
        after_start && before_end
    }
}

/// True unless the day has already passed: a displayed month before the
/// current one admits nothing, the current month admits today onward, and
/// any later month index admits everything.
pub fn not_before_today(today: NaiveDate, displayed_month: u32, day: u32) -> bool {
    let current_month = today.month0();
    if displayed_month < current_month {
        false
    } else if displayed_month == current_month {
        day >= today.day()
    } else {
        true
    }
}

/// A day is offered iff it sits inside the booking window and has not
/// already passed. Two predicates joined by AND, nothing more.
pub fn day_selectable(window: &BookingWindow, today: NaiveDate, displayed_month: u32, day: u32) -> bool {
    window.contains(displayed_month, day) && not_before_today(today, displayed_month, day)
}
