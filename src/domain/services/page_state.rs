use crate::domain::models::event_type::EventType;
use crate::domain::models::user::{User, WeekStart};
use crate::domain::services::booking_window::{day_selectable, BookingWindow};
use crate::domain::services::calendar_grid::{build_month_cells, weekday_headers, CalendarCell};
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    TwelveHour,
    TwentyFourHour,
}

impl ClockFormat {
    pub fn from_24h(use_24h: bool) -> Self {
        if use_24h {
            ClockFormat::TwentyFourHour
        } else {
            ClockFormat::TwelveHour
        }
    }

    /// Display token as the page advertises it.
    pub fn token(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "h:mma",
            ClockFormat::TwentyFourHour => "HH:mm",
        }
    }

    /// The equivalent strftime pattern.
    pub fn pattern(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%-I:%M%P",
            ClockFormat::TwentyFourHour => "%H:%M",
        }
    }
}

/// Closed set of visual states a day cell can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    Bookable,
    Unavailable,
    Selected,
}

pub fn day_state(selectable: bool, is_selected: bool) -> DayState {
    if selectable && is_selected {
        DayState::Selected
    } else if selectable {
        DayState::Bookable
    } else {
        DayState::Unavailable
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthCell {
    Placeholder,
    Day { day: u32, state: DayState },
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    /// Zero-based displayed month index, as navigated.
    pub month: u32,
    pub label: String,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<MonthCell>,
    pub can_decrement: bool,
    pub can_increment: bool,
}

/// Ephemeral view state of one booking page: the displayed month, the
/// visitor's selection and display preferences. Created per request, never
/// persisted.
pub struct PageState {
    today: NaiveDate,
    week_start: WeekStart,
    window: BookingWindow,
    time_zone: Tz,
    pub displayed_month: u32,
    pub selected: Option<DateTime<Tz>>,
    pub clock_format: ClockFormat,
}

impl PageState {
    pub fn new(user: &User, event_type: &EventType, today: NaiveDate) -> Self {
        let time_zone: Tz = user.timezone.parse().unwrap_or(chrono_tz::UTC);
        Self {
            today,
            week_start: user.week_start(),
            window: BookingWindow::from_event_type(event_type),
            time_zone,
            displayed_month: today.month0(),
            selected: None,
            clock_format: ClockFormat::TwelveHour,
        }
    }

    pub fn current_month(&self) -> u32 {
        self.today.month0()
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The previous-month control never crosses below the real current month.
    pub fn can_decrement(&self) -> bool {
        self.displayed_month > self.current_month()
    }

    /// The next-month control stops once a bounded window's end month has
    /// been reached or passed.
    pub fn can_increment(&self) -> bool {
        match self.window.end {
            None => true,
            Some(end) => self.displayed_month < end.month,
        }
    }

    pub fn decrement_month(&mut self) {
        if self.can_decrement() {
            self.displayed_month -= 1;
        }
    }

    pub fn increment_month(&mut self) {
        if self.can_increment() {
            self.displayed_month += 1;
        }
    }

    /// Clamps an externally requested month index into the navigable range,
    /// so that a hand-crafted query can reach no month the prev/next controls
    /// could not.
    pub fn clamp_month(&self, requested: u32) -> u32 {
        let floor = self.current_month();
        let mut month = requested.max(floor);
        if let Some(end) = self.window.end {
            month = month.min(end.month.max(floor));
        }
        month
    }

    pub fn show_month(&mut self, requested: u32) {
        self.displayed_month = self.clamp_month(requested);
    }

    fn displayed_year(&self) -> i32 {
        self.today.year() + (self.displayed_month / 12) as i32
    }

    fn displayed_calendar_month(&self) -> u32 {
        self.displayed_month % 12 + 1
    }

    pub fn day_selectable(&self, day: u32) -> bool {
        day_selectable(&self.window, self.today, self.displayed_month, day)
    }

    /// Sets the selection to the given day of the displayed month, at local
    /// midnight in the page's zone. Returns None (and leaves the selection
    /// untouched) when the day is not selectable.
    pub fn select_day(&mut self, day: u32) -> Option<DateTime<Tz>> {
        if !self.day_selectable(day) {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(self.displayed_year(), self.displayed_calendar_month(), day)?;
        let selected = resolve_local(date.and_hms_opt(0, 0, 0)?, self.time_zone)?;
        self.selected = Some(selected);
        self.selected
    }

    /// Re-expresses the selection in a new zone, keeping the wall-clock
    /// fields. No-op while nothing is selected.
    pub fn change_time_zone(&mut self, zone: Tz) {
        if let Some(current) = self.selected {
            if let Some(moved) = resolve_local(current.naive_local(), zone) {
                self.selected = Some(moved);
                self.time_zone = zone;
            }
        }
    }

    /// Toggles the slot display format. No-op while nothing is selected.
    pub fn change_clock_format(&mut self, use_24h: bool) {
        if self.selected.is_some() {
            self.clock_format = ClockFormat::from_24h(use_24h);
        }
    }

    pub fn render_month(&self) -> MonthView {
        let year = self.displayed_year();
        let month = self.displayed_calendar_month();

        let label = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default();

        let cells = build_month_cells(year, month, self.week_start)
            .into_iter()
            .map(|cell| match cell {
                CalendarCell::Placeholder => MonthCell::Placeholder,
                CalendarCell::Day(day) => {
                    let selectable = self.day_selectable(day);
                    let is_selected = self.selected.is_some_and(|s| {
                        s.year() == year && s.month() == month && s.day() == day
                    });
                    MonthCell::Day {
                        day,
                        state: day_state(selectable, is_selected),
                    }
                }
            })
            .collect();

        MonthView {
            month: self.displayed_month,
            label,
            weekdays: weekday_headers(self.week_start),
            cells,
            can_decrement: self.can_decrement(),
            can_increment: self.can_increment(),
        }
    }
}

fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn test_user(timezone: &str, week_start: &str) -> User {
        let mut user = User::new("demo".to_string(), timezone.to_string());
        user.week_start = week_start.to_string();
        user
    }

    fn test_event_type(start: Option<(i32, u32, u32)>, end: Option<(i32, u32, u32)>) -> EventType {
        let mut et = EventType::new("user-1".to_string(), "intro".to_string(), "Intro call".to_string(), 30);
        et.start_date = start.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        et.end_date = end.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        et
    }

    fn june_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 20).unwrap()
    }

    #[test]
    fn test_defaults_to_current_month() {
        let state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        assert_eq!(state.displayed_month, 5);
        assert!(state.selected.is_none());
        assert_eq!(state.clock_format, ClockFormat::TwelveHour);
    }

    #[test]
    fn test_decrement_is_noop_at_current_month() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        assert!(!state.can_decrement());
        state.decrement_month();
        assert_eq!(state.displayed_month, 5);

        state.increment_month();
        assert!(state.can_decrement());
        state.decrement_month();
        assert_eq!(state.displayed_month, 5);
    }

    #[test]
    fn test_increment_stops_at_window_end_month() {
        // Window ends in August (month index 7).
        let et = test_event_type(Some((2021, 7, 1)), Some((2021, 8, 15)));
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &et, june_20());
        state.increment_month();
        state.increment_month();
        assert_eq!(state.displayed_month, 7);
        assert!(!state.can_increment());
        state.increment_month();
        assert_eq!(state.displayed_month, 7);
    }

    #[test]
    fn test_unbounded_window_increments_freely() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        for _ in 0..10 {
            state.increment_month();
        }
        assert_eq!(state.displayed_month, 15);
    }

    #[test]
    fn test_clamp_month() {
        let et = test_event_type(Some((2021, 7, 1)), Some((2021, 8, 15)));
        let state = PageState::new(&test_user("UTC", "Sunday"), &et, june_20());
        assert_eq!(state.clamp_month(0), 5);
        assert_eq!(state.clamp_month(6), 6);
        assert_eq!(state.clamp_month(11), 7);

        let unbounded = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        assert_eq!(unbounded.clamp_month(23), 23);
    }

    #[test]
    fn test_clamp_month_window_fully_in_past() {
        // Window ended in March; the floor at the current month wins.
        let et = test_event_type(Some((2021, 3, 1)), Some((2021, 3, 15)));
        let state = PageState::new(&test_user("UTC", "Sunday"), &et, june_20());
        assert_eq!(state.clamp_month(2), 5);
        assert_eq!(state.clamp_month(9), 5);
    }

    #[test]
    fn test_select_day_rejects_disabled_days() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        assert!(state.select_day(19).is_none());
        assert!(state.selected.is_none());

        let selected = state.select_day(20).expect("today is selectable");
        assert_eq!(selected.day(), 20);
        assert_eq!(selected.month(), 6);
        assert_eq!(selected.year(), 2021);
        assert_eq!(selected.hour(), 0);
    }

    #[test]
    fn test_select_day_in_rolled_over_month() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        state.show_month(13);
        let selected = state.select_day(3).expect("future month is open");
        assert_eq!(selected.year(), 2022);
        assert_eq!(selected.month(), 2);
        assert_eq!(selected.day(), 3);
    }

    #[test]
    fn test_change_time_zone_keeps_wall_clock() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        state.select_day(25);
        let before = state.selected.unwrap();

        state.change_time_zone(chrono_tz::America::New_York);
        let after = state.selected.unwrap();

        assert_eq!(after.naive_local(), before.naive_local());
        assert_ne!(after.offset().to_string(), before.offset().to_string());
        assert_eq!(state.time_zone(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_change_time_zone_noop_without_selection() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        state.change_time_zone(chrono_tz::America::New_York);
        assert!(state.selected.is_none());
        assert_eq!(state.time_zone(), chrono_tz::UTC);
    }

    #[test]
    fn test_clock_format_guarded_by_selection() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        state.change_clock_format(true);
        assert_eq!(state.clock_format, ClockFormat::TwelveHour);

        state.select_day(21);
        state.change_clock_format(true);
        assert_eq!(state.clock_format, ClockFormat::TwentyFourHour);
        state.change_clock_format(false);
        assert_eq!(state.clock_format, ClockFormat::TwelveHour);
    }

    #[test]
    fn test_render_month_marks_states() {
        let mut state = PageState::new(&test_user("UTC", "Sunday"), &test_event_type(None, None), june_20());
        state.select_day(22);
        let view = state.render_month();

        assert_eq!(view.label, "June 2021");
        // June 2021 starts on a Tuesday: 2 placeholders, 30 days.
        assert_eq!(view.cells.len(), 32);
        assert!(matches!(view.cells[0], MonthCell::Placeholder));

        let day_state_of = |n: u32| {
            view.cells.iter().find_map(|c| match c {
                MonthCell::Day { day, state } if *day == n => Some(*state),
                _ => None,
            })
        };
        assert_eq!(day_state_of(19), Some(DayState::Unavailable));
        assert_eq!(day_state_of(20), Some(DayState::Bookable));
        assert_eq!(day_state_of(22), Some(DayState::Selected));
        assert!(!view.can_decrement);
        assert!(view.can_increment);
    }

    #[test]
    fn test_day_state_mapping() {
        assert_eq!(day_state(true, true), DayState::Selected);
        assert_eq!(day_state(true, false), DayState::Bookable);
        assert_eq!(day_state(false, false), DayState::Unavailable);
        assert_eq!(day_state(false, true), DayState::Unavailable);
    }
}
