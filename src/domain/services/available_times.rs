use crate::domain::models::event_type::EventType;
use crate::domain::models::user::User;
use crate::domain::services::page_state::ClockFormat;
use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Renders the bookable start times for one selected date: the host's
/// working hours walked in event-length steps, anchored on the date in the
/// host's zone and formatted in the requested clock format. Conflicts with
/// existing bookings are outside this service; it renders the raw offer of
/// the day. Wall-clock times skipped by a DST transition are dropped.
pub fn calculate_times(
    user: &User,
    event_type: &EventType,
    date: NaiveDate,
    format: ClockFormat,
) -> Vec<String> {
    let length = event_type.length;
    if length <= 0 {
        return Vec::new();
    }

    let tz: Tz = user.timezone.parse().unwrap_or(chrono_tz::UTC);

    let day_start = user.start_time.max(0);
    let day_end = user.end_time.min(1440);

    let mut times = Vec::new();
    let mut cursor = day_start;
    while cursor + length <= day_end {
        let hour = (cursor / 60) as u32;
        let minute = (cursor % 60) as u32;
        if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
            if let Some(slot) = tz.from_local_datetime(&date.and_time(time)).single() {
                times.push(slot.format(format.pattern()).to_string());
            }
        }
        cursor += length;
    }
    times
}
