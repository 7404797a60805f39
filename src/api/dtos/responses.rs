use crate::domain::models::{event_type::EventType, user::User};
use crate::domain::services::page_state::MonthView;
use serde::Serialize;

/// Event type as it crosses the transport boundary: window dates rendered
/// as strings or explicit nulls, never structured date objects.
#[derive(Serialize)]
pub struct EventTypeResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub length: i32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<&EventType> for EventTypeResponse {
    fn from(event_type: &EventType) -> Self {
        Self {
            id: event_type.id.clone(),
            slug: event_type.slug.clone(),
            title: event_type.title.clone(),
            description: event_type.description.clone(),
            length: event_type.length,
            start_date: event_type.start_date.map(|d| d.to_string()),
            end_date: event_type.end_date.map(|d| d.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub timezone: String,
    pub start_time: i32,
    pub end_time: i32,
    pub week_start: String,
    pub event_types: Vec<EventTypeResponse>,
}

impl UserResponse {
    pub fn from_user(user: &User, event_types: &[EventType]) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            timezone: user.timezone.clone(),
            start_time: user.start_time,
            end_time: user.end_time,
            week_start: user.week_start.clone(),
            event_types: event_types.iter().map(EventTypeResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct PagePropsResponse {
    pub user: UserResponse,
    pub event_type: EventTypeResponse,
    pub reschedule_uid: Option<String>,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    pub date: String,
    pub time_zone: String,
    pub time_format: String,
    pub slots: Vec<String>,
    pub calendar: MonthView,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub time_format: String,
    pub slots: Vec<String>,
}
