use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// First day of the displayed week. Anything unrecognised falls back to
/// Sunday, matching the default of the hosted profile settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn parse(value: &str) -> Self {
        match value {
            "Monday" => WeekStart::Monday,
            _ => WeekStart::Sunday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "Sunday",
            WeekStart::Monday => "Monday",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub timezone: String,
    /// Working hours, minutes since local midnight.
    pub start_time: i32,
    pub end_time: i32,
    pub week_start: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, timezone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            name: None,
            email: None,
            bio: None,
            avatar: None,
            timezone,
            start_time: 0,
            end_time: 1440,
            week_start: "Sunday".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn week_start(&self) -> WeekStart {
        WeekStart::parse(&self.week_start)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}
