use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EventType {
    pub id: String,
    pub user_id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Meeting duration in minutes.
    pub length: i32,
    /// Optional booking window. Both absent means any future date is offered.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl EventType {
    pub fn new(user_id: String, slug: String, title: String, length: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            slug,
            title,
            description: String::new(),
            length,
            start_date: None,
            end_date: None,
            created_at: Utc::now(),
        }
    }
}
