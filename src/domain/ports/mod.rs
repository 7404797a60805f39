use crate::domain::models::{event_type::EventType, user::User};
use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait EventTypeRepository: Send + Sync {
    async fn create(&self, event_type: &EventType) -> Result<EventType, AppError>;
    async fn find_by_slug_and_user(&self, slug: &str, user_id: &str) -> Result<Option<EventType>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EventType>, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryEvent {
    PageView,
    DateSelected,
}

impl TelemetryEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TelemetryEvent::PageView => "page_view",
            TelemetryEvent::DateSelected => "date_selected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageParameters {
    pub page: String,
    pub username: String,
    pub event_type_slug: String,
}

/// Fire-and-forget analytics channel. Implementations must return
/// immediately; a handler never waits on (or fails because of) tracking.
pub trait TelemetryChannel: Send + Sync {
    fn track(&self, event: TelemetryEvent, params: PageParameters);
}
