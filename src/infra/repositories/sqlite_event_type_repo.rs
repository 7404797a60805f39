use crate::domain::{models::event_type::EventType, ports::EventTypeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventTypeRepo {
    pool: SqlitePool,
}

impl SqliteEventTypeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventTypeRepository for SqliteEventTypeRepo {
    async fn create(&self, event_type: &EventType) -> Result<EventType, AppError> {
        sqlx::query_as::<_, EventType>(
            "INSERT INTO event_types (id, user_id, slug, title, description, length, start_date, end_date, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, user_id, slug, title, description, length, start_date, end_date, created_at",
        )
            .bind(&event_type.id)
            .bind(&event_type.user_id)
            .bind(&event_type.slug)
            .bind(&event_type.title)
            .bind(&event_type.description)
            .bind(event_type.length)
            .bind(event_type.start_date)
            .bind(event_type.end_date)
            .bind(event_type.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug_and_user(&self, slug: &str, user_id: &str) -> Result<Option<EventType>, AppError> {
        sqlx::query_as::<_, EventType>(
            "SELECT id, user_id, slug, title, description, length, start_date, end_date, created_at FROM event_types WHERE slug = ? AND user_id = ?",
        )
            .bind(slug)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EventType>, AppError> {
        sqlx::query_as::<_, EventType>(
            "SELECT id, user_id, slug, title, description, length, start_date, end_date, created_at FROM event_types WHERE user_id = ? ORDER BY title ASC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
