use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, name, email, bio, avatar, timezone, start_time, end_time, week_start, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, username, name, email, bio, avatar, timezone, start_time, end_time, week_start, created_at",
        )
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.bio)
            .bind(&user.avatar)
            .bind(&user.timezone)
            .bind(user.start_time)
            .bind(user.end_time)
            .bind(&user.week_start)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, name, email, bio, avatar, timezone, start_time, end_time, week_start, created_at FROM users WHERE username = ?",
        )
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
