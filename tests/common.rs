use booking_page_backend::{
    api::router::create_router,
    config::Config,
    domain::models::{event_type::EventType, user::User},
    domain::ports::{PageParameters, TelemetryChannel, TelemetryEvent},
    infra::repositories::{
        sqlite_event_type_repo::SqliteEventTypeRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::Router;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Captures tracked events in memory so tests can assert on them.
#[derive(Default)]
pub struct RecordingTelemetry {
    pub events: Mutex<Vec<(TelemetryEvent, PageParameters)>>,
}

impl RecordingTelemetry {
    #[allow(dead_code)]
    pub fn events_of(&self, kind: TelemetryEvent) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(event, _)| *event == kind)
            .count()
    }
}

impl TelemetryChannel for RecordingTelemetry {
    fn track(&self, event: TelemetryEvent, params: PageParameters) {
        self.events.lock().unwrap().push((event, params));
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub telemetry: Arc<RecordingTelemetry>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            telemetry_url: "http://localhost".to_string(),
            telemetry_key: "key".to_string(),
        };

        let telemetry = Arc::new(RecordingTelemetry::default());

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_type_repo: Arc::new(SqliteEventTypeRepo::new(pool.clone())),
            telemetry: telemetry.clone(),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            telemetry,
        }
    }

    pub async fn seed_user(&self, username: &str, week_start: &str, timezone: &str) -> User {
        let mut user = User::new(username.to_string(), timezone.to_string());
        user.name = Some(format!("{} Display", username));
        user.week_start = week_start.to_string();
        // 10:00 to 12:00 working hours keep slot assertions small.
        user.start_time = 600;
        user.end_time = 720;
        self.state
            .user_repo
            .create(&user)
            .await
            .expect("Failed to seed user")
    }

    pub async fn seed_event_type(
        &self,
        user: &User,
        slug: &str,
        length: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EventType {
        let mut event_type = EventType::new(
            user.id.clone(),
            slug.to_string(),
            format!("{} meeting", slug),
            length,
        );
        event_type.description = "Let's talk".to_string();
        event_type.start_date = start_date;
        event_type.end_date = end_date;
        self.state
            .event_type_repo
            .create(&event_type)
            .await
            .expect("Failed to seed event type")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
