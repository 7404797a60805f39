use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub telemetry_url: String,
    pub telemetry_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            telemetry_url: env::var("TELEMETRY_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/track".to_string()),
            telemetry_key: env::var("TELEMETRY_KEY").unwrap_or_else(|_| "test-key-1".to_string()),
        }
    }
}
