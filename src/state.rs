use crate::config::Config;
use crate::domain::ports::{EventTypeRepository, TelemetryChannel, UserRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub event_type_repo: Arc<dyn EventTypeRepository>,
    pub telemetry: Arc<dyn TelemetryChannel>,
}
