use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dtos::requests::SlotsQuery;
use crate::api::dtos::responses::SlotsResponse;
use crate::api::handlers::load_user_and_event_type;
use crate::domain::services::available_times::calculate_times;
use crate::domain::services::page_state::ClockFormat;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_available_times(
    State(state): State<Arc<AppState>>,
    Path((username, slug)): Path<(String, String)>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (user, event_type) = load_user_and_event_type(&state, &username, &slug).await?;

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let format = match query.time_format.as_deref() {
        Some("24h") | Some("HH:mm") => ClockFormat::TwentyFourHour,
        _ => ClockFormat::TwelveHour,
    };

    let slots = calculate_times(&user, &event_type, date, format);

    Ok(Json(SlotsResponse {
        date: query.date,
        time_format: format.token().to_string(),
        slots,
    }))
}
