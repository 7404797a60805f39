use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::Utc;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::SelectionRequest;
use crate::api::dtos::responses::SelectionResponse;
use crate::api::handlers::load_user_and_event_type;
use crate::domain::ports::{PageParameters, TelemetryEvent};
use crate::domain::services::available_times::calculate_times;
use crate::domain::services::page_state::PageState;
use crate::error::AppError;
use crate::state::AppState;

/// Picks a day of the displayed month. The selection only succeeds for a
/// day the calendar offers as bookable; a disabled day can never become the
/// selected date.
pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Path((username, slug)): Path<(String, String)>,
    Json(payload): Json<SelectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, event_type) = load_user_and_event_type(&state, &username, &slug).await?;

    let tz: Tz = user.timezone.parse().unwrap_or(chrono_tz::UTC);
    let today = Utc::now().with_timezone(&tz).date_naive();

    let mut page = PageState::new(&user, &event_type, today);

    let month = payload.month.unwrap_or(page.current_month());
    if page.clamp_month(month) != month {
        return Err(AppError::Validation("Month is outside the navigable range".into()));
    }
    page.show_month(month);

    page.select_day(payload.day).ok_or_else(|| {
        AppError::Validation(format!("Day {} is not available for booking", payload.day))
    })?;

    if let Some(zone) = &payload.time_zone {
        let zone: Tz = zone
            .parse()
            .map_err(|_| AppError::Validation("Invalid timezone".into()))?;
        page.change_time_zone(zone);
    }
    if let Some(use_24h) = payload.use_24h_clock {
        page.change_clock_format(use_24h);
    }

    let selected = page.selected.ok_or(AppError::Internal)?;

    info!("Date selected on {}/{}: {}", username, slug, selected.to_rfc3339());

    state.telemetry.track(
        TelemetryEvent::DateSelected,
        PageParameters {
            page: format!("/{}/{}", username, slug),
            username: user.username.clone(),
            event_type_slug: event_type.slug.clone(),
        },
    );

    let slots = calculate_times(&user, &event_type, selected.date_naive(), page.clock_format);

    Ok(Json(SelectionResponse {
        date: selected.to_rfc3339(),
        time_zone: page.time_zone().name().to_string(),
        time_format: page.clock_format.token().to_string(),
        slots,
        calendar: page.render_month(),
    }))
}
