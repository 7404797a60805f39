use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::Utc;
use chrono_tz::Tz;
use std::sync::Arc;

use crate::api::dtos::requests::CalendarQuery;
use crate::api::handlers::load_user_and_event_type;
use crate::domain::services::page_state::PageState;
use crate::error::AppError;
use crate::state::AppState;

/// One month of the booking calendar: placeholder-padded day cells with
/// their selectability state, plus the prev/next navigation flags.
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Path((username, slug)): Path<(String, String)>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (user, event_type) = load_user_and_event_type(&state, &username, &slug).await?;

    let tz: Tz = user.timezone.parse().unwrap_or(chrono_tz::UTC);
    let today = Utc::now().with_timezone(&tz).date_naive();

    let mut page = PageState::new(&user, &event_type, today);
    if let Some(month) = query.month {
        page.show_month(month);
    }

    Ok(Json(page.render_month()))
}
