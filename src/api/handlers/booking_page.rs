use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::PageQuery;
use crate::api::dtos::responses::{EventTypeResponse, PagePropsResponse, UserResponse};
use crate::api::handlers::load_user_and_event_type;
use crate::domain::ports::{PageParameters, TelemetryEvent};
use crate::error::AppError;
use crate::state::AppState;

/// The server-rendered props of the public booking page: the host user and
/// the requested event type, with window dates serialized for transport.
pub async fn get_booking_page(
    State(state): State<Arc<AppState>>,
    Path((username, slug)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (user, event_type) = load_user_and_event_type(&state, &username, &slug).await?;
    let user_event_types = state.event_type_repo.list_by_user(&user.id).await?;

    info!("Serving booking page for {}/{}", username, slug);

    state.telemetry.track(
        TelemetryEvent::PageView,
        PageParameters {
            page: format!("/{}/{}", username, slug),
            username: user.username.clone(),
            event_type_slug: event_type.slug.clone(),
        },
    );

    Ok(Json(PagePropsResponse {
        user: UserResponse::from_user(&user, &user_event_types),
        event_type: EventTypeResponse::from(&event_type),
        reschedule_uid: query.reschedule_uid,
    }))
}
