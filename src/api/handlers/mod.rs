pub mod booking_page;
pub mod calendar;
pub mod health;
pub mod selection;
pub mod slots;

use crate::domain::models::{event_type::EventType, user::User};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the user/event-type pair every page endpoint starts from.
/// Either lookup missing maps to a page-level 404, never partial content.
pub(crate) async fn load_user_and_event_type(
    state: &AppState,
    username: &str,
    slug: &str,
) -> Result<(User, EventType), AppError> {
    let user = state
        .user_repo
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

    let event_type = state
        .event_type_repo
        .find_by_slug_and_user(slug, &user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event type '{}' not found", slug)))?;

    Ok((user, event_type))
}
