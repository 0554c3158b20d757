//! Manual ecopoints award handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use ecobot_core::session::SessionStore;
use ecobot_types::error::StoreError;

use crate::http::error::AppError;
use crate::http::extract::Session;
use crate::state::AppState;

/// Body of `POST /add-points`.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub ecopoints: u64,
}

/// Apply the fixed award to the session user and refresh the session copy.
///
/// Shared by `/add-points` and the classify reward path. If the persisted
/// record has vanished from the store, nothing is awarded and the session
/// copy answers.
pub(crate) async fn award_and_refresh(
    state: &AppState,
    session: &Session,
) -> Result<u64, AppError> {
    match state.points_service.award(&session.user.email).await {
        Ok(updated) => {
            let total = updated.ecopoints;
            state.sessions.replace(&session.id, updated);
            Ok(total)
        }
        Err(StoreError::NotFound) => Ok(session.user.ecopoints),
        Err(err) => Err(err.into()),
    }
}

/// POST /add-points - Award the fixed number of points to the session user.
///
/// Requires an active session. Re-reads the store, increments, persists,
/// and refreshes the session copy with the updated record.
pub async fn add_points(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<PointsResponse>, AppError> {
    let ecopoints = award_and_refresh(&state, &session).await?;
    Ok(Json(PointsResponse { ecopoints }))
}
