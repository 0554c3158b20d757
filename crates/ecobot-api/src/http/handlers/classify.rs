//! Waste image classification handler.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::http::error::AppError;
use crate::http::extract::MaybeSession;
use crate::state::AppState;

/// Body of `POST /classify`.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// The model's category text for the uploaded item.
    pub category: String,
    /// The caller's ecopoints after the award; 0 when anonymous.
    pub ecopoints: u64,
}

/// POST /classify - Classify an uploaded image, rewarding a logged-in caller.
///
/// Expects a multipart form with an `image` field. On a successful
/// classification with an active session, the fixed award is applied through
/// the same shared points operation as `/add-points` and the session copy is
/// refreshed; without a session the response carries 0 ecopoints and the
/// store is untouched.
pub async fn classify(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    mut multipart: Multipart,
) -> Result<Json<ClassifyResponse>, AppError> {
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("image") {
            continue;
        }
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await.map_err(|_| AppError::NoImage)?;
        image = Some((data.to_vec(), mime_type));
        break;
    }

    let (data, mime_type) = image.ok_or(AppError::NoImage)?;

    let category = state
        .assistant_service
        .classify(data, &mime_type)
        .await
        .map_err(|err| {
            tracing::error!(%err, "Gemini vision API error");
            AppError::Upstream("Image classification failed")
        })?;

    let ecopoints = match session {
        Some(session) => super::points::award_and_refresh(&state, &session).await?,
        None => 0,
    };

    Ok(Json(ClassifyResponse { category, ecopoints }))
}
