//! Eco-guidance chat handler.

use axum::Json;
use axum::extract::State;

use ecobot_types::llm::{AssistantReply, ConverseRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /converse - One stateless chat turn against the gateway.
///
/// No conversation history is kept server-side; the widget holds the
/// transcript. A gateway failure is reported once with a fixed generic
/// message and the request ends -- no retry.
pub async fn converse(
    State(state): State<AppState>,
    Json(body): Json<ConverseRequest>,
) -> Result<Json<AssistantReply>, AppError> {
    let reply = state
        .assistant_service
        .converse(&body.message)
        .await
        .map_err(|err| {
            tracing::error!(%err, "Gemini API error");
            AppError::Upstream("Gemini request failed")
        })?;

    Ok(Json(AssistantReply::new(reply)))
}
