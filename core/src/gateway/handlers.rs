//! Request handlers for the Watson gateway endpoints
//! Parameter validation plus pass-through calls to the conversation provider

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::gateway::server::AppState;

/// Body accepted by the message endpoint.
///
/// Both fields must be present and non-empty; anything else is rejected
/// before the provider is called.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageParams {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl MessageParams {
    fn into_valid(self) -> Option<(String, String)> {
        match (self.session_id, self.message) {
            (Some(session_id), Some(message))
                if !session_id.is_empty() && !message.is_empty() =>
            {
                Some((session_id, message))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    session_id: String,
}

/// Handle POST /api/watson/session
pub async fn create_session(State(state): State<AppState>) -> Response {
    match state.provider.create_session().await {
        Ok(session_id) => (StatusCode::OK, Json(SessionCreated { session_id })).into_response(),
        Err(e) => {
            tracing::error!("Session creation failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session")
        }
    }
}

/// Handle POST /api/watson/message
///
/// Returns the provider's generic output array unmodified. A missing or
/// undecodable body is treated the same as missing parameters.
pub async fn send_message(
    State(state): State<AppState>,
    params: Option<Json<MessageParams>>,
) -> Response {
    let Some((session_id, message)) = params.and_then(|Json(params)| params.into_valid()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required parameters");
    };

    match state.provider.send_message(&session_id, &message).await {
        Ok(generic) => (StatusCode::OK, Json(generic)).into_response(),
        Err(e) => {
            tracing::error!("Message exchange failed for session {}: {}", session_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process message")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
