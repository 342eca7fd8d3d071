use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use log::error;
use serde_json::{json, Value};

use crate::relay_service::server::{RelayError, RelayService};
use crate::types::ChatMessage;

/// `POST /chat`. Validates the request shape, forwards the transcript to
/// the relay service, and maps every failure to a JSON error response so a
/// bad request can never take the process down.
pub async fn chat_handler(
    State(relay): State<RelayService>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let Some(raw_messages) = body.get("messages").and_then(Value::as_array) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid messages format" })),
        );
    };

    let messages: Vec<ChatMessage> = match raw_messages
        .iter()
        .map(|m| serde_json::from_value::<ChatMessage>(m.clone()))
        .collect::<Result<_, _>>()
    {
        Ok(messages) => messages,
        Err(e) => {
            error!("Malformed message entry: {}", e);
            return server_error();
        }
    };

    let current_page = body.get("currentPage").and_then(Value::as_str);
    let recommendation_data = body.get("recommendationData");

    match relay.relay(&messages, current_page, recommendation_data).await {
        Ok(reply) => (StatusCode::OK, Json(json!({ "reply": reply }))),
        Err(RelayError::Upstream { status, details }) => {
            error!("Gemini API failed with status {}", status);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Gemini API failed", "details": details })),
            )
        }
        Err(e) => {
            error!("Chat relay error: {}", e);
            server_error()
        }
    }
}

fn server_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server error" })),
    )
}
