use crate::{
    AppState,
    types::{ChatBotRequest, ChatBotResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};
use uuid::Uuid;

/// Drive one turn of the assistant conversation
///
/// The caller's session is looked up (or created) by `user_id`, the engine
/// decides the reply, and the updated session is written back. Any failure to
/// process the request - an unparsable body, a store error - produces the
/// fixed technical-difficulties body with HTTP 500 and leaves the stored
/// session exactly as it was.
#[utoipa::path(
    post,
    path = "/api/chatbot",
    request_body = ChatBotRequest,
    responses(
        (status = 200, description = "Assistant reply for this turn", body = ChatBotResponse),
        (status = 500, description = "Request could not be processed", body = ChatBotResponse)
    ),
    tag = "chatbot"
)]
pub async fn chatbot_turn(
    State(state): State<AppState>,
    payload: Result<Json<ChatBotRequest>, JsonRejection>,
) -> Response {
    let turn_id = Uuid::new_v4();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!(%turn_id, error = %rejection, "rejecting malformed chatbot request");
            return fallback_response();
        }
    };

    let mut session = match state.sessions.get(&request.user_id).await {
        Ok(session) => session.unwrap_or_default(),
        Err(err) => {
            error!(%turn_id, error = %err, user_id = %request.user_id, "failed to load session");
            return fallback_response();
        }
    };

    let response = state.engine.turn(&mut session, request.input());
    debug!(%turn_id, user_id = %request.user_id, state = ?response.state, "turn complete");

    if let Err(err) = state.sessions.put(&request.user_id, session).await {
        error!(%turn_id, error = %err, user_id = %request.user_id, "failed to persist session");
        return fallback_response();
    }

    (StatusCode::OK, Json(response)).into_response()
}

/// Describe the chatbot endpoint
#[utoipa::path(
    get,
    path = "/api/chatbot",
    responses(
        (status = 200, description = "Capability descriptor")
    ),
    tag = "chatbot"
)]
pub async fn chatbot_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Chatbot API is running",
        "endpoints": {
            "POST": "/api/chatbot - Send messages to the chatbot"
        }
    }))
}

fn fallback_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatBotResponse::technical_difficulties()),
    )
        .into_response()
}
