use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the API router. State is attached by the caller.
pub fn create_router() -> Router<AppState> {
    let api_routes = Router::new()
        .route(
            "/chatbot",
            post(crate::api::handlers::chatbot::chatbot_turn)
                .get(crate::api::handlers::chatbot::chatbot_info),
        )
        .route("/health", get(crate::api::handlers::health::health));

    Router::new().nest("/api", api_routes)
}
