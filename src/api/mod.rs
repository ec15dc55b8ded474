//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Mela, built on the Axum web
//! framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Chatbot (`/api/chatbot`)
//! - `POST /api/chatbot` - Send a message or selection, receive the next turn
//! - `GET /api/chatbot` - Capability descriptor for the endpoint
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint
//!
//! # Failure Contract
//!
//! A request body that cannot be parsed, or a session store failure, yields
//! HTTP 500 with the fixed technical-difficulties body; the caller's session
//! is left untouched and the conversation continues undamaged on the next
//! turn.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI document for the assistant API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::chatbot::chatbot_turn,
        handlers::chatbot::chatbot_info,
        handlers::health::health,
    ),
    tags(
        (name = "chatbot", description = "Guided conversation turns"),
        (name = "health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
