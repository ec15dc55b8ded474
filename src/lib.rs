//! # Mela - Conversational Marketing Assistant Server
//!
//! A guided content-creation chatbot server for small artisans. The assistant
//! walks a user from a first "help me post" message to a ready-to-publish
//! draft in five steps - platform choice, market insights, marketing focus,
//! tone, final draft - and predicts post performance from canned platform
//! baselines.
//!
//! ## Overview
//!
//! Mela can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `mela-server` binary
//! 2. **As a library** - Embed the engine and store in your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use mela::{ConversationEngine, Session};
//!
//! let engine = ConversationEngine::new();
//! let mut session = Session::new();
//!
//! let reply = engine.turn(&mut session, "hi");
//! assert!(reply.show_options);
//! ```
//!
//! ## HTTP Surface
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `POST /api/chatbot` | Drive one conversation turn |
//! | `GET /api/chatbot` | Capability descriptor |
//! | `GET /api/health` | Liveness probe |
//!
//! ## Modules
//!
//! - [`conversation`] - The step transition function and canned content
//! - [`session`] - Session records and the store abstraction
//! - [`api`] - REST API handlers and routes
//! - [`types`] - Wire types and error handling
//! - [`utils`] - Configuration loading
//! - [`cli`] - Command-line interface
//!
//! ## Design Notes
//!
//! The engine is a pure transition function over an injected session store,
//! so turns are trivially testable and the store backend is swappable. The
//! in-memory backend expires idle sessions after a configurable TTL.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface parsing and colored output.
pub mod cli;
/// Conversation engine and canned content.
pub mod conversation;
/// Session records and store backends.
pub mod session;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use conversation::ConversationEngine;
pub use session::{MemorySessionStore, Session, SessionStats, SessionStore, Step};
pub use types::{AppError, ChatBotRequest, ChatBotResponse, ConversationState, Result};
pub use utils::config::{ConfigError, MelaConfig};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded server configuration
    pub config: Arc<MelaConfig>,
    /// The conversation engine driving every turn
    pub engine: Arc<ConversationEngine>,
    /// Session store keyed by user identifier
    pub sessions: Arc<dyn SessionStore>,
}
