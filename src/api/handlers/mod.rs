//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Conversation turn and capability-descriptor handlers.
pub mod chatbot;
/// Health check handler.
pub mod health;
