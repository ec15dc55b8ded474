//! Guided conversation flow for the marketing assistant.
//!
//! The flow walks an artisan from a first "help me post" message to a ready
//! draft in five steps: platform choice, market insights, focus choice, tone
//! choice, final draft with actions. [`engine`] owns the transition function;
//! [`content`] holds the canned option lists, insight cards, chart payloads
//! and draft bundles the steps emit.

/// Canned options, insights, charts, drafts, and the focus/tone/platform
/// vocabulary with its default substitutions.
pub mod content;
/// The step transition function.
pub mod engine;

pub use engine::ConversationEngine;
