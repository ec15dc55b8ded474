//! Per-user conversation state and the store abstraction.
//!
//! The engine never owns session state; handlers fetch a [`Session`] from a
//! [`SessionStore`], run a turn against it, and write it back. The store is
//! injected through `AppState`, so the in-memory backend can be swapped for
//! any keyed store that can hold the serialized record.

mod memory;

pub use memory::MemorySessionStore;

use crate::types::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Where a session currently sits in the guided flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Initial,
    PlatformSelection,
    ShowInsights,
    ToneSelection,
    FinalDraft,
    /// Forward-compatibility arm: a session hydrated from an external store
    /// may carry a step value this build does not know. It deserializes here
    /// instead of failing, and the engine answers with a generic prompt.
    #[serde(other)]
    Unknown,
}

/// Per-user mutable conversation record retained across turns.
///
/// Created on the first message from a user identifier and mutated in place
/// by the engine: platforms are appended, focus/tone overwritten, the step
/// advanced. `product_type` is part of the record but no transition writes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub step: Step,
    #[serde(default)]
    pub selected_platforms: Vec<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
}

impl Session {
    /// A fresh session at the start of the flow.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Counters for store monitoring.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    /// Sessions currently held by the store.
    pub active: usize,
    /// Sessions created over the store's lifetime.
    pub created: u64,
    /// Sessions dropped because their TTL elapsed.
    pub expired: u64,
    /// Sessions removed explicitly.
    pub removed: u64,
}

/// Keyed session storage.
///
/// Implementations must be safe for concurrent handler access. Reads refresh
/// the entry's activity stamp where the backend supports expiry.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the session for a user identifier, if one exists and has not
    /// expired.
    async fn get(&self, user_id: &str) -> Result<Option<Session>>;

    /// Store (or replace) the session for a user identifier.
    async fn put(&self, user_id: &str, session: Session) -> Result<()>;

    /// Drop the session for a user identifier.
    async fn remove(&self, user_id: &str) -> Result<()>;

    /// Drop every session.
    async fn clear(&self) -> Result<()>;

    /// Store counters.
    fn stats(&self) -> SessionStats;
}
