//! In-memory session store with TTL expiry.
//!
//! Sessions live in a `HashMap` behind a `parking_lot::RwLock`. Every entry
//! carries a last-activity stamp; an entry older than the configured TTL is
//! treated as gone. Expired entries are dropped lazily when their key is next
//! touched, and in bulk by [`MemorySessionStore::sweep_expired`], which the
//! server drives from a periodic task. Without the sweep the map would grow
//! with every user identifier ever seen.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{Session, SessionStats, SessionStore};
use crate::types::Result;

/// Idle time after which a session is considered abandoned.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// A stored session with its activity stamp.
#[derive(Debug, Clone)]
struct SessionEntry {
    session: Session,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(session: Session) -> Self {
        Self {
            session,
            last_seen: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() > ttl
    }

    fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

/// Process-local [`SessionStore`] backend.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
    created: AtomicU64,
    expired: AtomicU64,
    removed: AtomicU64,
}

impl MemorySessionStore {
    /// Create a store whose sessions expire after `ttl` of inactivity.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            created: AtomicU64::new(0),
            expired: AtomicU64::new(0),
            removed: AtomicU64::new(0),
        }
    }

    /// Create a store with the default 30 minute TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }

    /// Drop every expired session and return how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let mut sessions = self.sessions.write();
        let stale: Vec<String> = sessions
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(user_id, _)| user_id.clone())
            .collect();

        for user_id in &stale {
            sessions.remove(user_id);
        }
        self.expired.fetch_add(stale.len() as u64, Ordering::Relaxed);
        stale.len()
    }

    /// Number of sessions currently held, expired or not.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, user_id: &str) -> Result<Option<Session>> {
        let mut sessions = self.sessions.write();
        match sessions.get_mut(user_id) {
            Some(entry) if entry.is_expired(self.ttl) => {
                sessions.remove(user_id);
                self.expired.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
            Some(entry) => {
                entry.touch();
                Ok(Some(entry.session.clone()))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, user_id: &str, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write();
        if sessions
            .insert(user_id.to_string(), SessionEntry::new(session))
            .is_none()
        {
            self.created.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    async fn remove(&self, user_id: &str) -> Result<()> {
        let mut sessions = self.sessions.write();
        if sessions.remove(user_id).is_some() {
            self.removed.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut sessions = self.sessions.write();
        let count = sessions.len() as u64;
        sessions.clear();
        self.removed.fetch_add(count, Ordering::Relaxed);
        Ok(())
    }

    fn stats(&self) -> SessionStats {
        SessionStats {
            active: self.sessions.read().len(),
            created: self.created.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            removed: self.removed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Step;

    fn session_at(step: Step) -> Session {
        Session {
            step,
            ..Session::default()
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemorySessionStore::with_default_ttl();

        assert!(store.get("u1").await.unwrap().is_none());

        store
            .put("u1", session_at(Step::PlatformSelection))
            .await
            .unwrap();
        let session = store.get("u1").await.unwrap().unwrap();
        assert_eq!(session.step, Step::PlatformSelection);
        assert_eq!(store.stats().created, 1);
    }

    #[tokio::test]
    async fn overwrite_does_not_count_as_created() {
        let store = MemorySessionStore::with_default_ttl();

        store.put("u1", session_at(Step::Initial)).await.unwrap();
        store.put("u1", session_at(Step::FinalDraft)).await.unwrap();

        assert_eq!(store.stats().created, 1);
        assert_eq!(store.len(), 1);
        let session = store.get("u1").await.unwrap().unwrap();
        assert_eq!(session.step, Step::FinalDraft);
    }

    #[tokio::test]
    async fn expired_session_is_gone_on_access() {
        let store = MemorySessionStore::new(Duration::from_millis(5));

        store.put("u1", session_at(Step::ShowInsights)).await.unwrap();
        std::thread::sleep(Duration::from_millis(10));

        assert!(store.get("u1").await.unwrap().is_none());
        assert_eq!(store.stats().expired, 1);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn get_refreshes_activity() {
        let store = MemorySessionStore::new(Duration::from_millis(60));

        store.put("u1", session_at(Step::Initial)).await.unwrap();
        std::thread::sleep(Duration::from_millis(40));

        // Touching the entry resets its idle clock.
        assert!(store.get("u1").await.unwrap().is_some());
        std::thread::sleep(Duration::from_millis(40));
        assert!(store.get("u1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_sessions() {
        let store = MemorySessionStore::new(Duration::from_millis(20));

        store.put("old", session_at(Step::Initial)).await.unwrap();
        std::thread::sleep(Duration::from_millis(30));
        store.put("fresh", session_at(Step::Initial)).await.unwrap();

        assert_eq!(store.sweep_expired(), 1);
        assert!(store.get("old").await.unwrap().is_none());
        assert!(store.get("fresh").await.unwrap().is_some());
        assert_eq!(store.stats().expired, 1);
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let store = MemorySessionStore::with_default_ttl();

        store.put("u1", session_at(Step::Initial)).await.unwrap();
        store.put("u2", session_at(Step::Initial)).await.unwrap();

        store.remove("u1").await.unwrap();
        assert!(store.get("u1").await.unwrap().is_none());
        assert!(store.get("u2").await.unwrap().is_some());

        store.clear().await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.stats().removed, 2);
    }

    #[tokio::test]
    async fn users_do_not_share_sessions() {
        let store = MemorySessionStore::with_default_ttl();

        let mut session = session_at(Step::ShowInsights);
        session.selected_platforms.push("instagram".to_string());
        store.put("u1", session).await.unwrap();
        store.put("u2", session_at(Step::Initial)).await.unwrap();

        let u2 = store.get("u2").await.unwrap().unwrap();
        assert!(u2.selected_platforms.is_empty());
        assert_eq!(u2.step, Step::Initial);
    }
}
