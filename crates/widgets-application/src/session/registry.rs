use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use widgets_core::session::{SessionDefaults, SessionStore};

/// Handle to one session's store.
///
/// The mutex is held for a whole render pass so passes within a session never
/// interleave.
pub type SessionHandle = Arc<Mutex<SessionStore>>;

/// In-memory registry of session stores keyed by session id.
///
/// Each session owns an independent [`SessionStore`]; nothing is shared
/// between entries.
pub struct SessionRegistry {
    /// Live session stores
    sessions: Arc<RwLock<HashMap<String, SessionHandle>>>,
    /// Slot defaults for newly opened sessions
    defaults: SessionDefaults,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            defaults,
        }
    }

    /// Returns the store of `session_id`, initializing it on first access.
    ///
    /// Opening an existing session returns the same store untouched.
    pub async fn open(&self, session_id: &str) -> SessionHandle {
        if let Some(handle) = self.get(session_id).await {
            return handle;
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::info!(session_id, "Initialized session store");
                Arc::new(Mutex::new(SessionStore::initialize(&self.defaults)))
            })
            .clone()
    }

    /// Gets a registered store without creating one.
    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    /// Ends a session, dropping its store.
    pub async fn remove(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(session_id).is_some();
        if removed {
            tracing::info!(session_id, "Session ended");
        }
        removed
    }

    /// Ids of all open sessions, sorted.
    pub async fn session_ids(&self) -> Vec<String> {
        let sessions = self.sessions.read().await;
        let mut ids: Vec<String> = sessions.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(SessionDefaults::default())
    }
}
