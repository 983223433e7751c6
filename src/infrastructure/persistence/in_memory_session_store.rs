use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::application::ports::SessionStore;
use crate::domain::{Session, SessionId, Turn};

type TurnLog = Arc<Mutex<Vec<Turn>>>;

/// Process-lifetime session history.
///
/// The outer map lock is held only to find or insert a session's log. Each log has its
/// own mutex, so appends to one session never wait on another.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, TurnLog>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn log_for(&self, id: &SessionId) -> TurnLog {
        if let Some(log) = self.sessions.read().await.get(id) {
            return Arc::clone(log);
        }

        let mut sessions = self.sessions.write().await;
        let log = sessions.entry(id.clone()).or_insert_with(|| {
            tracing::debug!(session_id = %id, "Creating session");
            Arc::new(Mutex::new(Vec::new()))
        });
        Arc::clone(log)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: &SessionId) -> Session {
        let log = self.log_for(id).await;
        let turns = log.lock().await.clone();
        Session::new(id.clone(), turns)
    }

    async fn append(&self, id: &SessionId, turn: Turn) {
        let log = self.log_for(id).await;
        log.lock().await.push(turn);
    }

    async fn append_all(&self, id: &SessionId, turns: Vec<Turn>) {
        let log = self.log_for(id).await;
        log.lock().await.extend(turns);
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
