use async_trait::async_trait;

use crate::domain::{Session, SessionId, Turn};

/// Conversation history keyed by session identifier.
///
/// Implementations serialize mutation per session; appends to different sessions must
/// not contend with each other.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the session, creating an empty one on first contact.
    async fn get_or_create(&self, id: &SessionId) -> Session;

    async fn append(&self, id: &SessionId, turn: Turn);

    /// Appends `turns` in order with no other append interleaved.
    async fn append_all(&self, id: &SessionId, turns: Vec<Turn>);

    async fn session_count(&self) -> usize;
}
