use super::{SessionId, Turn};

/// Point-in-time copy of a conversation.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub turns: Vec<Turn>,
}

impl Session {
    pub fn new(id: SessionId, turns: Vec<Turn>) -> Self {
        Self { id, turns }
    }

    /// The last `window` turns in chronological order. A window of zero means the
    /// whole history.
    pub fn recent_turns(&self, window: usize) -> &[Turn] {
        if window == 0 || self.turns.len() <= window {
            &self.turns
        } else {
            &self.turns[self.turns.len() - window..]
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
