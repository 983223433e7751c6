use serde::Serialize;

pub const EMPTY_SUMMARY_BULLET: &str = "The provider returned an empty summary.";

/// Structured digest of an uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub bullets: Vec<String>,
    pub action: String,
    pub keywords: Vec<String>,
}

impl Summary {
    /// Fallback for provider output with no recognizable sections. A blank reply
    /// becomes [`EMPTY_SUMMARY_BULLET`].
    pub fn unstructured(reply: &str) -> Self {
        let reply = reply.trim();
        let bullet = if reply.is_empty() {
            EMPTY_SUMMARY_BULLET
        } else {
            reply
        };
        Self {
            title: String::new(),
            bullets: vec![bullet.to_string()],
            action: String::new(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}
