use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Document text bounded to what can be sent to the provider in one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    /// Counts describe the full extraction, not the capped text.
    pub char_count: usize,
    pub word_count: usize,
    pub truncated: bool,
}

impl ExtractedText {
    pub fn capped(raw: String, max_chars: usize) -> Self {
        let char_count = raw.chars().count();
        let word_count = WORD.find_iter(&raw).count();

        if char_count > max_chars {
            let text = raw.chars().take(max_chars).collect();
            Self {
                text,
                char_count,
                word_count,
                truncated: true,
            }
        } else {
            Self {
                text: raw,
                char_count,
                word_count,
                truncated: false,
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Leading slice used where a full document would be wasteful.
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}
