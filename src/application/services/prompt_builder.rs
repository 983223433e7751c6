use crate::domain::{CompletionRequest, ExtractedText, PromptMessage, Role, Session};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an experienced, friendly, and creative enterprise assistant. \
Respond in a warm, conversational, and slightly improvised tone, like a helpful colleague who can explain things clearly, \
add a tiny anecdote or relatable example when appropriate, and ask one short clarifying question if needed. \
Keep the response professional but human. Aim for 2-7 sentences unless the user asks for brevity. \
When summarizing documents, provide a concise title (5 words max), 3-6 bullets with key points, and one short suggested action.";

pub const DEFAULT_HISTORY_WINDOW: usize = 6;

const SUMMARY_SYSTEM_SUFFIX: &str = " When summarizing, follow the requested structure exactly.";

const SUMMARY_INSTRUCTIONS: &str = "Summarize the document below. Reply using exactly these labelled sections:\n\
Title: a concise title (5 words max)\n\
Key points: 3-6 bullet points, one per line, each starting with \"- \"\n\
Suggested action: one short suggested action (1 sentence)\n\n\
Do not invent facts. If you had to note uncertainty, say so briefly.\n\n\
Document:\n\n";

const KEYWORD_SYSTEM_PROMPT: &str = "You are a helpful tag extractor.";
const KEYWORD_INSTRUCTIONS: &str =
    "From the document excerpt below, list up to 8 concise keywords or tags, separated by commas.";
pub const KEYWORD_EXCERPT_CHARS: usize = 3000;

const PROBE_PROMPT: &str =
    "Introduce yourself in a warm, friendly, improvised paragraph (2-4 sentences).";

#[derive(Debug, Clone, Copy)]
struct Sampling {
    temperature: f32,
    max_tokens: usize,
}

const CHAT: Sampling = Sampling {
    temperature: 0.9,
    max_tokens: 700,
};
const SUMMARY: Sampling = Sampling {
    temperature: 0.6,
    max_tokens: 700,
};
const KEYWORDS: Sampling = Sampling {
    temperature: 0.3,
    max_tokens: 120,
};
const PROBE: Sampling = Sampling {
    temperature: 0.9,
    max_tokens: 200,
};

/// Assembles provider payloads. Performs no I/O.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_prompt: String,
    history_window: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT.to_string(), DEFAULT_HISTORY_WINDOW)
    }
}

impl PromptBuilder {
    /// `history_window` caps how many prior turns are replayed; zero replays all of them.
    pub fn new(system_prompt: String, history_window: usize) -> Self {
        Self {
            system_prompt,
            history_window,
        }
    }

    /// System instruction, recent history, then the new user message.
    pub fn chat(&self, session: &Session, message: &str) -> CompletionRequest {
        let history = session.recent_turns(self.history_window);
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(PromptMessage::system(self.system_prompt.as_str()));
        messages.extend(history.iter().map(|turn| match turn.role() {
            Role::Assistant => PromptMessage::assistant(turn.content()),
            _ => PromptMessage::user(turn.content()),
        }));
        messages.push(PromptMessage::user(message));

        build(messages, CHAT)
    }

    /// One-shot summary request; session history is never included.
    pub fn summarize(&self, document: &ExtractedText) -> CompletionRequest {
        let mut body = String::with_capacity(SUMMARY_INSTRUCTIONS.len() + document.text.len() + 128);
        body.push_str(SUMMARY_INSTRUCTIONS);
        body.push_str(&document.text);
        if document.truncated {
            body.push_str(&format!(
                "\n\n[Document truncated; original length {} characters. Summarize the provided portion and mention it's truncated.]\n",
                document.char_count
            ));
        }

        build(
            vec![
                PromptMessage::system(format!("{}{}", self.system_prompt, SUMMARY_SYSTEM_SUFFIX)),
                PromptMessage::user(body),
            ],
            SUMMARY,
        )
    }

    pub fn keywords(&self, document: &ExtractedText) -> CompletionRequest {
        build(
            vec![
                PromptMessage::system(KEYWORD_SYSTEM_PROMPT),
                PromptMessage::user(format!(
                    "{}\n\nExcerpt:\n{}",
                    KEYWORD_INSTRUCTIONS,
                    document.excerpt(KEYWORD_EXCERPT_CHARS)
                )),
            ],
            KEYWORDS,
        )
    }

    /// Canned request used to check that the provider answers at all.
    pub fn connectivity_probe(&self) -> CompletionRequest {
        build(
            vec![
                PromptMessage::system(self.system_prompt.as_str()),
                PromptMessage::user(PROBE_PROMPT),
            ],
            PROBE,
        )
    }
}

fn build(messages: Vec<PromptMessage>, sampling: Sampling) -> CompletionRequest {
    CompletionRequest {
        messages,
        temperature: sampling.temperature,
        max_tokens: sampling.max_tokens,
    }
}
