//! Chat and document-summary gateway in front of an OpenAI-compatible completion
//! provider.
//!
//! Layers: `domain` (sessions, turns, documents, summaries), `application` (ports and
//! the chat/summary services), `infrastructure` (provider client, text extraction,
//! in-memory session store, tracing) and `presentation` (axum router and settings).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
