use serde::{Deserialize, Serialize};

/// Speaker of a prompt message. Session turns only ever carry `User` or `Assistant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}
