// Request and response bodies

use serde::{Deserialize, Serialize};

use crate::providers::ChatTurn;

/// Request body for /api/chat and /api/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    /// Conversation history, oldest first. For analysis the transcript is
    /// carried in the first turn's first part.
    pub history: Vec<ChatTurn>,
}

/// Response body for /api/chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotResponse {
    pub reply: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub provider: String,
    pub model: String,
}
