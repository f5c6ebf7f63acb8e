// Provider-agnostic request/response types

use serde::{Deserialize, Serialize};

/// One message of caller-owned conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Speaker role as sent by the client ("user" or "model")
    pub role: String,
    /// Ordered text parts of the message
    pub parts: Vec<String>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![text.into()],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![text.into()],
        }
    }

    /// First text part, if the turn has any
    pub fn first_part(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    /// All parts joined with newlines
    pub fn text(&self) -> String {
        self.parts.join("\n")
    }
}

/// Unified request format for all providers
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Behavioral directive kept separate from the history
    pub system_instruction: Option<String>,

    /// Conversation turns in order
    pub turns: Vec<ChatTurn>,

    /// Model name; empty means the provider default
    pub model: String,
}

impl GenerationRequest {
    /// Create a request from role-tagged history
    pub fn from_history(turns: Vec<ChatTurn>) -> Self {
        Self {
            system_instruction: None,
            turns,
            model: String::new(),
        }
    }

    /// Create a single-turn request from one prompt string
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::from_history(vec![ChatTurn::user(prompt)])
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Unified response format from providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text, concatenated across parts
    pub text: String,

    /// Model that generated the response
    pub model: String,

    /// Why the model stopped generating
    pub finish_reason: Option<String>,

    /// Provider name (e.g., "gemini", "claude")
    pub provider: String,
}
