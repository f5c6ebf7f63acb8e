// Generation model providers
//
// The chat and analysis endpoints talk to the model through `LlmProvider`,
// so the service can run against Gemini (default) or Claude, and tests can
// substitute a recording mock.

use anyhow::Result;
use async_trait::async_trait;

pub mod types;

// Provider implementations
pub mod claude;
pub mod gemini;

// Provider factory
pub mod factory;

pub use factory::create_provider;
pub use types::{ChatTurn, GenerationRequest, GenerationResponse};

/// Trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the complete reply
    ///
    /// Implementations make exactly one upstream call; failures are returned
    /// to the caller without retrying.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;

    /// Get the provider name (e.g., "gemini", "claude")
    fn name(&self) -> &str;

    /// Get the default model for this provider
    fn default_model(&self) -> &str;
}
