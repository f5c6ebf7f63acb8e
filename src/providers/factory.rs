// Provider factory
//
// Creates LLM providers based on configuration

use anyhow::{bail, Result};
use std::time::Duration;

use super::claude::ClaudeProvider;
use super::gemini::GeminiProvider;
use super::LlmProvider;
use crate::config::ProviderSettings;

/// Create a provider from the configured settings
pub fn create_provider(settings: &ProviderSettings) -> Result<Box<dyn LlmProvider>> {
    let timeout = Duration::from_secs(settings.request_timeout_secs);

    match settings.name.as_str() {
        "gemini" => {
            let mut provider = GeminiProvider::with_timeout(settings.api_key.clone(), timeout)?;
            if let Some(model) = &settings.model {
                provider = provider.with_model(model.clone());
            }
            if let Some(base_url) = &settings.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Box::new(provider))
        }

        "claude" => {
            let mut provider = ClaudeProvider::with_timeout(settings.api_key.clone(), timeout)?;
            if let Some(model) = &settings.model {
                provider = provider.with_model(model.clone());
            }
            if let Some(base_url) = &settings.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Box::new(provider))
        }

        other => bail!("Unknown provider: {}", other),
    }
}
