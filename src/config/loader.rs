// Configuration loader
// Reads an optional TOML file, then the environment (API key is env-only)

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{api_key_var, Config, ProviderSettings, ServerConfig, DEFAULT_PROVIDER};
use crate::errors::{config_parse_error, missing_api_key_error};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlConfig {
    provider: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    #[serde(flatten)]
    server: ServerConfig,
}

/// Load configuration from `.env`, the config file and the process environment
///
/// Fails when the selected provider's API key is absent, so the service never
/// starts without model credentials.
pub fn load_config() -> Result<Config> {
    // A missing .env is normal
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    let path = config_path();
    load_config_from(path.as_deref(), |key| std::env::var(key).ok())
}

/// Config file location: `$MINDWELL_CONFIG`, else `~/.mindwell/config.toml`
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("MINDWELL_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".mindwell").join("config.toml"))
}

/// Build a configuration from an optional file and an environment lookup
pub fn load_config_from<F>(path: Option<&Path>, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match path {
        Some(path) if path.exists() => read_toml(path)?,
        _ => TomlConfig::default(),
    };
    let env_value = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    let provider = env_value("MINDWELL_PROVIDER")
        .or(file.provider)
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string())
        .to_lowercase();

    let Some(key_var) = api_key_var(&provider) else {
        bail!("Unknown provider: {} (expected \"gemini\" or \"claude\")", provider);
    };

    let Some(api_key) = env_value(key_var) else {
        bail!(missing_api_key_error(&provider, key_var));
    };

    let mut settings = ProviderSettings::new(provider, api_key);
    settings.model = env_value("MINDWELL_MODEL").or(file.model);
    settings.base_url = file.base_url;
    if let Some(timeout) = file.request_timeout_secs {
        settings.request_timeout_secs = timeout;
    }

    let mut config = Config::new(settings);
    config.server = file.server;
    if let Some(bind) = env_value("MINDWELL_BIND") {
        config.server.bind_address = bind;
    }

    Ok(config)
}

fn read_toml(path: &Path) -> Result<TomlConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!(config_parse_error(&path.display().to_string(), &e.to_string())))
}
