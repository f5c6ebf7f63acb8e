// MindWell HTTP server module
// Stateless chat and analysis endpoints in front of the generation model

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use handlers::{create_router, health_check};
pub use types::{BotResponse, HealthStatus, UserInput};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::crisis::CrisisDetector;
use crate::providers::LlmProvider;
use crate::text::TextNormalizer;

/// Shared, read-only request state
pub struct WellnessServer {
    /// Generation model client (shared across requests)
    provider: Arc<dyn LlmProvider>,
    /// Crisis keyword tables
    detector: CrisisDetector,
    /// Transcript normalizer
    normalizer: TextNormalizer,
    /// Server configuration
    config: ServerConfig,
}

impl WellnessServer {
    /// Create a new server around a provider
    pub fn new(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            detector: CrisisDetector::new(),
            normalizer: TextNormalizer::new(),
            config,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.config.bind_address))?;

        // Build router
        let app = create_router(Arc::new(self))?.layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!(crate::errors::bind_error(&addr.to_string(), &e.to_string())))?;

        tracing::info!("Starting MindWell server on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get reference to the generation provider
    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    /// Get reference to the crisis detector
    pub fn detector(&self) -> &CrisisDetector {
        &self.detector
    }

    /// Get reference to the transcript normalizer
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
