mod adjustment;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SoulBalance API v{}", env!("CARGO_PKG_VERSION"));

    let generator = build_generator(&config);

    let state = AppState {
        generator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the Gemini client, or `None` when it cannot be used.
/// The service still starts so health checks and the fallback path keep working.
fn build_generator(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("GEMINI_API_KEY not set; assessments will return the fallback result");
        return None;
    };

    match LlmClient::new(
        api_key,
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    ) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        Err(e) => {
            error!("Failed to initialize LLM client: {e}");
            None
        }
    }
}
