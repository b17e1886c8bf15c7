use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatbot_ai_service::{
    config::Config,
    routes::{cors_layer, create_router},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("loading configuration")?;
    info!(?config, "configuration loaded");
    if config.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; completion requests will be rejected upstream");
    }

    let cors = cors_layer(&config.client_url)
        .with_context(|| format!("CLIENT_URL {:?} is not a valid origin", config.client_url))?;
    let bind_addr = config.bind_addr;

    let state = Arc::new(AppState::from_config(config).context("building completion client")?);

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;

    info!("Chatbot AI Service running at http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
