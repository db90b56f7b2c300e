mod config;
mod db;
mod engineers;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::engineers::EngineerService;
use crate::llm_client::AnthropicClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgEngineerStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DevPath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the schema is in place
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Initialize the chat client (key and model fixed at construction)
    let chat = AnthropicClient::new(config.anthropic_api_key.clone(), config.chat_model.clone());
    info!("Chat client initialized (model: {})", chat.model());

    // Wire the enrichment workflow to its collaborators
    let engineers = EngineerService::new(Arc::new(PgEngineerStore::new(db)), Arc::new(chat));

    // Build app state & router
    let state = AppState { engineers };
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
