mod ai;
mod clock;
mod config;
mod errors;
mod game;
mod llm_client;
mod roster;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clock::SystemClock;
use crate::config::Config;
use crate::game::recents::RecentStore;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Touchline API v{}", env!("CARGO_PKG_VERSION"));

    // Load the player table; fatal if missing or empty, no game can run without it
    let roster = Arc::new(roster::load(&config.roster_path)?);
    info!("Roster loaded: {} players ({})", roster.len(), roster.club);

    // Open the recent-selections store (missing file starts an empty history)
    let recents = RecentStore::open(config.recents_path.clone());
    info!(
        "Recent-selection store at {} ({} entries)",
        config.recents_path.display(),
        recents.len()
    );

    // Initialize the optional LLM client
    let llm = config.anthropic_api_key.clone().map(LlmClient::new);
    match &llm {
        Some(_) => info!("LLM client initialized (model: {})", llm_client::MODEL),
        None => info!("ANTHROPIC_API_KEY not set; AI clue routes will answer 503"),
    }

    if config.debug {
        info!("Debug routes enabled (APP_DEBUG=1) — do not run this in production");
    }

    // Build app state
    let state = AppState {
        roster,
        recents: Arc::new(Mutex::new(recents)),
        override_player: Arc::new(Mutex::new(None)),
        llm,
        clock: Arc::new(SystemClock),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
