use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::config::Config;
use crate::game::recents::RecentStore;
use crate::llm_client::LlmClient;
use crate::roster::models::PlayerId;
use crate::roster::Roster;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The full player table. Read-only after startup, so handlers share it
    /// without locking.
    pub roster: Arc<Roster>,
    /// The one mutable persisted resource. The mutex serializes two
    /// first-requests-of-the-day racing to append the same date.
    pub recents: Arc<Mutex<RecentStore>>,
    /// Debug-only override of today's pick. Ignored unless APP_DEBUG=1.
    pub override_player: Arc<Mutex<Option<PlayerId>>>,
    /// None when ANTHROPIC_API_KEY is unset; the AI routes answer 503.
    pub llm: Option<LlmClient>,
    /// Clock seam — the game day rolls over at midnight UTC in production.
    pub clock: Arc<dyn Clock>,
    pub config: Config,
}
