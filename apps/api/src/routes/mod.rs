pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai;
use crate::game::{debug, handlers};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // Core game
        .route("/api/v1/challenge", get(handlers::handle_challenge))
        .route("/api/v1/clues/next", post(handlers::handle_next_clue))
        .route("/api/v1/guess", post(handlers::handle_guess))
        .route("/api/v1/config", get(handlers::handle_config))
        // Optional AI extras (503 without an API key)
        .route("/api/v1/ai/cryptic-clue", post(ai::handlers::handle_cryptic_clue))
        .route("/api/v1/ai/bio", post(ai::handlers::handle_bio));

    // The debug surface only exists when APP_DEBUG=1; in the default
    // configuration these paths 404
    if state.config.debug {
        router = router
            .route("/api/v1/debug/player", post(debug::handle_set_player))
            .route(
                "/api/v1/debug/recents",
                get(debug::handle_recents).delete(debug::handle_clear_recents),
            );
    }

    router.with_state(state)
}
