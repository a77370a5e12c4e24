//! Debug-only handlers. The router mounts these only when APP_DEBUG=1; in
//! the default configuration the paths do not exist at all.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roster::models::PlayerId;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SetPlayerRequest {
    pub player_id: PlayerId,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct RecentEntry {
    pub date: NaiveDate,
    pub player_id: PlayerId,
    /// None when the roster no longer carries the id.
    pub player_name: Option<String>,
}

#[derive(Serialize)]
pub struct RecentsResponse {
    pub recent_selections: Vec<RecentEntry>,
    pub total_players: usize,
}

/// POST /api/v1/debug/player
/// Overrides today's pick for local testing. No recency record is written.
pub async fn handle_set_player(
    State(state): State<AppState>,
    Json(req): Json<SetPlayerRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    if state.roster.get(req.player_id).is_none() {
        return Err(AppError::Validation(format!(
            "unknown player id {}",
            req.player_id
        )));
    }
    *state.override_player.lock().await = Some(req.player_id);
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/v1/debug/recents
pub async fn handle_recents(State(state): State<AppState>) -> Json<RecentsResponse> {
    let recents = state.recents.lock().await;
    let recent_selections = recents
        .entries()
        .map(|(date, player_id)| RecentEntry {
            date,
            player_id,
            player_name: state.roster.get(player_id).map(|p| p.full_name()),
        })
        .collect();
    Json(RecentsResponse {
        recent_selections,
        total_players: state.roster.len(),
    })
}

/// DELETE /api/v1/debug/recents
/// The one sanctioned break from append-only: wipes the recency list and the
/// override so selection starts clean.
pub async fn handle_clear_recents(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .recents
        .lock()
        .await
        .clear()
        .map_err(AppError::Internal)?;
    *state.override_player.lock().await = None;
    Ok(Json(SuccessResponse { success: true }))
}
