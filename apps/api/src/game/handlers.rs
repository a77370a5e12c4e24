use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::game::clues::{build_clues, ClueTier, TIER_COUNT};
use crate::game::guess::validate_guess;
use crate::game::select::select_for_date;
use crate::roster::models::{PlayerId, PlayerRecord};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ChallengeResponse {
    /// Opaque handle for the AI routes; never enough to identify the player.
    pub player_id: PlayerId,
    pub first_name_length: usize,
    pub last_name_length: usize,
    /// Tier 1, worth 5 stars. Further tiers come from /clues/next.
    pub clue: ClueTier,
}

#[derive(Deserialize)]
pub struct NextClueRequest {
    /// Tiers the client has revealed so far (1 after the opening clue).
    pub revealed: u8,
}

#[derive(Serialize)]
pub struct NextClueResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<ClueTier>,
    /// True once all five tiers are out.
    pub exhausted: bool,
}

#[derive(Deserialize)]
pub struct GuessRequest {
    pub first_name: String,
    pub last_name: String,
    /// Tiers revealed when the guess was made; the payout comes from the
    /// highest one.
    pub revealed: u8,
}

#[derive(Serialize)]
pub struct GuessResponse {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Serialize)]
pub struct ConfigResponse {
    pub debug: bool,
    pub player_count: usize,
}

/// Resolves today's player id: the debug override when set, otherwise the
/// daily selection. A fresh pick is persisted before the lock is released,
/// so two racing first-requests-of-the-day agree on the answer.
async fn daily_player_id(state: &AppState) -> Result<PlayerId, AppError> {
    if state.config.debug {
        if let Some(id) = *state.override_player.lock().await {
            return Ok(id);
        }
    }

    let today = state.clock.today();
    let mut recents = state.recents.lock().await;
    let selection = select_for_date(
        today,
        &state.roster,
        &mut recents,
        state.config.no_repeat_days,
    )?;
    if selection.newly_selected {
        recents.save().map_err(AppError::Internal)?;
    }
    Ok(selection.player_id)
}

fn lookup(state: &AppState, id: PlayerId) -> Result<&PlayerRecord, AppError> {
    state
        .roster
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Player {id} is not in the roster")))
}

/// GET /api/v1/challenge
pub async fn handle_challenge(
    State(state): State<AppState>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let id = daily_player_id(&state).await?;
    let player = lookup(&state, id)?;

    let clue = build_clues(player, &state.roster.club)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InsufficientData(format!("player {id} produced no clues")))?;

    Ok(Json(ChallengeResponse {
        player_id: id,
        first_name_length: player.first_name.chars().count(),
        last_name_length: player.last_name.chars().count(),
        clue,
    }))
}

/// POST /api/v1/clues/next
/// One tier per call; after tier 5 the response is an explicit exhausted
/// signal, never an error.
pub async fn handle_next_clue(
    State(state): State<AppState>,
    Json(req): Json<NextClueRequest>,
) -> Result<Json<NextClueResponse>, AppError> {
    if req.revealed < 1 {
        return Err(AppError::Validation(
            "revealed must be between 1 and 5".to_string(),
        ));
    }
    if usize::from(req.revealed) >= TIER_COUNT {
        return Ok(Json(NextClueResponse {
            clue: None,
            exhausted: true,
        }));
    }

    let id = daily_player_id(&state).await?;
    let player = lookup(&state, id)?;

    let clue = build_clues(player, &state.roster.club)?
        .into_iter()
        .nth(usize::from(req.revealed));
    Ok(Json(NextClueResponse {
        exhausted: clue.is_none(),
        clue,
    }))
}

/// POST /api/v1/guess
pub async fn handle_guess(
    State(state): State<AppState>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, AppError> {
    if req.revealed < 1 || usize::from(req.revealed) > TIER_COUNT {
        return Err(AppError::Validation(
            "revealed must be between 1 and 5".to_string(),
        ));
    }

    let rejected = GuessResponse {
        correct: false,
        stars: None,
        full_name: None,
    };

    // Empty input is a rejected guess, not a fault
    if req.first_name.trim().is_empty() && req.last_name.trim().is_empty() {
        return Ok(Json(rejected));
    }

    let id = daily_player_id(&state).await?;
    let player = lookup(&state, id)?;

    if !validate_guess(&req.first_name, &req.last_name, player) {
        return Ok(Json(rejected));
    }

    // Star value of the highest tier revealed: tier 1 pays 5, tier 5 pays 1
    Ok(Json(GuessResponse {
        correct: true,
        stars: Some(6 - req.revealed),
        full_name: Some(player.full_name()),
    }))
}

/// GET /api/v1/config
pub async fn handle_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        debug: state.config.debug,
        player_count: state.roster.len(),
    })
}
