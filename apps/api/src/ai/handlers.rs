use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::prompts::{bio_prompt, cryptic_clue_prompt, BIO_SYSTEM, CRYPTIC_CLUE_SYSTEM};
use crate::errors::AppError;
use crate::roster::models::PlayerId;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PlayerIdRequest {
    pub player_id: PlayerId,
}

#[derive(Serialize)]
pub struct CrypticClueResponse {
    pub clue: String,
}

#[derive(Serialize)]
pub struct BioResponse {
    pub bio: String,
}

/// POST /api/v1/ai/cryptic-clue
/// Wordplay clue on the player's name. Optional feature: without an API key
/// this answers 503 and the core clue flow never notices.
pub async fn handle_cryptic_clue(
    State(state): State<AppState>,
    Json(req): Json<PlayerIdRequest>,
) -> Result<Json<CrypticClueResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::AiUnavailable)?;
    let player = state
        .roster
        .get(req.player_id)
        .ok_or_else(|| AppError::NotFound(format!("Player {} not found", req.player_id)))?;

    let prompt = cryptic_clue_prompt(&player.full_name());
    let response = llm
        .call(&prompt, CRYPTIC_CLUE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("cryptic clue generation failed: {e}")))?;
    let clue = response
        .text()
        .ok_or_else(|| AppError::Llm("cryptic clue response was empty".to_string()))?;

    Ok(Json(CrypticClueResponse {
        clue: clue.trim().to_string(),
    }))
}

/// POST /api/v1/ai/bio
/// Short post-game biography shown after a correct guess.
pub async fn handle_bio(
    State(state): State<AppState>,
    Json(req): Json<PlayerIdRequest>,
) -> Result<Json<BioResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::AiUnavailable)?;
    let player = state
        .roster
        .get(req.player_id)
        .ok_or_else(|| AppError::NotFound(format!("Player {} not found", req.player_id)))?;

    let prompt = bio_prompt(player, &state.roster.club);
    let response = llm
        .call(&prompt, BIO_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("bio generation failed: {e}")))?;
    let bio = response
        .text()
        .ok_or_else(|| AppError::Llm("bio response was empty".to_string()))?;

    Ok(Json(BioResponse {
        bio: bio.trim().to_string(),
    }))
}
