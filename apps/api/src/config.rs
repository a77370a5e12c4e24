use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; the service runs from a checkout with no .env.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the player table. Read once at startup.
    pub roster_path: PathBuf,
    /// JSON file holding the (date, player_id) recency list.
    pub recents_path: PathBuf,
    /// Days a selected player stays out of the daily pool (NO_REPEAT_DAYS).
    pub no_repeat_days: u32,
    /// Enables the debug routes and the daily-pick override. Never set this
    /// in production.
    pub debug: bool,
    /// Unset disables the AI clue/bio routes; the core game is unaffected.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            roster_path: env_or("ROSTER_PATH", "data/players.json").into(),
            recents_path: env_or("RECENTS_PATH", "recent_selections.json").into(),
            no_repeat_days: env_or("NO_REPEAT_DAYS", "30")
                .parse::<u32>()
                .context("NO_REPEAT_DAYS must be a whole number of days")?,
            debug: matches!(
                std::env::var("APP_DEBUG").as_deref(),
                Ok("1") | Ok("true")
            ),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
