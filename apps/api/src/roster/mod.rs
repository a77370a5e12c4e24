pub mod models;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use models::{PlayerId, PlayerRecord};

/// The full player table plus the club display name used in clue templates.
/// Loaded once at startup and treated as read-only shared state.
#[derive(Debug)]
pub struct Roster {
    pub club: String,
    pub players: Vec<PlayerRecord>,
    index: HashMap<PlayerId, usize>,
}

impl Roster {
    pub fn new(club: String, players: Vec<PlayerRecord>) -> Self {
        let index = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        Self {
            club,
            players,
            index,
        }
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[derive(Deserialize)]
struct RosterFile {
    club: String,
    players: Vec<serde_json::Value>,
}

/// Loads the roster from a JSON file.
///
/// Individual malformed rows are skipped with a warning so one bad record
/// cannot take the whole table down; a missing, unparseable, or empty table
/// is fatal.
pub fn load(path: &Path) -> Result<Roster, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::DataUnavailable(format!("cannot read roster file {}: {e}", path.display()))
    })?;

    let file: RosterFile = serde_json::from_str(&raw).map_err(|e| {
        AppError::DataUnavailable(format!("cannot parse roster file {}: {e}", path.display()))
    })?;

    let mut players = Vec::with_capacity(file.players.len());
    let mut seen = HashSet::new();
    for (row, value) in file.players.into_iter().enumerate() {
        match parse_row(value) {
            Ok(player) => {
                if seen.insert(player.id) {
                    players.push(player);
                } else {
                    warn!("Skipping roster row {row}: duplicate player id {}", player.id);
                }
            }
            Err(reason) => warn!("Skipping roster row {row}: {reason}"),
        }
    }

    if players.is_empty() {
        return Err(AppError::DataUnavailable(format!(
            "roster file {} contains no valid players",
            path.display()
        )));
    }

    Ok(Roster::new(file.club, players))
}

fn parse_row(value: serde_json::Value) -> Result<PlayerRecord, String> {
    let mut player: PlayerRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;

    player.first_name = player.first_name.trim().to_string();
    player.last_name = player.last_name.trim().to_string();
    if player.first_name.is_empty() || player.last_name.is_empty() {
        return Err(format!("player {} has an empty name", player.id));
    }
    if player.spells == 0 {
        return Err(format!("player {} has zero spells", player.id));
    }

    // Blank optional strings mean the same as absent ones
    player.birthplace = prune_blank(player.birthplace);
    player.previous_team = prune_blank(player.previous_team);
    player.next_team = prune_blank(player.next_team);
    player.years_at_club = prune_blank(player.years_at_club);

    Ok(player)
}

fn prune_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
