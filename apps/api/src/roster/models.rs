use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

/// Playing position as recorded in the roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }
}

/// One row of the player table. Loaded once at startup and never mutated.
///
/// Names are stored trimmed; rows with an empty first or last name, or zero
/// spells, are rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub birthplace: Option<String>,
    pub position: Position,
    /// League appearances for the club. Players with zero never enter the
    /// daily pool.
    pub appearances: u32,
    pub goals: u32,
    /// Separate spells at the club; at least 1 for any valid record.
    pub spells: u32,
    /// None means the player came through the youth academy.
    #[serde(default)]
    pub previous_team: Option<String>,
    /// None means the player retired at the club or is still there.
    #[serde(default)]
    pub next_team: Option<String>,
    /// Seasons range such as "2010-2015, 2018-2020". Display-only.
    #[serde(default)]
    pub years_at_club: Option<String>,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
