use chrono::{Datelike, Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::game::recents::RecentStore;
use crate::roster::models::PlayerId;
use crate::roster::Roster;

/// Outcome of a daily selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub player_id: PlayerId,
    /// True when this call created the day's record; the caller persists the
    /// store exactly once per day, on this flag.
    pub newly_selected: bool,
}

/// Derives the per-day RNG seed as `year * 1000 + day_of_year`.
///
/// The formula is frozen: determinism across restarts and debug re-derivation
/// of any day's pick both depend on it.
pub fn derive_seed(date: NaiveDate) -> u64 {
    date.year() as u64 * 1000 + u64::from(date.ordinal())
}

/// Picks the player of the day.
///
/// Deterministic for a given date and recency state: the seed comes from the
/// date alone and indexes into the eligible pool. Players selected within the
/// trailing `window_days` are excluded; if that empties the pool the window
/// is ignored for this one pick (reset policy) rather than failing the day.
///
/// Idempotent per date — an existing record for `date` is returned without a
/// new append. The caller holds the store lock and saves after a fresh pick.
pub fn select_for_date(
    date: NaiveDate,
    roster: &Roster,
    recents: &mut RecentStore,
    window_days: u32,
) -> Result<Selection, AppError> {
    if roster.is_empty() {
        return Err(AppError::DataUnavailable(
            "player table is empty".to_string(),
        ));
    }

    let cutoff = date
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);
    recents.prune_before(cutoff);

    if let Some(player_id) = recents.get(date) {
        debug!("Reusing existing selection for {date}: player {player_id}");
        return Ok(Selection {
            player_id,
            newly_selected: false,
        });
    }

    // Only players who actually made a league appearance can be the answer
    let eligible: Vec<PlayerId> = roster
        .players
        .iter()
        .filter(|p| p.appearances > 0)
        .map(|p| p.id)
        .collect();
    if eligible.is_empty() {
        return Err(AppError::PoolExhausted(
            "no player in the table has a league appearance".to_string(),
        ));
    }

    let used = recents.used_since(cutoff);
    let mut pool: Vec<PlayerId> = eligible
        .iter()
        .copied()
        .filter(|id| !used.contains(id))
        .collect();

    // Reset policy: when the window has consumed every eligible player, fall
    // back to the full pool for this pick. The recency list stays intact and
    // the window resumes normally afterwards.
    if pool.is_empty() {
        info!("No-repeat window exhausted the pool for {date}; picking from the full eligible set");
        pool = eligible;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(derive_seed(date));
    let player_id = pool[rng.gen_range(0..pool.len())];

    recents.insert(date, player_id);
    info!("Selected player {player_id} for {date}");
    Ok(Selection {
        player_id,
        newly_selected: true,
    })
}
