use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::errors::AppError;
use crate::roster::models::PlayerRecord;

/// Which underlying roster field a clue reveals. Once a fact is used in
/// tiers 1-4 it is out of candidacy for every other tier; tier 5 is the one
/// place already-used facts come back, combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    Birthdate,
    Birthplace,
    Appearances,
    Goals,
    Position,
    PreviousTeam,
    NextTeam,
    Spells,
    Combination,
}

pub const TIER_COUNT: usize = 5;

/// One clue in the fixed hardest-to-easiest reveal order.
/// Tier 1 pays 5 stars down to tier 5 paying 1.
#[derive(Debug, Clone, Serialize)]
pub struct ClueTier {
    pub tier: u8,
    pub stars: u8,
    pub fact: FactKind,
    pub text: String,
}

/// Primary fact for each of tiers 1-4, hardest first.
const PRIMARY_FACTS: [FactKind; 4] = [
    FactKind::Birthdate,
    FactKind::Birthplace,
    FactKind::Appearances,
    FactKind::Position,
];

/// Substitutes tried in order when a tier's primary fact is missing from the
/// record. Previous/next team are skipped outright when the field is null
/// (academy graduate / retired at the club); goals and spells always render,
/// so a well-formed record always fills all five tiers.
const SECONDARY_FACTS: [FactKind; 4] = [
    FactKind::PreviousTeam,
    FactKind::NextTeam,
    FactKind::Goals,
    FactKind::Spells,
];

/// Builds the five clue tiers for a player, fully rendered. The caller
/// reveals them one at a time and never sends more than one per request.
///
/// Tier 5 recombines two facts already revealed in tiers 1-4 into one
/// sentence. The pair is chosen by a generator seeded with the player id, so
/// a given player always composes the same facts while different players
/// vary.
pub fn build_clues(player: &PlayerRecord, club: &str) -> Result<Vec<ClueTier>, AppError> {
    let mut used: Vec<(FactKind, String)> = Vec::with_capacity(PRIMARY_FACTS.len());
    let mut tiers = Vec::with_capacity(TIER_COUNT);

    for (i, &primary) in PRIMARY_FACTS.iter().enumerate() {
        let found = std::iter::once(primary)
            .chain(SECONDARY_FACTS.iter().copied())
            .filter(|fact| !used.iter().any(|(f, _)| f == fact))
            .find_map(|fact| render_fragment(player, club, fact).map(|frag| (fact, frag)));

        let Some((fact, fragment)) = found else {
            return Err(AppError::InsufficientData(format!(
                "player {}: only {} of {} single-fact clues available",
                player.id,
                used.len(),
                TIER_COUNT - 1
            )));
        };

        let tier = (i + 1) as u8;
        tiers.push(ClueTier {
            tier,
            stars: 6 - tier,
            fact,
            text: format!("This player {fragment}."),
        });
        used.push((fact, fragment));
    }

    tiers.push(composite_tier(player, &used)?);
    Ok(tiers)
}

/// Tier 5: one sentence built from two of the facts revealed above, picked
/// deterministically from the player id.
fn composite_tier(
    player: &PlayerRecord,
    used: &[(FactKind, String)],
) -> Result<ClueTier, AppError> {
    let mut pairs = Vec::new();
    for i in 0..used.len() {
        for j in (i + 1)..used.len() {
            pairs.push((i, j));
        }
    }
    if pairs.is_empty() {
        return Err(AppError::InsufficientData(format!(
            "player {}: not enough facts for a composite clue",
            player.id
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(player.id));
    let (a, b) = pairs[rng.gen_range(0..pairs.len())];

    let tier = TIER_COUNT as u8;
    Ok(ClueTier {
        tier,
        stars: 6 - tier,
        fact: FactKind::Combination,
        text: format!("This player {} and {}.", used[a].1, used[b].1),
    })
}

/// Renders the sentence fragment for a single fact, or None when the record
/// cannot support it.
fn render_fragment(player: &PlayerRecord, club: &str, fact: FactKind) -> Option<String> {
    match fact {
        FactKind::Birthdate => player
            .date_of_birth
            .map(|d| format!("was born on {}", d.format("%B %-d, %Y"))),
        FactKind::Birthplace => player
            .birthplace
            .as_ref()
            .map(|place| format!("was born in {place}")),
        FactKind::Appearances => Some(format!(
            "made {} league appearances for {club}",
            player.appearances
        )),
        FactKind::Position => Some(format!("is a {}", player.position.as_str())),
        FactKind::Goals => Some(format!("scored {} league goals for {club}", player.goals)),
        FactKind::Spells => Some(format!("had {} spell(s) at {club}", player.spells)),
        FactKind::PreviousTeam => player
            .previous_team
            .as_ref()
            .map(|team| format!("joined {club} from {team}")),
        FactKind::NextTeam => player
            .next_team
            .as_ref()
            .map(|team| format!("left {club} to join {team}")),
        FactKind::Combination => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::models::Position;
    use chrono::NaiveDate;

    const CLUB: &str = "Brighton & Hove Albion";

    /// The worked example: DOB 1985-01-15, born in Liverpool, 156 league
    /// appearances, defender, 2 spells, no previous or next team.
    fn sample_player() -> PlayerRecord {
        PlayerRecord {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 1, 15),
            birthplace: Some("Liverpool, England".to_string()),
            position: Position::Defender,
            appearances: 156,
            goals: 12,
            spells: 2,
            previous_team: None,
            next_team: None,
            years_at_club: None,
        }
    }

    #[test]
    fn test_five_tiers_in_fixed_star_order() {
        let clues = build_clues(&sample_player(), CLUB).unwrap();
        assert_eq!(clues.len(), TIER_COUNT);
        for (i, clue) in clues.iter().enumerate() {
            assert_eq!(clue.tier, (i + 1) as u8);
            assert_eq!(clue.stars, 5 - i as u8);
        }
    }

    #[test]
    fn test_full_record_uses_the_primary_facts() {
        let clues = build_clues(&sample_player(), CLUB).unwrap();
        assert_eq!(clues[0].fact, FactKind::Birthdate);
        assert_eq!(clues[1].fact, FactKind::Birthplace);
        assert_eq!(clues[2].fact, FactKind::Appearances);
        assert_eq!(clues[3].fact, FactKind::Position);
        assert_eq!(clues[4].fact, FactKind::Combination);
    }

    #[test]
    fn test_rendered_texts_for_sample_player() {
        let clues = build_clues(&sample_player(), CLUB).unwrap();
        assert!(clues[0].text.contains("January 15, 1985"), "{}", clues[0].text);
        assert!(clues[1].text.contains("Liverpool, England"));
        assert!(clues[2].text.contains("156"));
        assert!(clues[3].text.contains("defender"));
    }

    #[test]
    fn test_composite_recombines_two_used_facts() {
        let clues = build_clues(&sample_player(), CLUB).unwrap();
        let composite = &clues[4];
        assert_eq!(composite.fact, FactKind::Combination);

        let fragments = [
            "January 15, 1985",
            "Liverpool, England",
            "156 league appearances",
            "is a defender",
        ];
        let present = fragments
            .iter()
            .filter(|f| composite.text.contains(*f))
            .count();
        assert_eq!(present, 2, "composite was: {}", composite.text);
    }

    #[test]
    fn test_no_duplicate_fact_across_tiers_one_to_four() {
        let clues = build_clues(&sample_player(), CLUB).unwrap();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(clues[i].fact, clues[j].fact);
            }
        }
    }

    #[test]
    fn test_missing_birthdate_substitutes_previous_team() {
        let player = PlayerRecord {
            date_of_birth: None,
            previous_team: Some("Crystal Palace".to_string()),
            ..sample_player()
        };
        let clues = build_clues(&player, CLUB).unwrap();
        assert_eq!(clues.len(), TIER_COUNT);
        assert_eq!(clues[0].fact, FactKind::PreviousTeam);
        assert!(clues[0].text.contains("from Crystal Palace"));
        assert!(!clues.iter().any(|c| c.text.contains("was born on")));
    }

    #[test]
    fn test_null_previous_team_is_skipped_not_substituted() {
        // No birthdate and no previous team: the next-team template is the
        // next substitute in line
        let player = PlayerRecord {
            date_of_birth: None,
            previous_team: None,
            next_team: Some("Leeds United".to_string()),
            ..sample_player()
        };
        let clues = build_clues(&player, CLUB).unwrap();
        assert_eq!(clues[0].fact, FactKind::NextTeam);
        assert!(!clues.iter().any(|c| c.text.contains("joined")));
    }

    #[test]
    fn test_null_previous_and_next_team_never_mentioned() {
        let player = PlayerRecord {
            date_of_birth: None,
            birthplace: None,
            ..sample_player()
        };
        let clues = build_clues(&player, CLUB).unwrap();
        assert_eq!(clues.len(), TIER_COUNT);
        for clue in &clues {
            assert!(!clue.text.contains("joined"), "{}", clue.text);
            assert!(!clue.text.contains("left"), "{}", clue.text);
        }
    }

    #[test]
    fn test_two_missing_primaries_fall_back_to_goals_and_spells() {
        let player = PlayerRecord {
            date_of_birth: None,
            birthplace: None,
            ..sample_player()
        };
        let clues = build_clues(&player, CLUB).unwrap();
        let facts: Vec<FactKind> = clues.iter().map(|c| c.fact).collect();
        assert!(facts.contains(&FactKind::Goals));
        assert!(facts.contains(&FactKind::Spells));
        assert!(facts.contains(&FactKind::Appearances));
        assert!(facts.contains(&FactKind::Position));
    }

    #[test]
    fn test_composite_is_deterministic_per_player() {
        let player = sample_player();
        let a = build_clues(&player, CLUB).unwrap();
        let b = build_clues(&player, CLUB).unwrap();
        assert_eq!(a[4].text, b[4].text);
    }

    #[test]
    fn test_composite_varies_across_players() {
        let mut texts = std::collections::HashSet::new();
        for id in 0..32 {
            let player = PlayerRecord {
                id,
                ..sample_player()
            };
            let clues = build_clues(&player, CLUB).unwrap();
            texts.insert(clues[4].text.clone());
        }
        assert!(texts.len() > 1, "every player id composed the same pair");
    }

    #[test]
    fn test_goalkeeper_position_renders() {
        let player = PlayerRecord {
            position: Position::Goalkeeper,
            ..sample_player()
        };
        let clues = build_clues(&player, CLUB).unwrap();
        assert!(clues[3].text.contains("is a goalkeeper"));
    }
}
