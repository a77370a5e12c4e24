// Prompts for the optional AI features. Each service that needs LLM calls
// keeps its prompts alongside its handlers.

use crate::roster::models::PlayerRecord;

pub const CRYPTIC_CLUE_SYSTEM: &str = "You are a witty and intelligent cryptic clue setter \
    for a football guessing game. You answer with the clue text alone: no preamble, no \
    explanation, and never the player's name.";

pub fn cryptic_clue_prompt(full_name: &str) -> String {
    format!(
        "Create a single, short, clever cryptic clue based on wordplay of the footballer's \
name: \"{full_name}\".

Instructions:
1. The clue MUST be based on the sound, spelling, or meaning of the player's name (first, last, or both).
2. Do NOT use biographical information such as position, nationality, or former clubs. The clue must be about the name itself.
3. Keep it short and punchy.
4. Do not reveal the answer or the player's name in your response.

Examples of good clues:
- For a player named \"Gross\": \"Sounds like an unpleasant amount of goals.\"
- For a player named \"Dunk\": \"To submerge a biscuit, or a type of slam in basketball.\"
- For a player named \"March\": \"The third month of the year, or to walk in a military manner.\"

Now, generate a cryptic clue for: \"{full_name}\""
    )
}

pub const BIO_SYSTEM: &str = "You are a knowledgeable and enthusiastic football commentator. \
    You write in a confident and informative tone and never say that information is limited \
    or that further research is needed.";

pub fn bio_prompt(player: &PlayerRecord, club: &str) -> String {
    format!(
        "Write a short, engaging biography (2-3 sentences) for the following {club} footballer \
based ONLY on the data provided below.

Player data:
- Name: {name}
- Position: {position}
- League appearances for {club}: {appearances}
- League goals for {club}: {goals}
- Spells at {club}: {spells}
- Joined from: {joined_from}
- Left for: {left_for}
- Seasons at {club}: {seasons}

Instructions:
1. Focus on their contribution and time at {club}. If the seasons are listed above, mention them.
2. Do not invent facts, nicknames, or events not present in the data. Do not overestimate their importance to the club.
",
        name = player.full_name(),
        position = player.position.as_str(),
        appearances = player.appearances,
        goals = player.goals,
        spells = player.spells,
        joined_from = player.previous_team.as_deref().unwrap_or("the youth academy"),
        left_for = player.next_team.as_deref().unwrap_or("nobody (retired or still at the club)"),
        seasons = player.years_at_club.as_deref().unwrap_or("not recorded"),
    )
}
