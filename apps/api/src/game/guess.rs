use crate::roster::models::PlayerRecord;

/// Normalizes a name for comparison: trim, lowercase, and map curly quotes
/// to their straight ASCII forms so a phone keyboard's apostrophe still
/// matches. Internal hyphens and spaces are compared as stored — knowing the
/// exact spelling is part of the challenge.
fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Exact, case-insensitive match after trimming. No fuzzy matching and no
/// spell correction.
pub fn validate_guess(first: &str, last: &str, player: &PlayerRecord) -> bool {
    normalize(first) == normalize(&player.first_name)
        && normalize(last) == normalize(&player.last_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::models::Position;

    fn player(first: &str, last: &str) -> PlayerRecord {
        PlayerRecord {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: None,
            birthplace: None,
            position: Position::Defender,
            appearances: 100,
            goals: 5,
            spells: 1,
            previous_team: None,
            next_team: None,
            years_at_club: None,
        }
    }

    #[test]
    fn test_exact_match() {
        assert!(validate_guess("John", "Smith", &player("John", "Smith")));
    }

    #[test]
    fn test_trim_and_case_insensitive() {
        assert!(validate_guess(" john ", " SMITH ", &player("John", "Smith")));
    }

    #[test]
    fn test_wrong_spelling_rejected() {
        assert!(!validate_guess("Jon", "Smith", &player("John", "Smith")));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(!validate_guess("", "", &player("John", "Smith")));
        assert!(!validate_guess("John", "", &player("John", "Smith")));
    }

    #[test]
    fn test_smart_apostrophe_matches_straight() {
        assert!(validate_guess(
            "Mark",
            "O\u{2019}Mahony",
            &player("Mark", "O'Mahony")
        ));
    }

    #[test]
    fn test_hyphenated_name_must_keep_hyphen() {
        let p = player("Colin", "Kazim-Richards");
        assert!(validate_guess("Colin", "Kazim-Richards", &p));
        assert!(!validate_guess("Colin", "Kazim Richards", &p));
    }

    #[test]
    fn test_internal_spaces_compared_as_stored() {
        let p = player("Alexis", "Mac Allister");
        assert!(validate_guess("alexis", "mac allister", &p));
        assert!(!validate_guess("alexis", "macallister", &p));
    }
}
