// Text forms shared by the dashboard and the plain-text report.

use pasta_core::{Match, Score};

/// One side of a result: the goal count, or `-` when it was not recorded.
pub fn side_text(score: Score) -> String {
    match score.goals() {
        Some(g) => g.to_string(),
        None => "-".to_string(),
    }
}

/// `2 : 1` for played matches, `vs` for fixtures still to be played.
pub fn score_text(m: &Match) -> String {
    if m.is_played() {
        format!("{} : {}", side_text(m.score1), side_text(m.score2))
    } else {
        "vs".to_string()
    }
}

/// Goal difference with an explicit sign for positive values.
pub fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(score1: Score, score2: Score) -> Match {
        Match {
            matchday: Some(1),
            player1: "A".into(),
            player2: "B".into(),
            score1,
            score2,
        }
    }

    #[test]
    fn score_text_forms() {
        assert_eq!(score_text(&fixture(Score::Goals(2), Score::Goals(1))), "2 : 1");
        assert_eq!(score_text(&fixture(Score::Goals(2), Score::Missing)), "2 : -");
        assert_eq!(score_text(&fixture(Score::NotPlayed, Score::NotPlayed)), "vs");
        assert_eq!(score_text(&fixture(Score::Missing, Score::Missing)), "vs");
    }

    #[test]
    fn signed_values() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
    }
}
