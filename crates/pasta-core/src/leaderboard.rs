// Single-metric goal leaderboards (top scorers, most conceded).

use serde::Serialize;

use crate::model::{Match, Player};
use crate::standings::tally;

/// Which goal count a leaderboard ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Scored,
    Conceded,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::Scored => "Top Scorers",
            Metric::Conceded => "Most Conceded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub goals: u32,
}

/// Rank every player by the chosen goal metric, highest first. Equal counts
/// are ordered by player name ascending.
///
/// The full list is returned; callers truncate to their own top-N.
pub fn compute_leaderboard(matches: &[Match], players: &[Player], metric: Metric) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = tally(matches, players)
        .into_iter()
        .map(|row| LeaderboardEntry {
            goals: match metric {
                Metric::Scored => row.goals_for,
                Metric::Conceded => row.goals_against,
            },
            player: row.player,
        })
        .collect();

    entries.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player.cmp(&b.player)));
    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
