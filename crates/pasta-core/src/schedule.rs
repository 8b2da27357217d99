// Matchday grouping for the fixtures view.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::Match;

/// All matches sharing one matchday, in their original relative order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchdayGroup {
    /// `None` collects matches whose matchday cell was unusable.
    pub matchday: Option<i64>,
    pub matches: Vec<Match>,
}

impl MatchdayGroup {
    pub fn label(&self) -> String {
        match self.matchday {
            Some(md) => format!("Matchday {md}"),
            None => "Unscheduled".to_string(),
        }
    }

    pub fn played_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_played()).count()
    }
}

/// Group matches by matchday, ascending. Matches without a usable matchday
/// form a final group.
///
/// The output contains exactly the matchdays present in the input.
pub fn group_by_matchday(matches: &[Match]) -> Vec<MatchdayGroup> {
    let mut by_day: HashMap<Option<i64>, Vec<Match>> = HashMap::new();
    for m in matches {
        by_day.entry(m.matchday).or_default().push(m.clone());
    }

    let mut groups: Vec<MatchdayGroup> = by_day
        .into_iter()
        .map(|(matchday, matches)| MatchdayGroup { matchday, matches })
        .collect();
    groups.sort_by_key(|g| (g.matchday.is_none(), g.matchday));
    groups
}

/// Index of the last group with at least one played match, falling back to
/// the first group. `None` only when there are no groups.
pub fn latest_played(groups: &[MatchdayGroup]) -> Option<usize> {
    if groups.is_empty() {
        return None;
    }
    groups
        .iter()
        .rposition(|g| g.matchday.is_some() && g.played_count() > 0)
        .or(Some(0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
