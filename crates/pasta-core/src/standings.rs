// League table: per-player aggregation over played matches and ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Match, Player};

/// Points for a win.
pub const POINTS_WIN: u32 = 3;
/// Points for each side of a draw.
pub const POINTS_DRAW: u32 = 1;

// ---------------------------------------------------------------------------
// StandingRow
// ---------------------------------------------------------------------------

/// Aggregate record for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub player: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingRow {
    pub fn new(player: impl Into<String>) -> Self {
        StandingRow {
            player: player.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Fold one played result into the record, seen from this player's side.
    /// Totals saturate at `u32::MAX` instead of overflowing.
    fn record(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins = self.wins.saturating_add(1);
                self.points = self.points.saturating_add(POINTS_WIN);
            }
            Ordering::Equal => {
                self.draws = self.draws.saturating_add(1);
                self.points = self.points.saturating_add(POINTS_DRAW);
            }
            Ordering::Less => self.losses = self.losses.saturating_add(1),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Zero-initialized records for every player in the listing, followed by
/// every match participant not already listed, in first-appearance order.
fn identity_set(matches: &[Match], players: &[Player]) -> (Vec<StandingRow>, HashMap<String, usize>) {
    let mut rows: Vec<StandingRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let names = players
        .iter()
        .map(|p| p.name.as_str())
        .chain(matches.iter().flat_map(|m| [m.player1.as_str(), m.player2.as_str()]));

    for name in names {
        if !index.contains_key(name) {
            index.insert(name.to_string(), rows.len());
            rows.push(StandingRow::new(name));
        }
    }
    (rows, index)
}

/// Fold every played match into per-player records. Output order is the
/// identity-set order (unsorted).
pub fn tally(matches: &[Match], players: &[Player]) -> Vec<StandingRow> {
    let (mut rows, index) = identity_set(matches, players);

    for m in matches {
        let Some((s1, s2)) = m.result() else {
            continue;
        };
        // Every participant was registered by identity_set.
        if let Some(&i) = index.get(&m.player1) {
            rows[i].record(s1, s2);
        }
        if let Some(&i) = index.get(&m.player2) {
            rows[i].record(s2, s1);
        }
    }
    rows
}

/// Ranking order: points, then goal difference, then goals scored, all
/// descending.
pub fn rank_order(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Compute the full league table.
///
/// Every listed player and every match participant gets a row, including
/// players with no played matches. The sort is stable, so rows that tie on
/// all keys keep their first-appearance order.
pub fn compute_standings(matches: &[Match], players: &[Player]) -> Vec<StandingRow> {
    let mut rows = tally(matches, players);
    rows.sort_by(rank_order);
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
