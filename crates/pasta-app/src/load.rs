// One league load: fetch both tables, normalize, compute every view.

use chrono::{DateTime, Local};
use pasta_core::schedule::latest_played;
use pasta_core::{
    compute_leaderboard, compute_standings, group_by_matchday, parse_matches, parse_players,
    LeaderboardEntry, Match, MatchdayGroup, Metric, Player, RowSet, StandingRow,
};
use thiserror::Error;
use tracing::info;

use crate::config::DisplayConfig;
use crate::sheets::{FetchError, RowSource, Table};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The single terminal failure of a load.
#[derive(Debug, Error)]
#[error("failed to load {table} table: {source}")]
pub struct LoadError {
    pub table: Table,
    #[source]
    pub source: FetchError,
}

// ---------------------------------------------------------------------------
// LeagueView
// ---------------------------------------------------------------------------

/// Everything the presentation layer renders for one loaded snapshot.
#[derive(Debug, Clone)]
pub struct LeagueView {
    pub league_name: String,
    pub players: Vec<Player>,
    pub standings: Vec<StandingRow>,
    /// Already truncated to the configured top-N.
    pub top_scorers: Vec<LeaderboardEntry>,
    /// Already truncated to the configured top-N.
    pub top_conceded: Vec<LeaderboardEntry>,
    pub matchdays: Vec<MatchdayGroup>,
    pub loaded_at: DateTime<Local>,
}

impl LeagueView {
    /// Build a view from raw row sets. Pure apart from the timestamp.
    pub fn from_rows(
        league_name: &str,
        player_rows: &RowSet,
        match_rows: &RowSet,
        display: &DisplayConfig,
    ) -> Self {
        let players = parse_players(player_rows);
        let matches = parse_matches(match_rows);

        let standings = compute_standings(&matches, &players);
        let mut top_scorers = compute_leaderboard(&matches, &players, Metric::Scored);
        top_scorers.truncate(display.top_n);
        let mut top_conceded = compute_leaderboard(&matches, &players, Metric::Conceded);
        top_conceded.truncate(display.top_n);
        let matchdays = group_by_matchday(&matches);

        LeagueView {
            league_name: league_name.to_string(),
            players,
            standings,
            top_scorers,
            top_conceded,
            matchdays,
            loaded_at: Local::now(),
        }
    }

    /// Listing entry for `name`, if the player was listed.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Every match `name` takes part in, in matchday order.
    pub fn player_matches(&self, name: &str) -> Vec<&Match> {
        self.matchdays
            .iter()
            .flat_map(|g| g.matches.iter())
            .filter(|m| m.involves(name))
            .collect()
    }

    pub fn match_count(&self) -> usize {
        self.matchdays.iter().map(|g| g.matches.len()).sum()
    }

    /// Matchday the slider starts on.
    pub fn initial_matchday(&self) -> Option<usize> {
        latest_played(&self.matchdays)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

async fn fetch(source: &dyn RowSource, table: Table) -> Result<RowSet, LoadError> {
    source
        .fetch_rows(table)
        .await
        .map_err(|source| LoadError { table, source })
}

/// Fetch both tables concurrently and compute the league view.
///
/// Either fetch failing fails the whole load; there is no partial result.
pub async fn load_league(
    source: &dyn RowSource,
    league_name: &str,
    display: &DisplayConfig,
) -> Result<LeagueView, LoadError> {
    let (player_rows, match_rows) =
        tokio::try_join!(fetch(source, Table::Players), fetch(source, Table::Matches))?;

    let view = LeagueView::from_rows(league_name, &player_rows, &match_rows, display);
    info!(
        "loaded {}: {} players, {} matches over {} matchdays",
        view.league_name,
        view.standings.len(),
        view.match_count(),
        view.matchdays.len()
    );
    Ok(view)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
