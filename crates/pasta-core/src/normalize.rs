// Row normalization: raw spreadsheet rows into typed players and matches.
//
// Malformed rows are skipped or defaulted one at a time; nothing here returns
// an error, so a single bad row can never blank the whole table.

use tracing::{debug, warn};

use crate::model::{Cell, Match, Player, Row, Score};

// ---------------------------------------------------------------------------
// Column layouts
// ---------------------------------------------------------------------------

/// Header labels of the player listing, in positional order.
pub const PLAYER_COLUMNS: [&str; 2] = ["name", "description"];

/// Header labels of the match listing, in positional order.
pub const MATCH_COLUMNS: [&str; 5] = ["matchday", "player1", "player2", "score1", "score2"];

/// The `-1` score that marks a fixture as not yet played.
pub const UNPLAYED_SENTINEL: f64 = -1.0;

static EMPTY: Cell = Cell::Empty;

// ---------------------------------------------------------------------------
// Header detection
// ---------------------------------------------------------------------------

/// Canonical form of a header label: lower-cased and trimmed, with inner
/// spaces, underscores and hyphens dropped so "Player 1" matches `player1`.
pub fn label_key(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect()
}

/// True when `row` contains every expected label (order-insensitive).
pub fn is_header_row(row: &[Cell], expected: &[&str]) -> bool {
    let labels: Vec<String> = row.iter().map(|c| label_key(&c.text())).collect();
    expected
        .iter()
        .all(|want| labels.iter().any(|have| *have == label_key(want)))
}

/// The data rows of a sheet: everything after the header row when the first
/// row is one, otherwise every row.
pub fn data_rows<'a>(rows: &'a [Row], expected: &[&str]) -> &'a [Row] {
    match rows.first() {
        Some(first) if is_header_row(first, expected) => &rows[1..],
        _ => rows,
    }
}

fn cell(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&EMPTY)
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Parse the player listing (`name`, `description`).
///
/// Rows whose trimmed name is empty are dropped.
pub fn parse_players(rows: &[Row]) -> Vec<Player> {
    let body = data_rows(rows, &PLAYER_COLUMNS);
    let mut players = Vec::with_capacity(body.len());
    for (i, row) in body.iter().enumerate() {
        let name = cell(row, 0).text();
        if name.is_empty() {
            if row.iter().any(|c| !c.is_empty()) {
                warn!("skipping player row {}: empty name", i + 1);
            }
            continue;
        }
        players.push(Player {
            name,
            description: cell(row, 1).text(),
        });
    }
    players
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

/// Parse a score cell. Blank and non-numeric cells are [`Score::Missing`],
/// a literal `-1` is [`Score::NotPlayed`].
///
/// Negative values other than the sentinel and fractional values cannot be
/// goal counts and are treated as missing.
pub fn parse_score(cell: &Cell) -> Score {
    let Some(value) = cell.number() else {
        return Score::Missing;
    };
    if value == UNPLAYED_SENTINEL {
        return Score::NotPlayed;
    }
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        debug!("score {:?} is not a goal count, treating as missing", cell);
        return Score::Missing;
    }
    Score::Goals(value as u32)
}

/// Parse a matchday cell into a whole number.
pub fn parse_matchday(cell: &Cell) -> Option<i64> {
    let value = cell.number()?;
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Parse the match listing (`matchday`, `player1`, `player2`, `score1`,
/// `score2`).
///
/// A row is dropped only when it cannot name two distinct participants.
/// Bad matchday or score cells are kept as `None` / [`Score::Missing`].
pub fn parse_matches(rows: &[Row]) -> Vec<Match> {
    let body = data_rows(rows, &MATCH_COLUMNS);
    let mut matches = Vec::with_capacity(body.len());
    for (i, row) in body.iter().enumerate() {
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        let player1 = cell(row, 1).text();
        let player2 = cell(row, 2).text();
        if player1.is_empty() || player2.is_empty() {
            warn!("skipping match row {}: missing participant", i + 1);
            continue;
        }
        if player1 == player2 {
            warn!("skipping match row {}: '{}' listed against themselves", i + 1, player1);
            continue;
        }

        let matchday = parse_matchday(cell(row, 0));
        if matchday.is_none() {
            debug!("match row {}: matchday {:?} is not a whole number", i + 1, cell(row, 0));
        }

        matches.push(Match {
            matchday,
            player1,
            player2,
            score1: parse_score(cell(row, 3)),
            score2: parse_score(cell(row, 4)),
        });
    }
    matches
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
