// Record types shared by the normalizer and the standings engine.

use serde::Serialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Raw cells
// ---------------------------------------------------------------------------

/// A single positional cell as delivered by a spreadsheet transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

/// One positional row of cells.
pub type Row = Vec<Cell>;

/// All rows of one sheet, header row (if any) included.
pub type RowSet = Vec<Row>;

impl Cell {
    /// Build a cell from a decoded JSON value.
    ///
    /// `null` and blank strings become [`Cell::Empty`]; booleans are kept as
    /// text so they never masquerade as scores.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Bool(b) => Cell::Text(b.to_string()),
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
            Value::String(s) => Cell::from_text(s),
            other => Cell::Text(other.to_string()),
        }
    }

    /// Build a cell from raw text (CSV fields, object values).
    pub fn from_text(s: &str) -> Self {
        if s.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }

    /// Trimmed textual form. Whole numbers print without a fractional part.
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => format_number(*n),
        }
    }

    /// Finite numeric value, if the cell holds one (text is parsed).
    pub fn number(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(*n).filter(|v| v.is_finite()),
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

// ---------------------------------------------------------------------------
// Typed records
// ---------------------------------------------------------------------------

/// A league participant from the player listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    /// Free text; empty when the sheet leaves it blank.
    pub description: String,
}

/// One side of a match result after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Score {
    /// A recorded, non-negative goal count.
    Goals(u32),
    /// The explicit `-1` "not yet played" sentinel.
    NotPlayed,
    /// Blank or non-numeric cell.
    Missing,
}

impl Score {
    pub fn goals(self) -> Option<u32> {
        match self {
            Score::Goals(g) => Some(g),
            Score::NotPlayed | Score::Missing => None,
        }
    }
}

/// A fixture between two players, possibly not yet played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// `None` when the matchday cell was blank or not a whole number.
    pub matchday: Option<i64>,
    pub player1: String,
    pub player2: String,
    pub score1: Score,
    pub score2: Score,
}

impl Match {
    /// A match counts as played when at least one side carries a goal count.
    ///
    /// Both sides missing, both `-1`, or one of each are all "not yet played".
    pub fn is_played(&self) -> bool {
        self.score1.goals().is_some() || self.score2.goals().is_some()
    }

    /// Goals for `(player1, player2)` of a played match. A side without a
    /// recorded count defaults to zero. Returns `None` for unplayed matches.
    pub fn result(&self) -> Option<(u32, u32)> {
        if !self.is_played() {
            return None;
        }
        Some((
            self.score1.goals().unwrap_or(0),
            self.score2.goals().unwrap_or(0),
        ))
    }

    pub fn involves(&self, player: &str) -> bool {
        self.player1 == player || self.player2 == player
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
