// Google Visualization ("gviz") query responses, JSON and CSV flavours.

use pasta_core::{Cell, Row, RowSet};
use serde::Deserialize;
use serde_json::Value;

use super::FetchError;

// ---------------------------------------------------------------------------
// JSON envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    errors: Vec<QueryError>,
    table: Option<DataTable>,
}

#[derive(Debug, Deserialize)]
struct QueryError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    detailed_message: String,
}

#[derive(Debug, Deserialize)]
struct DataTable {
    #[serde(default)]
    cols: Vec<Column>,
    #[serde(default)]
    rows: Vec<DataRow>,
}

#[derive(Debug, Deserialize)]
struct Column {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
struct DataRow {
    #[serde(default)]
    c: Vec<Option<DataCell>>,
}

#[derive(Debug, Deserialize)]
struct DataCell {
    #[serde(default)]
    v: Value,
    #[serde(default)]
    f: Option<String>,
}

impl DataCell {
    fn to_cell(&self) -> Cell {
        match (&self.v, &self.f) {
            (Value::Null, Some(formatted)) => Cell::from_text(formatted),
            (v, _) => Cell::from_json(v),
        }
    }
}

/// The JSON payload inside the `google.visualization.Query.setResponse(...)`
/// wrapper: everything between the first `(` and the last `)`.
pub fn unwrap_envelope(body: &str) -> Result<&str, FetchError> {
    let start = body.find('(');
    let end = body.rfind(')');
    match (start, end) {
        (Some(s), Some(e)) if s < e => Ok(&body[s + 1..e]),
        _ => Err(FetchError::Envelope(
            "response is not wrapped in setResponse(...)".to_string(),
        )),
    }
}

/// Decode a gviz JSON response into positional rows.
///
/// Column labels become a header row when at least one is non-empty; a sheet
/// whose header was not recognised by the query engine keeps it as a data row.
pub fn parse_gviz_json(body: &str) -> Result<RowSet, FetchError> {
    let envelope: Envelope = serde_json::from_str(unwrap_envelope(body)?)?;

    if envelope.status == "error" {
        let message = envelope
            .errors
            .first()
            .map(|e| {
                if e.detailed_message.is_empty() {
                    e.message.clone()
                } else {
                    e.detailed_message.clone()
                }
            })
            .unwrap_or_else(|| "query returned status error".to_string());
        return Err(FetchError::Envelope(message));
    }

    let table = envelope
        .table
        .ok_or_else(|| FetchError::Envelope("response has no table".to_string()))?;

    let mut rows: RowSet = Vec::with_capacity(table.rows.len() + 1);
    if table.cols.iter().any(|c| !c.label.trim().is_empty()) {
        rows.push(table.cols.iter().map(|c| Cell::from_text(&c.label)).collect());
    }
    for row in &table.rows {
        rows.push(
            row.c
                .iter()
                .map(|cell| cell.as_ref().map(DataCell::to_cell).unwrap_or(Cell::Empty))
                .collect(),
        );
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Decode CSV text into rows of text cells. Record lengths may vary.
pub fn parse_csv(body: &str) -> Result<RowSet, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = RowSet::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = record.iter().map(Cell::from_text).collect();
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
