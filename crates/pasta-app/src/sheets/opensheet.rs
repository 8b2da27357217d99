// opensheet.elk.sh decoding.
//
// The service answers with a JSON array, normally one object per sheet row
// keyed by the sheet's header labels. Objects are projected back onto the
// table's positional column order.

use pasta_core::normalize::label_key;
use pasta_core::{Cell, Row, RowSet};
use serde_json::{Map, Value};
use tracing::warn;

use super::FetchError;

/// Decode an opensheet body into positional rows.
///
/// Array elements pass through as rows. Object elements are projected onto
/// `columns` by normalized key, and a header row built from `columns` is
/// prepended so header detection downstream sees the same shape as the other
/// transports.
pub fn parse_opensheet(body: &str, columns: &[&str]) -> Result<RowSet, FetchError> {
    let value: Value = serde_json::from_str(body)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(obj) => {
            let message = obj
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("expected a JSON array");
            return Err(FetchError::Envelope(message.to_string()));
        }
        _ => return Err(FetchError::Envelope("expected a JSON array".to_string())),
    };

    let keys: Vec<String> = columns.iter().map(|c| label_key(c)).collect();
    let mut rows: RowSet = Vec::with_capacity(items.len() + 1);
    let mut has_objects = false;

    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Array(cells) => rows.push(cells.iter().map(Cell::from_json).collect()),
            Value::Object(obj) => {
                has_objects = true;
                rows.push(project(obj, &keys));
            }
            other => warn!("opensheet row {}: ignoring non-row value {}", i + 1, other),
        }
    }

    if has_objects {
        let header: Row = columns.iter().map(|c| Cell::Text(c.to_string())).collect();
        rows.insert(0, header);
    }
    Ok(rows)
}

/// Pick the value for each expected column from a keyed row.
fn project(obj: &Map<String, Value>, keys: &[String]) -> Row {
    keys.iter()
        .map(|want| {
            obj.iter()
                .find(|(k, _)| label_key(k) == *want)
                .map(|(_, v)| Cell::from_json(v))
                .unwrap_or(Cell::Empty)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pasta_core::normalize::{MATCH_COLUMNS, PLAYER_COLUMNS};
    use pasta_core::{parse_matches, parse_players, Score};

    #[test]
    fn objects_projected_by_header_label() {
        let body = r#"[
            {"Name": "Ana", "Description": "Captain"},
            {"Description": "", "Name": " Bo "}
        ]"#;
        let rows = parse_opensheet(body, &PLAYER_COLUMNS).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![Cell::Text("name".into()), Cell::Text("description".into())]);
        assert_eq!(rows[1], vec![Cell::Text("Ana".into()), Cell::Text("Captain".into())]);
        assert_eq!(rows[2][1], Cell::Empty);

        let players = parse_players(&rows);
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name, "Bo");
    }

    #[test]
    fn match_objects_with_spaced_keys() {
        let body = r#"[
            {"Matchday": "1", "Player 1": "A", "Player 2": "B", "Score 1": "2", "Score 2": "1"},
            {"Matchday": "1", "Player 1": "B", "Player 2": "C", "Score 1": "-1", "Score 2": "-1"},
            {"Matchday": "2", "Player 1": "A", "Player 2": "C"}
        ]"#;
        let rows = parse_opensheet(body, &MATCH_COLUMNS).unwrap();
        let matches = parse_matches(&rows);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].score1, Score::Goals(2));
        assert_eq!(matches[1].score2, Score::NotPlayed);
        assert_eq!(matches[2].score1, Score::Missing);
    }

    #[test]
    fn array_rows_pass_through_without_header() {
        let body = r#"[["Ana", "Captain"], ["Bo", null]]"#;
        let rows = parse_opensheet(body, &PLAYER_COLUMNS).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], Cell::Empty);
    }

    #[test]
    fn empty_array_is_empty_table() {
        assert!(parse_opensheet("[]", &PLAYER_COLUMNS).unwrap().is_empty());
    }

    #[test]
    fn error_object_is_envelope_error() {
        let err = parse_opensheet(r#"{"error": "Requested sheet not found"}"#, &PLAYER_COLUMNS)
            .unwrap_err();
        match err {
            FetchError::Envelope(msg) => assert_eq!(msg, "Requested sheet not found"),
            other => panic!("expected Envelope, got: {other}"),
        }
    }

    #[test]
    fn invalid_json_is_json_error() {
        let err = parse_opensheet("<html>", &PLAYER_COLUMNS).unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
    }
}
