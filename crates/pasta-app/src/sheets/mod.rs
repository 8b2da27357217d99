// Spreadsheet transports: fetch the two league tables as positional rows.
//
// Each transport turns its own wire format into a `RowSet`; header detection
// and row-level cleanup are left to `pasta_core::normalize`.

pub mod file;
pub mod gviz;
pub mod opensheet;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use pasta_core::normalize::{MATCH_COLUMNS, PLAYER_COLUMNS};
use pasta_core::RowSet;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{SourceConfig, Transport};

pub use file::FileSource;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The two row sets a league is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Players,
    Matches,
}

impl Table {
    /// Expected header labels, in positional order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Players => &PLAYER_COLUMNS,
            Table::Matches => &MATCH_COLUMNS,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Players => write!(f, "players"),
            Table::Matches => write!(f, "matches"),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A batch-level failure fetching or decoding one table.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response: {0}")]
    Envelope(String),

    #[error("invalid source configuration: {0}")]
    Config(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported data file {path} (expected .json or .csv)")]
    UnsupportedFile { path: PathBuf },
}

// ---------------------------------------------------------------------------
// RowSource
// ---------------------------------------------------------------------------

/// Anything that can produce the raw rows of a league table.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self, table: Table) -> Result<RowSet, FetchError>;
}

/// Build the source described by the `[source]` config section.
pub fn build_source(config: &SourceConfig) -> Result<Box<dyn RowSource>, FetchError> {
    match config.transport {
        Transport::Files => {
            let (Some(players), Some(matches)) = (&config.players_path, &config.matches_path)
            else {
                return Err(FetchError::Config(
                    "files transport needs players_path and matches_path".to_string(),
                ));
            };
            Ok(Box::new(FileSource::new(players.clone(), matches.clone())))
        }
        transport => Ok(Box::new(HttpSource::new(config, transport)?)),
    }
}

// ---------------------------------------------------------------------------
// HttpSource
// ---------------------------------------------------------------------------

const OPENSHEET_BASE: &str = "https://opensheet.elk.sh/";
const GVIZ_BASE: &str = "https://docs.google.com/spreadsheets/d/";

/// Wire format of a remote transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Opensheet,
    GvizJson,
    GvizCsv,
}

/// Fetches tables from a public Google Sheet over HTTP.
pub struct HttpSource {
    http: reqwest::Client,
    format: Format,
    sheet_id: String,
    players_sheet: String,
    matches_sheet: String,
}

impl HttpSource {
    pub fn new(config: &SourceConfig, transport: Transport) -> Result<Self, FetchError> {
        let format = match transport {
            Transport::Opensheet => Format::Opensheet,
            Transport::GvizJson => Format::GvizJson,
            Transport::GvizCsv => Format::GvizCsv,
            Transport::Files => {
                return Err(FetchError::Config(
                    "files transport is not served over HTTP".to_string(),
                ))
            }
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(HttpSource {
            http,
            format,
            sheet_id: config.sheet_id.trim().to_string(),
            players_sheet: config.players_sheet.clone(),
            matches_sheet: config.matches_sheet.clone(),
        })
    }

    fn sheet_name(&self, table: Table) -> &str {
        match table {
            Table::Players => &self.players_sheet,
            Table::Matches => &self.matches_sheet,
        }
    }

    /// Endpoint URL for one table under the configured transport.
    pub fn url(&self, table: Table) -> Result<Url, FetchError> {
        let sheet = self.sheet_name(table);
        let base = match self.format {
            Format::Opensheet => OPENSHEET_BASE,
            Format::GvizJson | Format::GvizCsv => GVIZ_BASE,
        };
        let mut url = Url::parse(base)
            .map_err(|e| FetchError::Envelope(format!("invalid endpoint {base}: {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| FetchError::Envelope(format!("endpoint {base} cannot take a path")))?;
            path.pop_if_empty().push(&self.sheet_id);
            match self.format {
                Format::Opensheet => {
                    path.push(sheet);
                }
                Format::GvizJson | Format::GvizCsv => {
                    path.push("gviz").push("tq");
                }
            }
        }
        match self.format {
            Format::Opensheet => {}
            Format::GvizJson => {
                url.query_pairs_mut()
                    .append_pair("tqx", "out:json")
                    .append_pair("sheet", sheet);
            }
            Format::GvizCsv => {
                url.query_pairs_mut()
                    .append_pair("tqx", "out:csv")
                    .append_pair("sheet", sheet);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl RowSource for HttpSource {
    async fn fetch_rows(&self, table: Table) -> Result<RowSet, FetchError> {
        let url = self.url(table)?;
        info!("fetching {} table from {}", table, url);

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!("{} table: {} bytes", table, body.len());

        match self.format {
            Format::Opensheet => opensheet::parse_opensheet(&body, table.columns()),
            Format::GvizJson => gviz::parse_gviz_json(&body),
            Format::GvizCsv => gviz::parse_csv(&body),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn source_config(transport: Transport) -> SourceConfig {
        SourceConfig {
            transport,
            sheet_id: "sheet123".into(),
            players_sheet: "Players".into(),
            matches_sheet: "Match Results".into(),
            players_path: None,
            matches_path: None,
            timeout_secs: 5,
        }
    }

    #[test]
    fn opensheet_url_escapes_sheet_name() {
        let config = source_config(Transport::Opensheet);
        let source = HttpSource::new(&config, Transport::Opensheet).unwrap();
        assert_eq!(
            source.url(Table::Players).unwrap().as_str(),
            "https://opensheet.elk.sh/sheet123/Players"
        );
        assert_eq!(
            source.url(Table::Matches).unwrap().as_str(),
            "https://opensheet.elk.sh/sheet123/Match%20Results"
        );
    }

    #[test]
    fn gviz_urls_select_output_format() {
        let config = source_config(Transport::GvizJson);
        let json = HttpSource::new(&config, Transport::GvizJson).unwrap();
        let url = json.url(Table::Players).unwrap();
        assert_eq!(url.path(), "/spreadsheets/d/sheet123/gviz/tq");
        assert_eq!(url.query(), Some("tqx=out%3Ajson&sheet=Players"));

        let csv = HttpSource::new(&config, Transport::GvizCsv).unwrap();
        let url = csv.url(Table::Matches).unwrap();
        assert_eq!(url.query(), Some("tqx=out%3Acsv&sheet=Match+Results"));
    }

    #[test]
    fn table_columns_and_display() {
        assert_eq!(Table::Players.columns(), &["name", "description"]);
        assert_eq!(Table::Matches.columns().len(), 5);
        assert_eq!(Table::Matches.to_string(), "matches");
    }

    #[test]
    fn build_source_rejects_files_without_paths() {
        let config = source_config(Transport::Files);
        let err = build_source(&config).err().expect("should fail");
        assert!(matches!(err, FetchError::Config(_)));
        assert_eq!(
            err.to_string(),
            "invalid source configuration: files transport needs players_path and matches_path"
        );
    }

    #[test]
    fn http_source_rejects_files_transport() {
        let config = source_config(Transport::Files);
        match HttpSource::new(&config, Transport::Files) {
            Err(FetchError::Config(msg)) => assert!(msg.contains("not served over HTTP")),
            Err(other) => panic!("expected Config, got: {other}"),
            Ok(_) => panic!("files transport should not build an HttpSource"),
        }
    }
}
