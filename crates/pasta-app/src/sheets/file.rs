// Offline source: league tables exported to local files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pasta_core::RowSet;
use tracing::info;

use super::{gviz, opensheet, FetchError, RowSource, Table};

/// Reads each table from a local `.json` (opensheet array shape) or `.csv`
/// file.
pub struct FileSource {
    players_path: PathBuf,
    matches_path: PathBuf,
}

impl FileSource {
    pub fn new(players_path: PathBuf, matches_path: PathBuf) -> Self {
        FileSource {
            players_path,
            matches_path,
        }
    }

    fn path(&self, table: Table) -> &Path {
        match table {
            Table::Players => &self.players_path,
            Table::Matches => &self.matches_path,
        }
    }
}

/// Decode file contents according to the file extension.
pub fn parse_file(path: &Path, body: &str, table: Table) -> Result<RowSet, FetchError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => opensheet::parse_opensheet(body, table.columns()),
        Some("csv") => gviz::parse_csv(body),
        _ => Err(FetchError::UnsupportedFile {
            path: path.to_path_buf(),
        }),
    }
}

#[async_trait]
impl RowSource for FileSource {
    async fn fetch_rows(&self, table: Table) -> Result<RowSet, FetchError> {
        let path = self.path(table);
        info!("reading {} table from {}", table, path.display());
        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        parse_file(path, &body, table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
