// Configuration loading and parsing (config/league.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

/// Default number of entries shown on each leaderboard.
pub const DEFAULT_TOP_N: usize = 5;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
}

/// How the two row sets are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// `opensheet.elk.sh` JSON arrays.
    Opensheet,
    /// Google Visualization query endpoint, JSON envelope.
    GvizJson,
    /// Google Visualization query endpoint, CSV output.
    GvizCsv,
    /// Local `.json` / `.csv` files.
    Files,
}

impl Transport {
    pub fn is_remote(self) -> bool {
        !matches!(self, Transport::Files)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub transport: Transport,
    #[serde(default)]
    pub sheet_id: String,
    #[serde(default = "default_players_sheet")]
    pub players_sheet: String,
    #[serde(default = "default_matches_sheet")]
    pub matches_sheet: String,
    /// Local players file, used when `transport = "files"`.
    #[serde(default)]
    pub players_path: Option<PathBuf>,
    /// Local matches file, used when `transport = "files"`.
    #[serde(default)]
    pub matches_path: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            top_n: DEFAULT_TOP_N,
        }
    }
}

fn default_players_sheet() -> String {
    "Players".to_string()
}

fn default_matches_sheet() -> String {
    "Matches".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/league.toml` relative to `base_dir`.
///
/// Relative file paths in `[source]` are resolved against `base_dir`.
/// This does not seed defaults; see [`load_config`].
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let league_path = base_dir.join("config").join("league.toml");
    let text = read_file(&league_path)?;
    let mut config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: league_path.clone(),
        source: e,
    })?;

    config.source.players_path = config.source.players_path.map(|p| base_dir.join(p));
    config.source.matches_path = config.source.matches_path.map(|p| base_dir.join(p));

    validate(&config)?;
    Ok(config)
}

/// Copy every file in `defaults/` that is missing from `config/`, leaving
/// existing files untouched. `.example` files are never copied.
///
/// Returns the paths that were created.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        if config_dir.is_dir() {
            return Ok(Vec::new());
        }
        return Err(seed_error(format!(
            "neither defaults/ nor config/ directory found in {}; \
             run from the project root or pass --config-dir",
            base_dir.display()
        )));
    }

    std::fs::create_dir_all(&config_dir)
        .map_err(|e| seed_error(format!("cannot create {}: {e}", config_dir.display())))?;

    let entries = std::fs::read_dir(&defaults_dir)
        .map_err(|e| seed_error(format!("cannot list {}: {e}", defaults_dir.display())))?;

    let mut seeded = Vec::new();
    for entry in entries {
        let default_path = entry
            .map_err(|e| seed_error(format!("cannot list {}: {e}", defaults_dir.display())))?
            .path();
        let Some(file_name) = default_path.file_name().filter(|_| default_path.is_file()) else {
            continue;
        };
        if Path::new(file_name).extension().is_some_and(|ext| ext == "example") {
            continue;
        }
        let target = config_dir.join(file_name);
        if seed_file(&default_path, &target)? {
            seeded.push(target);
        }
    }
    Ok(seeded)
}

/// Copy `default_path` to `target` unless `target` already exists.
///
/// The default is read before `target` is created. A failed write removes
/// the partial `target`.
fn seed_file(default_path: &Path, target: &Path) -> Result<bool, ConfigError> {
    let content = std::fs::read(default_path)
        .map_err(|e| seed_error(format!("cannot read {}: {e}", default_path.display())))?;

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(seed_error(format!("cannot create {}: {e}", target.display()))),
    };

    if let Err(e) = std::io::Write::write_all(&mut file, &content) {
        drop(file);
        let _ = std::fs::remove_file(target);
        return Err(seed_error(format!("cannot write {}: {e}", target.display())));
    }
    Ok(true)
}

fn seed_error(message: String) -> ConfigError {
    ConfigError::DefaultsCopyError { message }
}

/// Seed missing config files from `defaults/`, then load from `base_dir`.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.league.name.trim().is_empty() {
        return Err(invalid("league.name", "must not be empty"));
    }

    let source = &config.source;
    if source.transport.is_remote() {
        let required: &[(&str, &str)] = &[
            ("source.sheet_id", &source.sheet_id),
            ("source.players_sheet", &source.players_sheet),
            ("source.matches_sheet", &source.matches_sheet),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty for a remote transport"));
            }
        }
    } else {
        if source.players_path.is_none() {
            return Err(invalid("source.players_path", "required when transport = \"files\""));
        }
        if source.matches_path.is_none() {
            return Err(invalid("source.matches_path", "required when transport = \"files\""));
        }
    }

    if source.timeout_secs == 0 {
        return Err(invalid("source.timeout_secs", "must be > 0"));
    }
    if config.display.top_n == 0 {
        return Err(invalid("display.top_n", "must be > 0"));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
