// League loading: configuration, spreadsheet transports and the fetch ->
// normalize -> compute pipeline shared by every front end.

pub mod config;
pub mod load;
pub mod sheets;

pub use config::{Config, ConfigError, DisplayConfig, Transport};
pub use load::{load_league, LeagueView, LoadError};
pub use sheets::{build_source, FetchError, RowSource, Table};
