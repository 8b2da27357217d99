// Pure standings core: row normalization, aggregation, ranking, grouping.
//
// Nothing in this crate performs I/O or holds state between calls. Every
// public function is a pure function of its arguments.

pub mod leaderboard;
pub mod model;
pub mod normalize;
pub mod schedule;
pub mod standings;

pub use leaderboard::{compute_leaderboard, LeaderboardEntry, Metric};
pub use model::{Cell, Match, Player, Row, RowSet, Score};
pub use normalize::{parse_matches, parse_players};
pub use schedule::{group_by_matchday, MatchdayGroup};
pub use standings::{compute_standings, StandingRow};
