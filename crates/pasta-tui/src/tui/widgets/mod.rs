// TUI widget modules for each dashboard panel.

pub mod leaderboard;
pub mod matchdays;
pub mod player_detail;
pub mod standings;
pub mod status_bar;
