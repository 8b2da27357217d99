// Plain-text report for `--print`: the same views as the dashboard, as
// aligned tables on stdout.

use std::fmt::Write;

use pasta_app::LeagueView;
use pasta_core::{LeaderboardEntry, Metric};

use crate::display::{score_text, signed};

const MIN_NAME_WIDTH: usize = 6;

/// Render every view of a loaded league.
pub fn render_report(view: &LeagueView) -> String {
    let width = name_width(view);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (loaded {})",
        view.league_name,
        view.loaded_at.format("%Y-%m-%d %H:%M")
    );
    out.push('\n');

    write_standings(&mut out, view, width);
    out.push('\n');
    write_leaderboard(&mut out, Metric::Scored, &view.top_scorers, width);
    out.push('\n');
    write_leaderboard(&mut out, Metric::Conceded, &view.top_conceded, width);
    out.push('\n');
    write_matchdays(&mut out, view, width);
    out
}

fn name_width(view: &LeagueView) -> usize {
    view.standings
        .iter()
        .map(|r| r.player.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH)
}

fn write_standings(out: &mut String, view: &LeagueView, width: usize) {
    let _ = writeln!(out, "League Table");
    let _ = writeln!(
        out,
        "{:>3}  {:<width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "#", "Player", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    if view.standings.is_empty() {
        let _ = writeln!(out, "  (no players)");
        return;
    }
    for (i, row) in view.standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
            i + 1,
            row.player,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            signed(row.goal_difference()),
            row.points
        );
    }
}

fn write_leaderboard(out: &mut String, metric: Metric, entries: &[LeaderboardEntry], width: usize) {
    let _ = writeln!(out, "{}", metric.label());
    if entries.is_empty() {
        let _ = writeln!(out, "  (no players)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{:>3}  {:<width$}  {:>4}", i + 1, entry.player, entry.goals);
    }
}

fn write_matchdays(out: &mut String, view: &LeagueView, width: usize) {
    if view.matchdays.is_empty() {
        let _ = writeln!(out, "No matches scheduled");
        return;
    }
    for (i, group) in view.matchdays.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} ({}/{} played)",
            group.label(),
            group.played_count(),
            group.matches.len()
        );
        for m in &group.matches {
            let _ = writeln!(
                out,
                "     {:>width$}  {:^7}  {}",
                m.player1,
                score_text(m),
                m.player2
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pasta_app::DisplayConfig;
    use pasta_core::Cell;

    fn t(s: &str) -> Cell {
        Cell::Text(s.into())
    }

    fn n(v: f64) -> Cell {
        Cell::Number(v)
    }

    fn sample_view() -> LeagueView {
        let players = vec![vec![t("A")], vec![t("B")], vec![t("C")]];
        let matches = vec![
            vec![n(1.0), t("A"), t("B"), n(2.0), n(1.0)],
            vec![n(1.0), t("B"), t("C"), n(-1.0), n(-1.0)],
            vec![n(2.0), t("A"), t("C"), n(0.0), Cell::Empty],
        ];
        LeagueView::from_rows("Pasta League", &players, &matches, &DisplayConfig { top_n: 2 })
    }

    #[test]
    fn report_has_every_section() {
        let report = render_report(&sample_view());
        assert!(report.starts_with("Pasta League (loaded "));
        for heading in ["League Table", "Top Scorers", "Most Conceded", "Matchday 1", "Matchday 2"] {
            assert!(report.contains(heading), "missing {heading}:\n{report}");
        }
    }

    #[test]
    fn standings_rows_in_rank_order() {
        let report = render_report(&sample_view());
        let table: Vec<&str> = report
            .lines()
            .skip_while(|l| *l != "League Table")
            .skip(2)
            .take(3)
            .collect();
        assert!(table[0].trim_start().starts_with("1  A"), "{table:?}");
        assert!(table[0].trim_end().ends_with('4'));
        assert!(table[0].contains("+1"));
        assert!(table[1].trim_start().starts_with("2  C"));
        assert!(table[2].trim_start().starts_with("3  B"));
    }

    #[test]
    fn fixtures_show_vs_and_missing_sides() {
        let report = render_report(&sample_view());
        assert!(report.contains("2 : 1"));
        assert!(report.contains("  vs  "));
        assert!(report.contains("0 : -"));
        assert!(report.contains("Matchday 1 (1/2 played)"));
    }

    #[test]
    fn leaderboards_are_truncated() {
        let report = render_report(&sample_view());
        let scorers: Vec<&str> = report
            .lines()
            .skip_while(|l| *l != "Top Scorers")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(scorers.len(), 2);
    }

    #[test]
    fn empty_league_prints_placeholders() {
        let view = LeagueView::from_rows("Empty", &vec![], &vec![], &DisplayConfig::default());
        let report = render_report(&view);
        assert!(report.contains("(no players)"));
        assert!(report.contains("No matches scheduled"));
    }
}
