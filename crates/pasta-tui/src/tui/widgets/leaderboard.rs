// Leaderboard widget: top scorers or most goals conceded.

use pasta_core::{LeaderboardEntry, Metric};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    metric: Metric,
    entries: &[LeaderboardEntry],
    selected: usize,
) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player"),
        Cell::from(goals_heading(metric)),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = entries
        .iter()
        .zip(ranks(entries))
        .map(|(e, rank)| {
            Row::new(vec![
                Cell::from(rank.to_string()),
                Cell::from(e.player.clone()),
                Cell::from(e.goals.to_string()),
            ])
        })
        .collect();

    let widths = [Constraint::Length(4), Constraint::Min(14), Constraint::Length(8)];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(metric.label()))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut table_state =
        TableState::default().with_selected((!entries.is_empty()).then_some(selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn goals_heading(metric: Metric) -> &'static str {
    match metric {
        Metric::Scored => "Scored",
        Metric::Conceded => "Conceded",
    }
}

/// Competition ranks: equal goal counts share a rank ("1, 2, 2, 4").
pub fn ranks(entries: &[LeaderboardEntry]) -> Vec<usize> {
    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let rank = match (i.checked_sub(1).and_then(|p| entries.get(p)), out.last()) {
            (Some(prev), Some(&prev_rank)) if prev.goals == entry.goals => prev_rank,
            _ => i + 1,
        };
        out.push(rank);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{render_to_string, sample_league};

    fn entry(player: &str, goals: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            player: player.into(),
            goals,
        }
    }

    #[test]
    fn tied_counts_share_a_rank() {
        let entries = vec![entry("A", 5), entry("B", 3), entry("C", 3), entry("D", 1)];
        assert_eq!(ranks(&entries), vec![1, 2, 2, 4]);
        assert!(ranks(&[]).is_empty());
    }

    #[test]
    fn render_scorers() {
        let league = sample_league();
        let text = render_to_string(60, 8, |frame| {
            render(frame, frame.area(), Metric::Scored, &league.top_scorers, 0)
        });
        assert!(text.contains("Top Scorers"));
        assert!(text.contains("Scored"));
        assert!(text.find("Ana").unwrap() < text.find("Bo").unwrap());
    }

    #[test]
    fn render_empty_conceded() {
        let text =
            render_to_string(60, 6, |frame| render(frame, frame.area(), Metric::Conceded, &[], 0));
        assert!(text.contains("Most Conceded"));
    }
}
