// League table widget: ranked standings with a selectable row.
//
// Columns: #, Player, P, W, D, L, GF, GA, GD, Pts

use pasta_app::LeagueView;
use pasta_core::StandingRow;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::display::signed;

pub fn render(frame: &mut Frame, area: Rect, league: &LeagueView, selected: usize) {
    let header = Row::new(
        ["#", "Player", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"]
            .into_iter()
            .map(Cell::from),
    )
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let leader_points = league.standings.first().map(|r| r.points);
    let rows: Vec<Row> = league
        .standings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let style = if r.played > 0 && Some(r.points) == leader_points {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(standing_cells(i + 1, r)).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
    ];

    let title = format!("League Table ({} players)", league.standings.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(if league.standings.is_empty() {
        None
    } else {
        Some(selected)
    });
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Display cells for one ranked row.
pub fn standing_cells(rank: usize, r: &StandingRow) -> Vec<String> {
    vec![
        rank.to_string(),
        r.player.clone(),
        r.played.to_string(),
        r.wins.to_string(),
        r.draws.to_string(),
        r.losses.to_string(),
        r.goals_for.to_string(),
        r.goals_against.to_string(),
        signed(r.goal_difference()),
        r.points.to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{render_to_string, sample_league};

    #[test]
    fn standing_cells_format() {
        let league = sample_league();
        let cells = standing_cells(1, &league.standings[0]);
        assert_eq!(cells, vec!["1", "Ana", "2", "1", "1", "0", "2", "1", "+1", "4"]);
    }

    #[test]
    fn render_lists_players_in_rank_order() {
        let league = sample_league();
        let text = render_to_string(80, 10, |frame| render(frame, frame.area(), &league, 0));
        assert!(text.contains("League Table (3 players)"));
        let ana = text.find("Ana").unwrap();
        let cy = text.find("Cy").unwrap();
        let bo = text.find("Bo").unwrap();
        assert!(ana < cy && cy < bo);
    }

    #[test]
    fn render_empty_table_does_not_panic() {
        let league = LeagueView::from_rows(
            "Empty",
            &vec![],
            &vec![],
            &pasta_app::DisplayConfig::default(),
        );
        let text = render_to_string(80, 6, |frame| render(frame, frame.area(), &league, 0));
        assert!(text.contains("(0 players)"));
    }
}
