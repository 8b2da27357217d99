// Matchday slider widget: one matchday's fixtures at a time.
//
// The top line shows the position in the season; the table lists the
// fixtures in sheet order with scores, or "vs" when not yet played.

use pasta_app::LeagueView;
use pasta_core::MatchdayGroup;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::display::score_text;

pub fn render(frame: &mut Frame, area: Rect, league: &LeagueView, index: usize) {
    let block = Block::default().borders(Borders::ALL).title("Matchdays");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(group) = league.matchdays.get(index) else {
        frame.render_widget(Paragraph::new("No matches scheduled"), inner);
        return;
    };

    let [slider_area, table_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(slider_line(league, index, group)).alignment(Alignment::Center),
        slider_area,
    );

    let rows: Vec<Row> = group
        .matches
        .iter()
        .map(|m| {
            let style = if m.is_played() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Row::new(vec![
                Cell::from(Line::from(m.player1.clone()).alignment(Alignment::Right)),
                Cell::from(Line::from(score_text(m)).alignment(Alignment::Center)),
                Cell::from(m.player2.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [Constraint::Fill(1), Constraint::Length(9), Constraint::Fill(1)];
    frame.render_widget(Table::new(rows, widths).column_spacing(2), table_area);
}

/// "◀ Matchday 3 (3/5) ▶" with the arrows dimmed at either end.
fn slider_line(league: &LeagueView, index: usize, group: &MatchdayGroup) -> Line<'static> {
    let total = league.matchdays.len();
    let arrow = |enabled: bool, glyph: &'static str| {
        let style = if enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(glyph, style)
    };
    Line::from(vec![
        arrow(index > 0, "◀ "),
        Span::styled(
            group.label(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " ({}/{}, {} played) ",
            index + 1,
            total,
            group.played_count()
        )),
        arrow(index + 1 < total, "▶"),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{render_to_string, sample_league};

    #[test]
    fn shows_selected_matchday_results() {
        let league = sample_league();
        let text = render_to_string(60, 10, |frame| render(frame, frame.area(), &league, 0));
        assert!(text.contains("Matchday 1 (1/3, 1 played)"));
        assert!(text.contains("2 : 1"));
        assert!(text.contains("vs"));
        assert!(!text.contains("Matchday 2"));
    }

    #[test]
    fn unplayed_matchday_shows_vs_only() {
        let league = sample_league();
        let text = render_to_string(60, 10, |frame| render(frame, frame.area(), &league, 2));
        assert!(text.contains("Matchday 3 (3/3, 0 played)"));
        assert!(text.contains("vs"));
        assert!(!text.contains(" : "));
    }

    #[test]
    fn empty_season_placeholder() {
        let league = LeagueView::from_rows(
            "Empty",
            &vec![],
            &vec![],
            &pasta_app::DisplayConfig::default(),
        );
        let text = render_to_string(60, 6, |frame| render(frame, frame.area(), &league, 0));
        assert!(text.contains("No matches scheduled"));
    }
}
