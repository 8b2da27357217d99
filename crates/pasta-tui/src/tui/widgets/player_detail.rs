// Player detail popup: description, season record and every fixture of the
// highlighted player. Drawn over the main panel when `detail_open` is set.

use pasta_app::LeagueView;
use pasta_core::Match;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::display::{score_text, signed};
use crate::tui::ViewState;

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 18;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (Some(league), Some(name)) = (&state.league, state.selected_player()) else {
        return;
    };

    let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {name} "),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Esc to close ").right_aligned());

    let paragraph = Paragraph::new(detail_lines(league, name))
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, popup);
}

/// Text content of the popup.
pub fn detail_lines(league: &LeagueView, name: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let description = league
        .player(name)
        .map(|p| p.description.as_str())
        .filter(|d| !d.is_empty())
        .unwrap_or("No description");
    lines.push(Line::from(Span::styled(
        description.to_string(),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));

    if let Some((rank, row)) = league
        .standings
        .iter()
        .enumerate()
        .find(|(_, r)| r.player == name)
    {
        lines.push(Line::from(format!(
            "#{}  {} pts  {}W {}D {}L  GF {} GA {} ({})",
            rank + 1,
            row.points,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            signed(row.goal_difference())
        )));
        lines.push(Line::from(""));
    }

    let matches = league.player_matches(name);
    if matches.is_empty() {
        lines.push(Line::from("No matches"));
    }
    for m in matches {
        lines.push(fixture_line(m, name));
    }
    lines
}

fn fixture_line(m: &Match, name: &str) -> Line<'static> {
    let day = m
        .matchday
        .map_or_else(|| "MD ?".to_string(), |md| format!("MD {md}"));
    let outcome = m.result().map(|(s1, s2)| {
        let (mine, theirs) = if m.player1 == name { (s1, s2) } else { (s2, s1) };
        match mine.cmp(&theirs) {
            std::cmp::Ordering::Greater => ("W", Color::Green),
            std::cmp::Ordering::Equal => ("D", Color::Yellow),
            std::cmp::Ordering::Less => ("L", Color::Red),
        }
    });

    let mut spans = vec![Span::styled(
        format!("{day:<6}"),
        Style::default().fg(Color::Gray),
    )];
    spans.push(match outcome {
        Some((letter, color)) => Span::styled(
            format!("{letter} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        None => Span::raw("  "),
    });
    spans.push(Span::raw(format!(
        "{} {} {}",
        m.player1,
        score_text(m),
        m.player2
    )));
    Line::from(spans)
}

/// Compute a centered rectangle of the given size within `area`, clamped to
/// the available space.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .split(vertical[0]);
    horizontal[0]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{loaded_state, render_to_string, sample_league};

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn detail_lists_record_and_fixtures() {
        let league = sample_league();
        let lines = plain(&detail_lines(&league, "Ana"));
        assert_eq!(lines[0], "Left foot only");
        assert_eq!(lines[2], "#1  4 pts  1W 1D 0L  GF 2 GA 1 (+1)");
        assert_eq!(lines[4], "MD 1  W Ana 2 : 1 Bo");
        assert_eq!(lines[5], "MD 2  D Ana 0 : 0 Cy");
        assert_eq!(lines[6], "MD 3    Bo vs Ana");
    }

    #[test]
    fn losing_side_and_missing_description() {
        let league = sample_league();
        let lines = plain(&detail_lines(&league, "Bo"));
        assert_eq!(lines[0], "No description");
        assert_eq!(lines[4], "MD 1  L Ana 2 : 1 Bo");
    }

    #[test]
    fn centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 6);
        let rect = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        assert!(rect.width <= area.width && rect.height <= area.height);
    }

    #[test]
    fn render_popup_over_panel() {
        let mut state = loaded_state();
        state.detail_open = true;
        let text = render_to_string(80, 24, |frame| render(frame, frame.area(), &state));
        assert!(text.contains(" Ana "));
        assert!(text.contains("Left foot only"));
        assert!(text.contains("Esc to close"));
    }
}
