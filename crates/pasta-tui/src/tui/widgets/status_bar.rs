// Status bar widget: league name, load state, tab bar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{LoadState, TabId, ViewState};

/// Render the status bar into the given area.
///
/// Layout: [load indicator] [league name] [loaded-at] | [tab bar]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let (dot, dot_color) = load_indicator(&state.load_state);
    spans.push(Span::styled(format!(" {} ", dot), Style::default().fg(dot_color)));

    spans.push(Span::styled(
        state.league_name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!(" {}", load_text(state)),
        Style::default().fg(Color::Gray),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_tab));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the load-state dot character and its color.
pub fn load_indicator(load_state: &LoadState) -> (&'static str, Color) {
    match load_state {
        LoadState::Loading => ("●", Color::Yellow),
        LoadState::Ready => ("●", Color::Green),
        LoadState::Failed(_) => ("●", Color::Red),
    }
}

fn load_text(state: &ViewState) -> String {
    match (&state.load_state, &state.league) {
        (LoadState::Loading, _) => "Loading…".to_string(),
        (LoadState::Failed(_), _) => "load failed".to_string(),
        (LoadState::Ready, Some(league)) => {
            format!("updated {}", league.loaded_at.format("%H:%M:%S"))
        }
        (LoadState::Ready, None) => String::new(),
    }
}

/// Tab indicator spans with the active tab highlighted.
/// E.g. "[1:Table] [2:Scorers] [3:Conceded] [4:Matchdays]"
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, tab) in TabId::ALL.into_iter().enumerate() {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, tab_label(tab)), style));
        spans.push(Span::raw(" "));
    }
    spans
}

pub fn tab_label(tab: TabId) -> &'static str {
    match tab {
        TabId::Table => "Table",
        TabId::Scorers => "Scorers",
        TabId::Conceded => "Conceded",
        TabId::Matchdays => "Matchdays",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
