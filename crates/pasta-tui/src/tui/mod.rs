// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState`. Loads run in background tasks that push
// `UiUpdate` messages over an mpsc channel; the TUI applies them to
// `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use pasta_app::{load_league, DisplayConfig, LeagueView, RowSource};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{error, info};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Which view the main panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Table,
    Scorers,
    Conceded,
    Matchdays,
}

impl TabId {
    pub const ALL: [TabId; 4] = [TabId::Table, TabId::Scorers, TabId::Conceded, TabId::Matchdays];

    pub fn next(self) -> TabId {
        match self {
            TabId::Table => TabId::Scorers,
            TabId::Scorers => TabId::Conceded,
            TabId::Conceded => TabId::Matchdays,
            TabId::Matchdays => TabId::Table,
        }
    }

    pub fn prev(self) -> TabId {
        match self {
            TabId::Table => TabId::Matchdays,
            TabId::Scorers => TabId::Table,
            TabId::Conceded => TabId::Scorers,
            TabId::Matchdays => TabId::Conceded,
        }
    }
}

/// Load progress pushed from the background load task.
#[derive(Debug)]
pub enum UiUpdate {
    Loading,
    Loaded(Box<LeagueView>),
    LoadFailed(String),
}

/// Requests from the input handler that the event loop must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Reload,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state read by every widget.
pub struct ViewState {
    pub league_name: String,
    /// Latest successful load. Cleared when a load fails.
    pub league: Option<LeagueView>,
    pub load_state: LoadState,
    pub active_tab: TabId,
    /// Highlighted row on the Table, Scorers and Conceded tabs.
    pub selected: usize,
    /// Index into `league.matchdays` shown by the slider.
    pub matchday_index: usize,
    /// Whether the player detail popup is open.
    pub detail_open: bool,
}

impl ViewState {
    pub fn new(league_name: impl Into<String>) -> Self {
        ViewState {
            league_name: league_name.into(),
            league: None,
            load_state: LoadState::Loading,
            active_tab: TabId::Table,
            selected: 0,
            matchday_index: 0,
            detail_open: false,
        }
    }

    /// Number of selectable rows on the active tab.
    pub fn row_count(&self) -> usize {
        let Some(league) = &self.league else {
            return 0;
        };
        match self.active_tab {
            TabId::Table => league.standings.len(),
            TabId::Scorers => league.top_scorers.len(),
            TabId::Conceded => league.top_conceded.len(),
            TabId::Matchdays => 0,
        }
    }

    /// Player on the highlighted row of the active tab.
    pub fn selected_player(&self) -> Option<&str> {
        let league = self.league.as_ref()?;
        let name = match self.active_tab {
            TabId::Table => &league.standings.get(self.selected)?.player,
            TabId::Scorers => &league.top_scorers.get(self.selected)?.player,
            TabId::Conceded => &league.top_conceded.get(self.selected)?.player,
            TabId::Matchdays => return None,
        };
        Some(name.as_str())
    }

    pub fn matchday_count(&self) -> usize {
        self.league.as_ref().map_or(0, |l| l.matchdays.len())
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Loading => {
            state.load_state = LoadState::Loading;
        }
        UiUpdate::Loaded(league) => {
            state.matchday_index = league.initial_matchday().unwrap_or(0);
            state.league_name = league.league_name.clone();
            state.league = Some(*league);
            state.load_state = LoadState::Ready;
            state.selected = state.selected.min(state.row_count().saturating_sub(1));
        }
        UiUpdate::LoadFailed(message) => {
            state.league = None;
            state.detail_open = false;
            state.selected = 0;
            state.matchday_index = 0;
            state.load_state = LoadState::Failed(message);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    render_main_panel(frame, &layout, state);
    render_help_bar(frame, &layout, state);

    if state.detail_open {
        widgets::player_detail::render(frame, layout.main_panel, state);
    }
}

fn render_main_panel(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let area = layout.main_panel;
    if let LoadState::Failed(message) = &state.load_state {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                "Could not load the league",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to try again.",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Error"));
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(league) = &state.league else {
        let paragraph = Paragraph::new("Loading league data...")
            .block(Block::default().borders(Borders::ALL).title(state.league_name.as_str()));
        frame.render_widget(paragraph, area);
        return;
    };

    match state.active_tab {
        TabId::Table => widgets::standings::render(frame, area, league, state.selected),
        TabId::Scorers => widgets::leaderboard::render(
            frame,
            area,
            pasta_core::Metric::Scored,
            &league.top_scorers,
            state.selected,
        ),
        TabId::Conceded => widgets::leaderboard::render(
            frame,
            area,
            pasta_core::Metric::Conceded,
            &league.top_conceded,
            state.selected,
        ),
        TabId::Matchdays => widgets::matchdays::render(frame, area, league, state.matchday_index),
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let text = if state.detail_open {
        " Esc:Close | q:Quit"
    } else if state.active_tab == TabId::Matchdays {
        " q:Quit | 1-4:Tabs | \u{2190}/\u{2192}:Matchday | r:Reload"
    } else {
        " q:Quit | 1-4:Tabs | \u{2191}/\u{2193}:Select | Enter:Player | r:Reload"
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Run one full load in the background, reporting through `ui_tx`.
pub fn spawn_load(
    source: Arc<dyn RowSource>,
    league_name: String,
    display: DisplayConfig,
    ui_tx: mpsc::Sender<UiUpdate>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let _ = ui_tx.send(UiUpdate::Loading).await;
        let update = match load_league(source.as_ref(), &league_name, &display).await {
            Ok(view) => UiUpdate::Loaded(Box::new(view)),
            Err(e) => {
                error!("league load failed: {}", e);
                UiUpdate::LoadFailed(e.to_string())
            }
        };
        let _ = ui_tx.send(update).await;
    })
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// Initializes the terminal, installs a panic hook that restores it, starts
/// the first load, then selects over load updates, keyboard input and render
/// ticks.
pub async fn run(
    source: Arc<dyn RowSource>,
    league_name: String,
    display: DisplayConfig,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let (ui_tx, mut ui_rx) = mpsc::channel(16);
    let mut view_state = ViewState::new(league_name.clone());
    spawn_load(source.clone(), league_name.clone(), display.clone(), ui_tx.clone());

    let mut event_stream = EventStream::new();
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            Some(update) = ui_rx.recv() => {
                apply_ui_update(&mut view_state, update);
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => break,
                            Some(UserCommand::Reload) => {
                                info!("reload requested");
                                view_state.load_state = LoadState::Loading;
                                spawn_load(
                                    source.clone(),
                                    league_name.clone(),
                                    display.clone(),
                                    ui_tx.clone(),
                                );
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
