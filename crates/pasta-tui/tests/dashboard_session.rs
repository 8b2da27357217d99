// A scripted dashboard session: load, navigate, open a player, reload with
// a failure, recover.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pasta_app::{DisplayConfig, LeagueView};
use pasta_core::Cell;
use pasta_tui::tui::input::handle_key;
use pasta_tui::tui::{apply_ui_update, render_frame, TabId, UiUpdate, UserCommand, ViewState};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn t(s: &str) -> Cell {
    Cell::Text(s.into())
}

fn n(v: f64) -> Cell {
    Cell::Number(v)
}

fn season() -> LeagueView {
    let players = vec![
        vec![t("Name"), t("Description")],
        vec![t("Gnocchi"), t("Never misses a penalty")],
        vec![t("Penne"), Cell::Empty],
        vec![t("Rigatoni"), Cell::Empty],
        vec![t("Fusilli"), Cell::Empty],
    ];
    let matches = vec![
        vec![t("Matchday"), t("Player 1"), t("Player 2"), t("Score 1"), t("Score 2")],
        vec![n(1.0), t("Gnocchi"), t("Penne"), n(3.0), n(0.0)],
        vec![n(1.0), t("Rigatoni"), t("Fusilli"), n(1.0), n(1.0)],
        vec![n(2.0), t("Penne"), t("Rigatoni"), n(2.0), n(1.0)],
        vec![n(2.0), t("Fusilli"), t("Gnocchi"), n(0.0), n(2.0)],
        vec![n(3.0), t("Gnocchi"), t("Rigatoni"), n(-1.0), n(-1.0)],
        vec![n(3.0), t("Penne"), t("Fusilli"), Cell::Empty, Cell::Empty],
    ];
    LeagueView::from_rows("Pasta League", &players, &matches, &DisplayConfig { top_n: 3 })
}

fn press(state: &mut ViewState, code: KeyCode) -> Option<UserCommand> {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
}

fn screen(state: &ViewState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| render_frame(frame, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn full_session() {
    let mut state = ViewState::new("Pasta League");
    assert!(screen(&state).contains("Loading league data"));

    apply_ui_update(&mut state, UiUpdate::Loaded(Box::new(season())));
    let table = screen(&state);
    assert!(table.contains("League Table (4 players)"));
    assert!(table.find("Gnocchi").unwrap() < table.find("Penne").unwrap());

    // Gnocchi leads with two wins; open their card.
    assert_eq!(state.selected_player(), Some("Gnocchi"));
    press(&mut state, KeyCode::Enter);
    let popup = screen(&state);
    assert!(popup.contains("Never misses a penalty"));
    assert!(popup.contains("#1  6 pts"));
    press(&mut state, KeyCode::Esc);

    // Scorers tab, truncated to three entries.
    press(&mut state, KeyCode::Char('2'));
    assert_eq!(state.active_tab, TabId::Scorers);
    assert_eq!(state.row_count(), 3);

    // Matchday 3 has no results, so the slider opens on matchday 2.
    press(&mut state, KeyCode::Char('4'));
    assert!(screen(&state).contains("Matchday 2 (2/3, 2 played)"));
    press(&mut state, KeyCode::Right);
    let md3 = screen(&state);
    assert!(md3.contains("Matchday 3 (3/3, 0 played)"));
    assert!(md3.contains("vs"));
    press(&mut state, KeyCode::Right);
    assert_eq!(state.matchday_index, 2);

    // A failed reload replaces every table with one error.
    assert_eq!(press(&mut state, KeyCode::Char('r')), Some(UserCommand::Reload));
    apply_ui_update(&mut state, UiUpdate::Loading);
    assert_eq!(press(&mut state, KeyCode::Char('r')), None);
    apply_ui_update(
        &mut state,
        UiUpdate::LoadFailed("failed to load players table: HTTP 503".into()),
    );
    let failed = screen(&state);
    assert!(failed.contains("Could not load the league"));
    assert!(!failed.contains("Gnocchi"));

    // A later successful reload brings everything back.
    apply_ui_update(&mut state, UiUpdate::Loaded(Box::new(season())));
    assert!(screen(&state).contains("Matchday 2"));
    assert_eq!(press(&mut state, KeyCode::Char('q')), Some(UserCommand::Quit));
}
