// Keyboard input handling.
//
// Translates crossterm key events into local ViewState changes (tabs,
// selection, matchday slider, popup) or a UserCommand for the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{TabId, UserCommand, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the event loop has to act (reload, quit),
/// `None` when the key was handled by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports releases too on some platforms.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if state.detail_open {
        return match key_event.code {
            KeyCode::Esc | KeyCode::Enter => {
                state.detail_open = false;
                None
            }
            KeyCode::Char('q') => Some(UserCommand::Quit),
            _ => None,
        };
    }

    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),

        KeyCode::Char('1') => switch_tab(state, TabId::Table),
        KeyCode::Char('2') => switch_tab(state, TabId::Scorers),
        KeyCode::Char('3') => switch_tab(state, TabId::Conceded),
        KeyCode::Char('4') => switch_tab(state, TabId::Matchdays),
        KeyCode::Tab => switch_tab(state, state.active_tab.next()),
        KeyCode::BackTab => switch_tab(state, state.active_tab.prev()),

        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = state.row_count().saturating_sub(1);
            state.selected = (state.selected + 1).min(last);
            None
        }
        KeyCode::Home => {
            state.selected = 0;
            None
        }

        KeyCode::Left | KeyCode::Char('h') if state.active_tab == TabId::Matchdays => {
            state.matchday_index = state.matchday_index.saturating_sub(1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') if state.active_tab == TabId::Matchdays => {
            let last = state.matchday_count().saturating_sub(1);
            state.matchday_index = (state.matchday_index + 1).min(last);
            None
        }

        KeyCode::Enter => {
            if state.selected_player().is_some() {
                state.detail_open = true;
            }
            None
        }

        KeyCode::Char('r') if !state.is_loading() => Some(UserCommand::Reload),

        _ => None,
    }
}

fn switch_tab(state: &mut ViewState, tab: TabId) -> Option<UserCommand> {
    if state.active_tab != tab {
        state.active_tab = tab;
        state.selected = 0;
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
