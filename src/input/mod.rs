use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, BrowseFocus, LoginField, Screen};
use crate::xtream::models::Section;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    _ => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match (state.screen, m.kind) {
            (Screen::Browse, MouseEventKind::ScrollUp) => Some(Action::ListUp),
            (Screen::Browse, MouseEventKind::ScrollDown) => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => {
            if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                return Some(Action::Quit);
            }
            match state.screen {
                Screen::Login => handle_login(state, k),
                Screen::Browse if state.show_help => handle_help(k),
                Screen::Browse if state.focus == BrowseFocus::Search => handle_search_input(k),
                Screen::Browse => handle_browse(k),
                Screen::Player => handle_player(k),
            }
        }
    }
}

fn handle_login(state: &AppState, k: KeyEvent) -> Option<Action> {
    if state.login.busy {
        return match k.code {
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
    }
    match k.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Action::LoginNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::LoginPrevField),
        KeyCode::Enter => Some(Action::SubmitLogin),
        KeyCode::Char(' ') if state.login.focus == LoginField::Remember => Some(Action::ToggleRemember),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ClearInput),
        KeyCode::Char(_) if state.login.focus == LoginField::Remember => None,
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_help(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_search_input(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Action::SetFocus(BrowseFocus::Items)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::ClearInput),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_browse(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Char('d') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageDown),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),

        // Panes
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SetFocus(BrowseFocus::Categories)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SetFocus(BrowseFocus::Items)),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::SetFocus(BrowseFocus::Search)),

        // Sections
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),
        KeyCode::Char('1') => Some(Action::SelectSection(Section::Live)),
        KeyCode::Char('2') => Some(Action::SelectSection(Section::Movie)),
        KeyCode::Char('3') => Some(Action::SelectSection(Section::Series)),

        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char('r') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Refresh),
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Char('L') => Some(Action::Logout),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::SetFocus(BrowseFocus::Categories)),

        _ => None,
    }
}

fn handle_player(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Right => Some(Action::SeekForward),
        KeyCode::Left => Some(Action::SeekBack),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char('t') => Some(Action::ToggleFullscreen),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::ClosePlayer),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state(screen: Screen) -> AppState {
        let mut s = AppState::new();
        s.screen = screen;
        s
    }

    #[test]
    fn test_login_typing_and_remember() {
        let mut s = state(Screen::Login);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('x'))), Some(Action::InputChar('x')));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char(' '))), Some(Action::InputChar(' ')));

        s.login.focus = LoginField::Remember;
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char(' '))), Some(Action::ToggleRemember));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('x'))), None);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Enter)), Some(Action::SubmitLogin));
    }

    #[test]
    fn test_login_busy_ignores_keys() {
        let mut s = state(Screen::Login);
        s.login.busy = true;
        assert_eq!(map_input_to_action(&s, key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_search_box_captures_letters() {
        let mut s = state(Screen::Browse);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('f'))), Some(Action::ToggleFavorite));
        s.focus = BrowseFocus::Search;
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('f'))), Some(Action::InputChar('f')));
        assert_eq!(
            map_input_to_action(&s, key(KeyCode::Esc)),
            Some(Action::SetFocus(BrowseFocus::Items))
        );
    }

    #[test]
    fn test_player_keys() {
        let s = state(Screen::Player);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char(' '))), Some(Action::TogglePause));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Right)), Some(Action::SeekForward));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Left)), Some(Action::SeekBack));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('t'))), Some(Action::ToggleFullscreen));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Esc)), Some(Action::ClosePlayer));
    }

    #[test]
    fn test_section_keys() {
        let s = state(Screen::Browse);
        assert_eq!(
            map_input_to_action(&s, key(KeyCode::Char('2'))),
            Some(Action::SelectSection(Section::Movie))
        );
        assert_eq!(map_input_to_action(&s, key(KeyCode::Tab)), Some(Action::NextSection));
    }
}
