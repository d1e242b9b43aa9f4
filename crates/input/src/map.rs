//! Key mapping from terminal events to game input.

use crate::types::{InputEvent, Key};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Keys handled by the host instead of the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
    SwitchGame,
}

/// Characters typed with shift held on a US layout. Some terminals report
/// them without the SHIFT modifier.
const SHIFTED_SYMBOLS: &str = "~!@#$%^&*()_+{}|:\"<>?";

/// Map a key press or repeat to game input. Releases are dropped, as are
/// control chords.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let (mapped, implied_shift) = match key.code {
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            (
                Key::Char(c),
                c.is_ascii_uppercase() || SHIFTED_SYMBOLS.contains(c),
            )
        }
        KeyCode::Enter => (Key::Enter, false),
        KeyCode::Backspace => (Key::Backspace, false),
        KeyCode::Left => (Key::Left, false),
        KeyCode::Right => (Key::Right, false),
        KeyCode::Up => (Key::Up, false),
        KeyCode::Down => (Key::Down, false),
        KeyCode::Esc => (Key::Escape, false),
        KeyCode::Tab => (Key::Tab, false),
        _ => (Key::Other, false),
    };
    Some(InputEvent::Key {
        key: mapped,
        shift: implied_shift || key.modifiers.contains(KeyModifiers::SHIFT),
    })
}

/// A left button press is a click; everything else is ignored.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click),
        _ => None,
    }
}

/// Host-level command for a key, if any.
pub fn host_command(key: KeyEvent) -> Option<HostCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(HostCommand::Quit);
    }
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => Some(HostCommand::SwitchGame),
        _ => None,
    }
}

/// Check if key should quit the host.
///
/// `q` is not a quit key: it is a valid character in a player name.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::key(Key::Left))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::key(Key::Up))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(InputEvent::key(Key::Enter))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(InputEvent::key(Key::Backspace))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::F(5))),
            Some(InputEvent::key(Key::Other))
        );
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::key(Key::Char(' ')))
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputEvent::shifted(Key::Char('A')))
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_tilde_implies_shift() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('~'))),
            Some(InputEvent::shifted(Key::Char('~')))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        assert_eq!(map_key_event(release(KeyCode::Char('a'))), None);
        assert_eq!(host_command(release(KeyCode::Esc)), None);
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(InputEvent::Click)
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(map_mouse_event(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_host_keys() {
        assert_eq!(
            host_command(KeyEvent::from(KeyCode::Esc)),
            Some(HostCommand::Quit)
        );
        assert_eq!(
            host_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(HostCommand::Quit)
        );
        assert_eq!(
            host_command(KeyEvent::from(KeyCode::Tab)),
            Some(HostCommand::SwitchGame)
        );
        assert_eq!(host_command(KeyEvent::from(KeyCode::Char('q'))), None);
    }
}
