//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    MoveUp,
    MoveDown,
    Activate,
    ToggleSidebar,
    Cancel,
    ToggleTheme,
    ToggleUserMenu,
    NextInterval,
    PrevInterval,
    NextCurrency,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<KeyAction> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            KeyCode::Char('b') => Some(KeyAction::ToggleSidebar),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char('?') => Some(KeyAction::OpenHelp),
        KeyCode::Char('b') => Some(KeyAction::ToggleSidebar),
        KeyCode::Char('t') => Some(KeyAction::ToggleTheme),
        KeyCode::Char('u') => Some(KeyAction::ToggleUserMenu),
        KeyCode::Char('i') => Some(KeyAction::NextInterval),
        KeyCode::Char('I') => Some(KeyAction::PrevInterval),
        KeyCode::Char('c') => Some(KeyAction::NextCurrency),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Activate),
        KeyCode::Esc => Some(KeyAction::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::MoveDown),
        _ => None,
    }
}
