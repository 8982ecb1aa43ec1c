//! Key and mouse mapping.
//!
//! Raw crossterm events become [`Action`]s; what a key means depends on
//! which dialog (if any) is open.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::picker::Modal;

/// Something the user asked the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    FocusHome,
    FocusEnd,
    FocusNext,
    FocusPrev,
    /// Tap on the focused card
    ToggleSelect,
    /// Tap on the focused card's favorite indicator
    ToggleFavorite,
    ConfirmRemoval,
    CancelRemoval,
    SwitchChoice,
    ActivateChoice,
    DismissNotice,
    /// Left click at (column, row)
    Click { column: u16, row: u16 },
}

/// Map a key press to an action for the current dialog state
pub fn map_key(key: KeyEvent, modal: &Modal) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match modal {
        Modal::ConfirmRemove { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmRemoval),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelRemoval),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                Some(Action::SwitchChoice)
            }
            KeyCode::Char('h') | KeyCode::Char('l') => Some(Action::SwitchChoice),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateChoice),
            _ => None,
        },
        Modal::Notice(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
            _ => None,
        },
        Modal::None => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusRight),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusDown),
            KeyCode::Home => Some(Action::FocusHome),
            KeyCode::End => Some(Action::FocusEnd),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleSelect),
            KeyCode::Char('f') | KeyCode::Char('*') => Some(Action::ToggleFavorite),
            _ => None,
        },
    }
}

/// Only left-button presses count as taps
pub fn map_mouse(event: MouseEvent) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}
