use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Abort
            }
            KeyCode::Char('q') | KeyCode::Esc => NormalModeAction::Confirm,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveCursorDown,
            KeyCode::Home | KeyCode::Char('g') => NormalModeAction::MoveCursorFirst,
            KeyCode::End | KeyCode::Char('G') => NormalModeAction::MoveCursorLast,
            KeyCode::Enter | KeyCode::Char(' ') => NormalModeAction::ActivateRow,
            KeyCode::Char('a') => NormalModeAction::TickAll,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                HelpModeAction::Abort
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => HelpModeAction::ExitHelpMode,
            _ => HelpModeAction::None,
        }
    }

    /// Left button presses are clicks; the row is resolved by the app.
    pub fn handle_mouse(mouse_event: MouseEvent) -> MouseAction {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => MouseAction::Click {
                column: mouse_event.column,
                row: mouse_event.row,
            },
            MouseEventKind::ScrollUp => MouseAction::ScrollUp,
            MouseEventKind::ScrollDown => MouseAction::ScrollDown,
            _ => MouseAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Confirm,
    Abort,
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorFirst,
    MoveCursorLast,
    ActivateRow,
    TickAll,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
    Abort,
}

#[derive(Debug, PartialEq)]
pub enum MouseAction {
    None,
    Click { column: u16, row: u16 },
    ScrollUp,
    ScrollDown,
}
