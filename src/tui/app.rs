use crate::select::controller::{Delegates, SelectionController};
use crate::select::models::{Collection, Labeled, Tickable};
use crate::tui::handlers::{HelpModeAction, KeyHandler, MouseAction, NormalModeAction};
use crate::tui::template::ItemTemplate;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::debug;

/// Row 0 of the list is the "Select all" control.
pub const TICK_ALL_ROW: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Confirmed,
    Aborted,
}

#[derive(Debug)]
pub struct App<T> {
    pub controller: SelectionController<T>,
    pub template: ItemTemplate<T>,
    pub title: String,
    pub cursor: usize,
    pub list_state: ListState,
    /// Last area the list was drawn into, used to map mouse clicks to rows.
    pub list_area: Rect,
    pub help_mode: bool,
    pub outcome: Outcome,
}

impl<T: Tickable + Labeled + Clone> App<T> {
    pub fn new(collection: Collection<T>, delegates: Delegates<T>) -> Self {
        Self {
            controller: SelectionController::new(collection, delegates),
            template: ItemTemplate::default(),
            title: String::from("Select"),
            cursor: TICK_ALL_ROW,
            list_state: ListState::default(),
            list_area: Rect::default(),
            help_mode: false,
            outcome: Outcome::Running,
        }
    }

    pub fn with_template(mut self, template: ItemTemplate<T>) -> Self {
        self.template = template;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn should_quit(&self) -> bool {
        self.outcome != Outcome::Running
    }

    /// Number of rows including the "Select all" row.
    pub fn row_count(&self) -> usize {
        self.controller.store().len() + 1
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
            Ok(())
        } else {
            self.handle_normal_mode_key(key_event)
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Confirm => self.outcome = Outcome::Confirmed,
            NormalModeAction::Abort => self.outcome = Outcome::Aborted,
            NormalModeAction::MoveCursorUp => self.move_cursor_up(),
            NormalModeAction::MoveCursorDown => self.move_cursor_down(),
            NormalModeAction::MoveCursorFirst => self.cursor = TICK_ALL_ROW,
            NormalModeAction::MoveCursorLast => self.cursor = self.row_count() - 1,
            NormalModeAction::ActivateRow => self.activate_row(self.cursor)?,
            NormalModeAction::TickAll => self.activate_row(TICK_ALL_ROW)?,
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::Abort => self.outcome = Outcome::Aborted,
            HelpModeAction::None => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> Result<()> {
        if self.help_mode {
            return Ok(());
        }
        match KeyHandler::handle_mouse(mouse_event) {
            MouseAction::Click { column, row } => {
                if let Some(clicked) = self.row_at(column, row) {
                    self.cursor = clicked;
                    self.activate_row(clicked)?;
                }
            }
            MouseAction::ScrollUp => self.move_cursor_up(),
            MouseAction::ScrollDown => self.move_cursor_down(),
            MouseAction::None => {}
        }
        Ok(())
    }

    /// Forwards an activation to the controller. Row 0 is the aggregate
    /// control, every other row is the item one position above it.
    pub fn activate_row(&mut self, row: usize) -> Result<()> {
        debug!(row, "row activated");
        if row == TICK_ALL_ROW {
            self.controller.handle_tick_all_click()
        } else {
            self.controller.handle_item_click(row - 1)
        }
    }

    /// Keeps the cursor inside the list after the host resized the collection.
    pub fn clamp_cursor(&mut self) {
        let last = self.row_count() - 1;
        if self.cursor > last {
            self.cursor = last;
        }
    }

    fn move_cursor_up(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_down(&mut self) {
        self.clamp_cursor();
        if self.cursor < self.row_count() - 1 {
            self.cursor += 1;
        }
    }

    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        // The list is drawn inside a one cell border.
        let inside = column > area.x
            && column < area.right().saturating_sub(1)
            && row > area.y
            && row < area.bottom().saturating_sub(1);
        if !inside {
            return None;
        }

        let clicked = usize::from(row - area.y - 1) + self.list_state.offset();
        (clicked < self.row_count()).then_some(clicked)
    }

    pub fn ticked_count(&self) -> usize {
        self.controller.store().ticked_count()
    }

    pub fn total_items(&self) -> usize {
        self.controller.store().len()
    }
}
