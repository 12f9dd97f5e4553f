//! Key handling on top of the board controller

use super::state::{char_to_byte_pos, AppMode, AppState};
use cb_core::board::{BoardController, Outcome};
use cb_core::comment::Comment;
use cb_core::CommentId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Handle;
use tracing::debug;

/// The board as seen by the terminal: controller plus presentation state
pub struct BoardView {
    pub state: AppState,
    board: BoardController,
    runtime: Handle,
}

impl BoardView {
    /// Wrap a controller. Async actions are driven to completion on `runtime`.
    pub fn new(board: BoardController, runtime: Handle) -> Self {
        Self {
            state: AppState::new(),
            board,
            runtime,
        }
    }

    pub fn board(&self) -> &BoardController {
        &self.board
    }

    /// Comment under the selection
    pub fn selected_comment(&self) -> Option<&Comment> {
        self.board.state().comments.get(self.state.selected)
    }

    fn selected_id(&self) -> Option<CommentId> {
        self.selected_comment().map(|c| c.id)
    }

    /// Refresh the list from the store
    pub fn load(&mut self) -> Outcome {
        let outcome = self.runtime.block_on(self.board.load());
        self.after_change();
        outcome
    }

    /// True if handling `key` performs a store or gate round trip
    pub fn blocks_on(&self, key: &KeyEvent) -> bool {
        match self.state.mode {
            AppMode::Normal => match key.code {
                KeyCode::Char('r') => true,
                KeyCode::Char('x') | KeyCode::Char('d') => self.selected_comment().is_some(),
                _ => false,
            },
            AppMode::Insert => key.code == KeyCode::Enter,
            AppMode::Help => false,
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            AppMode::Normal => self.handle_normal_input(key),
            AppMode::Insert => self.handle_insert_input(key),
            AppMode::Help => self.state.mode = AppMode::Normal,
        }
    }

    fn handle_normal_input(&mut self, key: KeyEvent) {
        let len = self.board.state().comments.len();
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.should_quit = true
            }
            KeyCode::Char('?') => self.state.mode = AppMode::Help,

            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(len),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('g') => self.state.selected = 0,
            KeyCode::Char('G') => self.state.selected = len.saturating_sub(1),

            KeyCode::Char('a') | KeyCode::Char('i') => self.enter_insert(),
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    if self.board.begin_edit(id) == Outcome::Applied {
                        self.enter_insert();
                    }
                }
            }
            KeyCode::Char('x') | KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let outcome = self.runtime.block_on(self.board.delete(id));
                    if outcome == Outcome::Failed {
                        self.state.set_message(format!("Could not delete #{}", id));
                    }
                    self.after_change();
                }
            }
            KeyCode::Char('r') => {
                self.load();
            }
            KeyCode::Esc => self.board.dismiss_alert(),
            _ => {}
        }
    }

    fn handle_insert_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.board.cancel_edit();
                self.state.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                let outcome = self.runtime.block_on(self.board.submit());
                debug!("Submit finished: {:?}", outcome);
                // Stay in insert mode while the draft survives (blocked or failed add)
                if self.board.state().draft.is_empty() {
                    self.state.mode = AppMode::Normal;
                }
                self.after_change();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut draft = self.board.state().draft.clone();
                let byte_pos = char_to_byte_pos(&draft, self.state.editor_cursor);
                draft.insert(byte_pos, c);
                if self.board.set_draft(draft) {
                    self.state.editor_cursor += 1;
                }
            }
            KeyCode::Backspace => {
                if self.state.editor_cursor > 0 {
                    let mut draft = self.board.state().draft.clone();
                    let byte_pos = char_to_byte_pos(&draft, self.state.editor_cursor - 1);
                    draft.remove(byte_pos);
                    if self.board.set_draft(draft) {
                        self.state.editor_cursor -= 1;
                    }
                }
            }
            KeyCode::Left => {
                self.state.editor_cursor = self.state.editor_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.state.editor_cursor < self.draft_len() {
                    self.state.editor_cursor += 1;
                }
            }
            KeyCode::Home => self.state.editor_cursor = 0,
            KeyCode::End => self.state.editor_cursor = self.draft_len(),
            _ => {}
        }
    }

    fn enter_insert(&mut self) {
        self.state.mode = AppMode::Insert;
        self.state.editor_cursor = self.draft_len();
    }

    fn draft_len(&self) -> usize {
        self.board.state().draft.chars().count()
    }

    fn after_change(&mut self) {
        self.state.clamp_selection(self.board.state().comments.len());
        self.state.editor_cursor = self.state.editor_cursor.min(self.draft_len());
    }
}
