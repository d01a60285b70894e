use crossterm::event::{KeyCode, KeyEvent};
use rawcull_models::DeletionMode;
use std::path::PathBuf;

use super::{App, AppState};

impl App {
    pub(super) fn handle_browse_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Char('o') => {
                self.input_buffer = self
                    .folder
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.state = AppState::OpenFolder;
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('b') => self.request_delete(DeletionMode::Both),
            KeyCode::Char('p') => self.request_delete(DeletionMode::PreviewOnly),
            KeyCode::Char('n') => self.request_delete(DeletionMode::RawOnly),
            _ => {}
        }
    }

    pub(super) fn handle_open_folder_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_buffer.clear();
                self.state = AppState::Browse;
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                self.state = AppState::Browse;
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    self.info_message = Some("No folder entered.".to_string());
                } else {
                    self.open_folder(PathBuf::from(trimmed));
                }
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }

    pub(super) fn handle_confirm_keys(&mut self, key: KeyEvent, mode: DeletionMode) {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                self.state = AppState::Browse;
                self.pending_targets.clear();
                self.perform_delete(mode);
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                self.state = AppState::Browse;
                self.pending_targets.clear();
                self.info_message = Some("Deletion cancelled.".to_string());
            }
            _ => {}
        }
    }
}
