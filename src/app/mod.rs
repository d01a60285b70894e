mod actions;
mod handlers;
mod navigation;
pub mod state;

pub use state::{App, AppState};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Handles a key press and updates application state accordingly.
    ///
    /// Failures of the underlying folder and trash operations never escape
    /// from here; they end up in `error_message`.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        self.clear_messages();

        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.state {
            AppState::Browse => self.handle_browse_keys(key),
            AppState::OpenFolder => self.handle_open_folder_keys(key),
            AppState::Confirm(mode) => self.handle_confirm_keys(key, mode),
        }
    }
}
