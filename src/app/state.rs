use ratatui::widgets::ListState;
use rawcull_config::Settings;
use rawcull_core::{Deleter, PreviewLoader, Scanner};
use rawcull_models::{DeletionMode, FileEntry, PreviewInfo};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Browse,
    /// Typing a folder path into the prompt.
    OpenFolder,
    /// Waiting for y/n before trashing `pending_targets`.
    Confirm(DeletionMode),
}

pub struct App {
    // Core state
    pub state: AppState,
    pub should_quit: bool,

    // UI state
    pub show_help: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub info_message: Option<String>,
    pub list_state: ListState,

    // Components
    pub settings: Settings,
    pub scanner: Scanner,
    pub deleter: Deleter,
    pub preview_loader: PreviewLoader,

    // Data
    pub folder: Option<PathBuf>,
    pub entries: Vec<FileEntry>,
    pub preview: Option<PreviewInfo>,
    pub pending_targets: Vec<PathBuf>,

    // Input state
    pub input_buffer: String,
}

impl App {
    /// Creates the app with the system trash and opens `start_folder` if set.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_deleter(settings, Deleter::default())
    }

    #[must_use]
    pub fn with_deleter(settings: Settings, deleter: Deleter) -> Self {
        let preview_loader = PreviewLoader::new(settings.show_preview_metadata);
        let start_folder = settings.start_folder.clone();

        let mut app = Self {
            state: AppState::Browse,
            should_quit: false,
            show_help: false,
            error_message: None,
            success_message: None,
            info_message: None,
            list_state: ListState::default(),
            settings,
            scanner: Scanner::new(),
            deleter,
            preview_loader,
            folder: None,
            entries: Vec::new(),
            preview: None,
            pending_targets: Vec::new(),
            input_buffer: String::new(),
        };

        if let Some(folder) = start_folder {
            app.open_folder(folder);
        }
        app
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.info_message = None;
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index().and_then(|idx| self.entries.get(idx))
    }
}
