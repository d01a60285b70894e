use rawcull_core::{CoreError, Deleter};
use rawcull_models::{DeletionMode, DeletionOutcome};
use std::path::PathBuf;
use tracing::{error, info, warn};

use super::{App, AppState};

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl App {
    /// Makes `folder` the current folder and lists it.
    ///
    /// On failure the previous folder and its list are kept.
    pub fn open_folder(&mut self, folder: PathBuf) {
        if !folder.is_dir() {
            warn!("Not a folder: {:?}", folder);
            self.error_message = Some(format!("Not a folder: {}", folder.display()));
            return;
        }

        match self.scanner.list(&folder) {
            Ok(entries) => {
                info!("Opened {:?} with {} files", folder, entries.len());
                self.folder = Some(folder);
                self.entries = entries;
                self.list_state.select(None);
                self.preview = None;
                self.select(if self.entries.is_empty() { None } else { Some(0) });
                if self.entries.is_empty() {
                    self.info_message = Some("No JPG or NEF files in this folder.".to_string());
                }
            }
            Err(e) => {
                error!("Failed to open folder: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Rescans the current folder, keeping the selection as close as possible
    /// to where it was.
    pub fn refresh(&mut self) {
        let Some(folder) = self.folder.clone() else {
            self.info_message = Some("No folder opened. Press 'o' to open one.".to_string());
            return;
        };

        let previous = self.selected_index();
        match self.scanner.list(&folder) {
            Ok(entries) => {
                self.entries = entries;
                let restored = match (previous, self.entries.len()) {
                    (_, 0) => None,
                    (Some(idx), len) => Some(idx.min(len - 1)),
                    (None, _) => Some(0),
                };
                // Same index may now point at another file, so always reload.
                self.list_state.select(None);
                self.preview = None;
                self.select(restored);
            }
            Err(e) => {
                error!("Failed to refresh {:?}: {}", folder, e);
                self.entries.clear();
                self.list_state.select(None);
                self.preview = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub(crate) fn load_preview(&mut self) {
        let (Some(folder), Some(entry)) = (self.folder.as_deref(), self.selected_entry()) else {
            self.preview = None;
            return;
        };

        match self.preview_loader.load(entry, folder) {
            Ok(info) => self.preview = Some(info),
            Err(e) => {
                warn!("Preview unavailable: {}", e);
                self.preview = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Starts a deletion of the selected entry, asking first when
    /// `confirm_deletions` is set.
    pub fn request_delete(&mut self, mode: DeletionMode) {
        let (Some(folder), Some(entry)) = (self.folder.as_deref(), self.selected_entry()) else {
            self.error_message = Some("No file selected.".to_string());
            return;
        };

        if self.settings.confirm_deletions {
            self.pending_targets = Deleter::targets(entry, mode, folder);
            self.state = AppState::Confirm(mode);
        } else {
            self.perform_delete(mode);
        }
    }

    /// Deletes the selected entry's targets for `mode` and reports the result.
    pub fn perform_delete(&mut self, mode: DeletionMode) {
        let (Some(folder), Some(entry)) = (self.folder.clone(), self.selected_entry().cloned()) else {
            self.error_message = Some("No file selected.".to_string());
            return;
        };

        match self.deleter.delete(&entry, mode, &folder) {
            Ok(DeletionOutcome::Trashed(paths)) => {
                info!("Trashed {} file(s) for {}", paths.len(), entry);
                self.refresh();
                self.success_message = Some("Selected files have been moved to the recycle bin.".to_string());
            }
            Ok(DeletionOutcome::NothingToDelete(paths)) => {
                self.info_message = Some(format!("Nothing to delete: {}", join_paths(&paths)));
            }
            Err(e) => {
                error!("Deletion of {} stopped at {:?}", entry, e.path());
                let partial = matches!(&e, CoreError::Deletion { trashed, .. } if !trashed.is_empty());
                if partial {
                    self.refresh();
                }
                self.error_message = Some(format!("Failed to delete the file: {e}"));
            }
        }
    }
}
