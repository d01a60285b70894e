use rawcull_models::{DeletionMode, DeletionOutcome, FileEntry};
use rawcull_utils::media_types::counterpart_extension;
use rawcull_utils::path::is_pair_member;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::{CoreError, SystemTrash, Trash};

/// Resolves which member(s) of a pair a request targets and moves them to
/// the trash.
#[derive(Debug, Clone)]
pub struct Deleter {
    trash: Arc<dyn Trash>,
}

impl Default for Deleter {
    fn default() -> Self {
        Self::new(Arc::new(SystemTrash))
    }
}

impl Deleter {
    #[must_use]
    pub fn new(trash: Arc<dyn Trash>) -> Self {
        Self { trash }
    }

    /// Path of the other member of `entry`'s pair.
    ///
    /// An existing file with the same base and the counterpart extension in
    /// any case is preferred, the lowercase spelling first. Without one, the
    /// lowercase path is returned even though nothing exists there.
    #[must_use]
    pub fn counterpart_path(entry: &FileEntry, folder: &Path) -> PathBuf {
        let base = entry.base_name();
        let extension = counterpart_extension(entry.extension());
        let lowercase = folder.join(format!("{base}.{extension}"));

        if lowercase.is_file() {
            return lowercase;
        }

        let found = match fs::read_dir(folder) {
            Ok(read_dir) => read_dir
                .flatten()
                .filter(|e| e.path().is_file())
                .filter_map(|e| e.file_name().to_str().map(str::to_owned))
                .find(|name| is_pair_member(name, base, extension)),
            Err(e) => {
                debug!("Deleter: Cannot look for counterpart in {:?}: {}", folder, e);
                None
            }
        };

        found.map_or(lowercase, |name| folder.join(name))
    }

    /// Paths a request would move to the trash, whether or not they exist.
    ///
    /// `PreviewOnly` and `RawOnly` pick whichever member has that kind, so
    /// either member of the pair can be the selection.
    #[must_use]
    pub fn targets(entry: &FileEntry, mode: DeletionMode, folder: &Path) -> Vec<PathBuf> {
        let selected = entry.path_in(folder);
        match mode.only_kind() {
            None => vec![selected, Self::counterpart_path(entry, folder)],
            Some(kind) if kind == entry.kind => vec![selected],
            Some(_) => vec![Self::counterpart_path(entry, folder)],
        }
    }

    /// Moves the targets of a request to the trash.
    ///
    /// Targets that are not regular files are skipped, so a folder that
    /// happens to carry a pair name is never moved. The request counts as done when
    /// at least one file was moved; when none existed the result is
    /// [`DeletionOutcome::NothingToDelete`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Deletion`] as soon as the trash refuses an
    /// existing file. Files moved earlier in the same request are not
    /// restored and are listed in the error.
    pub fn delete(
        &self,
        entry: &FileEntry,
        mode: DeletionMode,
        folder: &Path,
    ) -> Result<DeletionOutcome, CoreError> {
        let targets = Self::targets(entry, mode, folder);
        info!("Deleter: {} ({}) -> {:?}", entry.name, mode, targets);

        let mut trashed = Vec::with_capacity(targets.len());
        for path in &targets {
            if !path.is_file() {
                debug!("Deleter: No file at {:?}, skipping", path);
                continue;
            }

            if let Err(source) = self.trash.move_to_trash(path) {
                error!("Deleter: Failed to trash {:?}: {}", path, source);
                return Err(CoreError::Deletion {
                    path: path.clone(),
                    source,
                    trashed,
                });
            }

            info!("Deleter: Moved to trash {:?}", path);
            trashed.push(path.clone());
        }

        if trashed.is_empty() {
            Ok(DeletionOutcome::NothingToDelete(targets))
        } else {
            Ok(DeletionOutcome::Trashed(trashed))
        }
    }
}
