use rawcull_models::FileEntry;
use rawcull_utils::media_types::classify_file_name;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::CoreError;

/// Lists the JPG and NEF files of a single folder.
///
/// Holds no state: every call reads the folder afresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner;

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Lists pair members directly inside `folder`, in the order the
    /// filesystem returns them.
    ///
    /// Subfolders are not entered. Files with other extensions, directories
    /// and names that are not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if `folder` is missing, is not a directory,
    /// or cannot be read.
    pub fn list(&self, folder: &Path) -> Result<Vec<FileEntry>, CoreError> {
        info!("Scanner: Listing {:?}", folder);

        let read_dir = fs::read_dir(folder).map_err(|source| {
            error!("Scanner: Cannot read {:?}: {}", folder, source);
            CoreError::Io {
                path: folder.to_path_buf(),
                source,
            }
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|source| CoreError::Io {
                path: folder.to_path_buf(),
                source,
            })?;

            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }

            let file_name = dir_entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!("Scanner: Skipping non UTF-8 name {:?}", file_name);
                continue;
            };

            if let Some(entry) = classify_file_name(name) {
                entries.push(entry);
            }
        }

        info!("Scanner: Found {} files in {:?}", entries.len(), folder);
        Ok(entries)
    }
}
