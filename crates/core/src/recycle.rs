use std::fmt;
use std::path::Path;

use crate::BoxError;

/// Reversible removal of a single existing file.
///
/// Implementations must report lock and permission problems as errors.
pub trait Trash: Send + Sync + fmt::Debug {
    /// # Errors
    ///
    /// Returns the platform's reason when the file could not be moved.
    fn move_to_trash(&self, path: &Path) -> Result<(), BoxError>;
}

/// The operating system's recycle bin / trash can.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn move_to_trash(&self, path: &Path) -> Result<(), BoxError> {
        ::trash::delete(path).map_err(Into::into)
    }
}
