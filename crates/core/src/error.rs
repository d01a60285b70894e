use std::path::PathBuf;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The folder (or a file in it) could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Moving an existing file to the trash failed. Files listed in
    /// `trashed` were already moved by the same request and stay in the trash.
    #[error("Failed to move {} to trash: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: BoxError,
        trashed: Vec<PathBuf>,
    },
}

impl CoreError {
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Deletion { path, .. } => path,
        }
    }
}
