use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The two members a pair can have.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub enum FileKind {
    /// Compressed, viewable image (`.jpg`).
    Preview,
    /// Unprocessed sensor data (`.nef`).
    RawData,
}

impl FileKind {
    /// The kind of the other member of a pair.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Preview => Self::RawData,
            Self::RawData => Self::Preview,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Preview => write!(f, "Preview"),
            FileKind::RawData => write!(f, "Raw"),
        }
    }
}

/// Base filename shared by both members of a pair.
///
/// The base is compared case-sensitively; extension case never takes part.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct PairKey(Arc<str>);

impl PairKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A classified file inside the folder currently being browsed.
///
/// Entries carry only the filename; the folder is supplied by the caller on
/// every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: Arc<str>,
    pub kind: FileKind,
}

impl FileEntry {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, kind: FileKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Filename without its final extension, case preserved.
    #[must_use]
    pub fn base_name(&self) -> &str {
        Path::new(&*self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }

    /// Final extension without the dot, case preserved.
    #[must_use]
    pub fn extension(&self) -> &str {
        Path::new(&*self.name)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    #[must_use]
    pub fn pair_key(&self) -> PairKey {
        PairKey(self.base_name().into())
    }

    /// Whether `other` is the opposite member of the same pair.
    #[must_use]
    pub fn is_paired_with(&self, other: &Self) -> bool {
        self.kind.other() == other.kind && self.base_name() == other.base_name()
    }

    #[must_use]
    pub fn path_in(&self, folder: &Path) -> PathBuf {
        folder.join(&*self.name)
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
