use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::FileKind;

/// Which member(s) of a pair a deletion request targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub enum DeletionMode {
    Both,
    PreviewOnly,
    RawOnly,
}

impl DeletionMode {
    /// The single kind this mode is restricted to, or `None` for `Both`.
    #[must_use]
    pub const fn only_kind(self) -> Option<FileKind> {
        match self {
            Self::Both => None,
            Self::PreviewOnly => Some(FileKind::Preview),
            Self::RawOnly => Some(FileKind::RawData),
        }
    }
}

impl fmt::Display for DeletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionMode::Both => write!(f, "JPG + NEF"),
            DeletionMode::PreviewOnly => write!(f, "JPG only"),
            DeletionMode::RawOnly => write!(f, "NEF only"),
        }
    }
}

/// Result of a deletion request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// At least one target was moved to the trash; holds the moved paths.
    Trashed(Vec<PathBuf>),
    /// None of the targets existed; holds the paths that were looked for.
    NothingToDelete(Vec<PathBuf>),
}

impl DeletionOutcome {
    #[must_use]
    pub const fn is_trashed(&self) -> bool {
        matches!(self, Self::Trashed(_))
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Self::Trashed(paths) | Self::NothingToDelete(paths) => paths,
        }
    }
}
