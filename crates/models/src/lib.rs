mod deletion;
mod file_entry;
mod preview;

pub use deletion::{DeletionMode, DeletionOutcome};
pub use file_entry::{FileEntry, FileKind, PairKey};
pub use preview::{Orientation, PreviewInfo};
