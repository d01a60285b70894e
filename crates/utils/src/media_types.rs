use rawcull_models::{FileEntry, FileKind};
use regex::Regex;

pub const PREVIEW_EXTENSION: &str = "jpg";
pub const RAW_EXTENSION: &str = "nef";

#[allow(clippy::expect_used)]
/// Filenames the folder scanner lists. `.jpeg` is not among them.
pub static PAIR_EXTENSIONS: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|nef)$").expect("Failed to compile PAIR_EXTENSIONS regex")
});

/// Kind of a pair member by extension (without the dot, any case).
#[must_use]
pub fn determine_file_kind(extension: &str) -> Option<FileKind> {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some(FileKind::Preview),
        "nef" => Some(FileKind::RawData),
        _ => None,
    }
}

/// Extension the other member of the pair is looked up by.
///
/// Anything that is not a preview extension pairs with a preview.
#[must_use]
pub fn counterpart_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => RAW_EXTENSION,
        _ => PREVIEW_EXTENSION,
    }
}

/// Builds an entry for a scanned filename, or `None` when the scanner skips it.
#[must_use]
pub fn classify_file_name(name: &str) -> Option<FileEntry> {
    if !PAIR_EXTENSIONS.is_match(name) {
        return None;
    }
    let extension = std::path::Path::new(name).extension()?.to_str()?;
    determine_file_kind(extension).map(|kind| FileEntry::new(name, kind))
}
