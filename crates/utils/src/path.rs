use std::path::Path;

/// Whether `file_name` is `<base>.<extension>` with the base matched exactly
/// and the extension matched ignoring ASCII case.
#[must_use]
pub fn is_pair_member(file_name: &str, base: &str, extension: &str) -> bool {
    let path = Path::new(file_name);
    let stem = path.file_stem().and_then(|s| s.to_str());
    let ext = path.extension().and_then(|s| s.to_str());
    match (stem, ext) {
        (Some(stem), Some(ext)) => stem == base && ext.eq_ignore_ascii_case(extension),
        _ => false,
    }
}
