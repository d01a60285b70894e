use color_eyre::Result;
use std::sync::Arc;
use tempfile::TempDir;

use rawcull_core::{CoreError, Deleter, Scanner};
use rawcull_models::{DeletionMode, DeletionOutcome, FileEntry, FileKind};

use crate::common::{RecordingTrash, remaining, touch};

fn find(entries: &[FileEntry], name: &str) -> FileEntry {
    entries
        .iter()
        .find(|e| &*e.name == name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} not listed"))
}

#[test]
fn test_both_trashes_pair_and_rescan_is_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img001.jpg", "img001.nef"])?;

    let trash = Arc::new(RecordingTrash::default());
    let deleter = Deleter::new(trash.clone());
    let entries = Scanner::new().list(root)?;

    let outcome = deleter.delete(&find(&entries, "img001.jpg"), DeletionMode::Both, root)?;

    assert!(outcome.is_trashed());
    assert_eq!(trash.moved(), vec![root.join("img001.jpg"), root.join("img001.nef")]);
    assert!(Scanner::new().list(root)?.is_empty());
    Ok(())
}

#[test]
fn test_raw_only_without_raw_is_nothing_to_delete() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img002.jpg"])?;

    let trash = Arc::new(RecordingTrash::default());
    let deleter = Deleter::new(trash.clone());
    let entries = Scanner::new().list(root)?;

    let outcome = deleter.delete(&find(&entries, "img002.jpg"), DeletionMode::RawOnly, root)?;

    assert_eq!(outcome, DeletionOutcome::NothingToDelete(vec![root.join("img002.nef")]));
    assert!(trash.moved().is_empty());
    assert_eq!(remaining(root)?, vec!["img002.jpg"]);
    Ok(())
}

#[test]
fn test_preview_only_from_uppercase_raw_selection() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img003.JPG", "img003.NEF"])?;

    let trash = Arc::new(RecordingTrash::default());
    let deleter = Deleter::new(trash.clone());
    let entries = Scanner::new().list(root)?;

    let outcome = deleter.delete(&find(&entries, "img003.NEF"), DeletionMode::PreviewOnly, root)?;

    let trashed = outcome.paths();
    assert!(outcome.is_trashed());
    assert_eq!(trashed.len(), 1);
    let ext = trashed[0].extension().and_then(|e| e.to_str()).unwrap_or("");
    assert!(ext.eq_ignore_ascii_case("jpg"));
    assert_eq!(remaining(root)?, vec!["img003.NEF"]);
    Ok(())
}

#[test]
fn test_refused_file_is_reported_and_still_listed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img004.jpg"])?;

    let deleter = Deleter::new(Arc::new(RecordingTrash::refusing("img004.jpg")));
    let entries = Scanner::new().list(root)?;

    let err = deleter
        .delete(&find(&entries, "img004.jpg"), DeletionMode::PreviewOnly, root)
        .unwrap_err();

    match &err {
        CoreError::Deletion { path, trashed, .. } => {
            assert_eq!(path, &root.join("img004.jpg"));
            assert!(trashed.is_empty());
        }
        other => panic!("expected Deletion error, got {other:?}"),
    }
    assert!(err.to_string().contains("access is denied"));

    let rescanned = Scanner::new().list(root)?;
    assert_eq!(rescanned.len(), 1);
    assert_eq!(&*rescanned[0].name, "img004.jpg");
    Ok(())
}

#[test]
fn test_repeated_request_is_nothing_to_delete() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["DSC_0100.JPG", "DSC_0100.nef"])?;

    let deleter = Deleter::new(Arc::new(RecordingTrash::default()));
    let entry = FileEntry::new("DSC_0100.JPG", FileKind::Preview);

    assert!(deleter.delete(&entry, DeletionMode::Both, root)?.is_trashed());
    let second = deleter.delete(&entry, DeletionMode::Both, root)?;

    assert_eq!(
        second,
        DeletionOutcome::NothingToDelete(vec![root.join("DSC_0100.JPG"), root.join("DSC_0100.nef")])
    );
    Ok(())
}

#[test]
fn test_other_pairs_are_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(
        root,
        &["img010.jpg", "img010.nef", "img011.jpg", "img011.nef", "img0101.nef"],
    )?;

    let deleter = Deleter::new(Arc::new(RecordingTrash::default()));
    let entry = FileEntry::new("img010.jpg", FileKind::Preview);
    deleter.delete(&entry, DeletionMode::Both, root)?;

    let left = remaining(root)?;
    assert!(!left.contains(&"img010.jpg".to_string()));
    assert!(left.contains(&"img011.jpg".to_string()));
    assert!(left.contains(&"img011.nef".to_string()));
    assert!(left.contains(&"img0101.nef".to_string()));
    assert_eq!(left.len(), 3);
    Ok(())
}
