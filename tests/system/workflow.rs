use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use rawcull::{App, AppState};
use rawcull_config::Settings;
use rawcull_core::Deleter;
use rawcull_models::DeletionMode;

use crate::common::{RecordingTrash, remaining, touch};

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn app_in(folder: &Path, confirm: bool, trash: Arc<RecordingTrash>) -> App {
    let settings = Settings {
        start_folder: Some(folder.to_path_buf()),
        confirm_deletions: confirm,
        show_preview_metadata: false,
        ..Default::default()
    };
    App::with_deleter(settings, Deleter::new(trash))
}

/// Moves the highlight onto `name` with the arrow keys.
fn select_name(app: &mut App, name: &str) {
    press(app, KeyCode::Home);
    for _ in 0..app.entries.len() {
        if app.selected_entry().is_some_and(|e| &*e.name == name) {
            return;
        }
        press(app, KeyCode::Down);
    }
    assert!(
        app.selected_entry().is_some_and(|e| &*e.name == name),
        "{name} not in list"
    );
}

#[test]
fn test_confirmed_pair_deletion_empties_folder() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img001.jpg", "img001.nef"])?;
    let trash = Arc::new(RecordingTrash::default());
    let mut app = app_in(root, true, trash.clone());

    select_name(&mut app, "img001.jpg");
    press(&mut app, KeyCode::Char('b'));

    assert_eq!(app.state, AppState::Confirm(DeletionMode::Both));
    assert_eq!(app.pending_targets, vec![root.join("img001.jpg"), root.join("img001.nef")]);
    assert!(trash.moved().is_empty());

    press(&mut app, KeyCode::Char('y'));

    assert_eq!(app.state, AppState::Browse);
    assert_eq!(
        app.success_message.as_deref(),
        Some("Selected files have been moved to the recycle bin.")
    );
    assert_eq!(trash.moved().len(), 2);
    assert!(app.entries.is_empty());
    assert_eq!(app.selected_index(), None);
    assert!(app.preview.is_none());
    Ok(())
}

#[test]
fn test_cancelled_deletion_keeps_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img001.jpg", "img001.nef"])?;
    let trash = Arc::new(RecordingTrash::default());
    let mut app = app_in(root, true, trash.clone());

    press(&mut app, KeyCode::Char('p'));
    assert!(matches!(app.state, AppState::Confirm(DeletionMode::PreviewOnly)));

    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.state, AppState::Browse);
    assert!(app.pending_targets.is_empty());
    assert!(trash.moved().is_empty());
    assert_eq!(remaining(root)?, vec!["img001.jpg", "img001.nef"]);
    Ok(())
}

#[test]
fn test_raw_only_without_raw_reports_nothing_to_delete() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img002.jpg"])?;
    let mut app = app_in(root, false, Arc::new(RecordingTrash::default()));

    press(&mut app, KeyCode::Char('n'));

    let info = app.info_message.clone().unwrap_or_default();
    assert!(info.starts_with("Nothing to delete: "), "got {info:?}");
    assert!(info.contains("img002.nef"));
    assert!(app.error_message.is_none());
    assert!(app.success_message.is_none());
    assert_eq!(app.entries.len(), 1);
    Ok(())
}

#[test]
fn test_preview_only_from_raw_selection() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img003.JPG", "img003.NEF"])?;
    let mut app = app_in(root, false, Arc::new(RecordingTrash::default()));

    select_name(&mut app, "img003.NEF");
    press(&mut app, KeyCode::Char('p'));

    assert!(app.success_message.is_some());
    assert_eq!(remaining(root)?, vec!["img003.NEF"]);
    assert_eq!(app.entries.len(), 1);
    assert_eq!(app.selected_entry().map(|e| e.name.to_string()), Some("img003.NEF".to_string()));
    Ok(())
}

#[test]
fn test_refused_deletion_shows_error_and_keeps_listing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img004.jpg"])?;
    let mut app = app_in(root, false, Arc::new(RecordingTrash::refusing("img004.jpg")));

    press(&mut app, KeyCode::Char('b'));

    let error = app.error_message.clone().unwrap_or_default();
    assert!(error.starts_with("Failed to delete the file: "), "got {error:?}");
    assert!(error.contains("access is denied"));
    assert_eq!(app.entries.len(), 1);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.entries.len(), 1);
    assert!(app.error_message.is_none());
    Ok(())
}

#[test]
fn test_partial_pair_deletion_rescans_and_reports_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img008.jpg", "img008.nef"])?;
    let trash = Arc::new(RecordingTrash::refusing("img008.nef"));
    let mut app = app_in(root, false, trash.clone());
    assert_eq!(app.entries.len(), 2);

    select_name(&mut app, "img008.jpg");
    press(&mut app, KeyCode::Char('b'));

    let error = app.error_message.clone().unwrap_or_default();
    assert!(error.starts_with("Failed to delete the file: "), "got {error:?}");
    assert!(error.contains("img008.nef"));
    assert!(app.success_message.is_none());
    assert_eq!(trash.moved(), vec![root.join("img008.jpg")]);
    assert_eq!(app.entries.len(), 1);
    assert_eq!(&*app.entries[0].name, "img008.nef");
    assert_eq!(app.selected_index(), Some(0));
    Ok(())
}

#[test]
fn test_selection_clamps_after_deleting_last_entry() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["a.jpg", "b.jpg", "c.jpg"])?;
    let mut app = app_in(root, false, Arc::new(RecordingTrash::default()));

    press(&mut app, KeyCode::End);
    assert_eq!(app.selected_index(), Some(2));

    press(&mut app, KeyCode::Char('p'));

    assert_eq!(app.entries.len(), 2);
    assert_eq!(app.selected_index(), Some(1));
    assert!(app.preview.is_some());
    Ok(())
}

#[test]
fn test_delete_with_empty_folder_reports_no_selection() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut app = app_in(temp_dir.path(), true, Arc::new(RecordingTrash::default()));

    press(&mut app, KeyCode::Char('b'));

    assert_eq!(app.error_message.as_deref(), Some("No file selected."));
    assert_eq!(app.state, AppState::Browse);
    Ok(())
}

#[test]
fn test_open_folder_prompt() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img005.jpg", "img005.nef"])?;
    let mut app = App::with_deleter(
        Settings::default(),
        Deleter::new(Arc::new(RecordingTrash::default())),
    );
    assert!(app.folder.is_none());

    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.state, AppState::OpenFolder);
    type_text(&mut app, &root.display().to_string());
    // Letters typed into the prompt are not shortcuts.
    assert_eq!(app.state, AppState::OpenFolder);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state, AppState::Browse);
    assert_eq!(app.folder.as_deref(), Some(root));
    assert_eq!(app.entries.len(), 2);
    assert_eq!(app.selected_index(), Some(0));
    Ok(())
}

#[test]
fn test_open_folder_rejects_missing_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut app = app_in(temp_dir.path(), true, Arc::new(RecordingTrash::default()));

    press(&mut app, KeyCode::Char('o'));
    type_text(&mut app, "/missing");
    press(&mut app, KeyCode::Enter);

    assert!(app.error_message.is_some());
    assert_eq!(app.folder.as_deref(), Some(temp_dir.path()));
    Ok(())
}

#[test]
fn test_help_overlay_swallows_next_key() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img006.jpg"])?;
    let trash = Arc::new(RecordingTrash::default());
    let mut app = app_in(root, false, trash.clone());

    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    press(&mut app, KeyCode::Char('b'));
    assert!(!app.show_help);
    assert!(trash.moved().is_empty());
    Ok(())
}

#[test]
fn test_quit_keys() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    touch(root, &["img007.jpg"])?;
    let mut app = app_in(root, true, Arc::new(RecordingTrash::default()));

    press(&mut app, KeyCode::Char('b'));
    assert!(matches!(app.state, AppState::Confirm(_)));
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    let mut app = app_in(root, true, Arc::new(RecordingTrash::default()));
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
    Ok(())
}
