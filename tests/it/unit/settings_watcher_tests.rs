//! Unit tests for settings_watcher module.

use inkboard::settings_watcher::{SettingsWatcher, default_settings_path};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    assert_eq!(watcher.path(), settings_path.as_path());
}

#[test]
fn test_watcher_on_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("missing").join("settings.json");
    assert!(SettingsWatcher::new(settings_path).is_err());
}

#[test]
fn test_default_path_ends_in_app_dir() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("inkboard/settings.json"));
    }
}

/// File system events are timing- and platform-dependent; this only checks
/// that polling after a write does not block or panic.
#[test]
#[ignore]
fn test_poll_after_modification() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    fs::write(&settings_path, r#"{"pan_and_zoom": true}"#).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(200));
    let _event = watcher.poll();
}
