//! Unit tests for canvas settings persistence.

use inkboard::CanvasError;
use inkboard::settings::CanvasSettings;
use inkboard::types::{Color, Tool};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = CanvasSettings {
        pan_and_zoom: true,
        tool: Tool::Bucket,
        brush_color: "#00ff00".into(),
        fill_tolerance: 12,
        ..CanvasSettings::default()
    };
    settings.save(&path).unwrap();

    let loaded = CanvasSettings::load(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.draw_options().brush_color, Color::from_rgba(0, 0xff, 0, 0xff));
    // no temp files left behind
    assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
}

#[test]
fn test_save_refuses_invalid_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = CanvasSettings {
        pinch_timeout_ms: 0,
        ..CanvasSettings::default()
    };
    assert!(matches!(settings.save(&path), Err(CanvasError::InvalidSettings(_))));
    assert!(!path.exists());
}

#[test]
fn test_load_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(CanvasSettings::load(&path), Err(CanvasError::Json(_))));
    assert_eq!(CanvasSettings::load_or_default(&path), CanvasSettings::default());
}

#[test]
fn test_load_or_default_for_missing_file() {
    let dir = tempdir().unwrap();
    let settings = CanvasSettings::load_or_default(&dir.path().join("absent.json"));
    assert_eq!(settings, CanvasSettings::default());
}

#[test]
fn test_load_rejects_non_ascii_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r##"{"brush_color": "#a\u00e9123"}"##).unwrap();
    assert!(matches!(
        CanvasSettings::load(&path),
        Err(CanvasError::InvalidColor(_))
    ));
    assert_eq!(CanvasSettings::load_or_default(&path), CanvasSettings::default());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"min_scale": -1.0}"#).unwrap();
    assert!(matches!(
        CanvasSettings::load(&path),
        Err(CanvasError::InvalidSettings(_))
    ));
}

#[test]
fn test_conversions() {
    let settings = CanvasSettings {
        min_scale: 0.5,
        max_scale: 4.0,
        pinch_timeout_ms: 300,
        ..CanvasSettings::default()
    };
    let extents = settings.scale_extents();
    assert_eq!((extents.min, extents.max), (0.5, 4.0));
    assert_eq!(settings.gesture_config().pinch_timeout.as_millis(), 300);
    assert!(!settings.draw_options().disabled);
}
