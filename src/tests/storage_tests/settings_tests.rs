// Settings tests - defaults, loading, validation

use crate::storage::Settings;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.data_dir, PathBuf::from("./app_data"));
    assert_eq!(settings.session_key, "talkhub_user");
    assert_eq!(settings.send_code_delay(), Duration::from_millis(1000));
    assert_eq!(settings.verify_code_delay(), Duration::from_millis(1000));
    assert_eq!(settings.current_user_id, "current-user");
    assert_eq!(settings.demo_user_id, "demo-user");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_load_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let settings = Settings::load(temp_dir.path().join("nope.json")).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_load_empty_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "").unwrap();

    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[test]
fn test_settings_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "send_code_delay_ms": 10 }"#).unwrap();

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.send_code_delay_ms, 10);
    assert_eq!(settings.verify_code_delay_ms, 1000);
    assert_eq!(settings.session_key, "talkhub_user");
}

#[test]
fn test_settings_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = Settings::default_path(temp_dir.path().join("data"));
    let settings = Settings {
        session_key: "other_user".to_string(),
        verify_code_delay_ms: 0,
        ..Settings::default()
    };

    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn test_settings_invalid_json_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse settings"));
}

#[test]
fn test_settings_rejects_path_like_session_key() {
    for key in ["", "  ", "../escape", "a/b", "user.json"] {
        let settings = Settings {
            session_key: key.to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err(), "'{}' should be rejected", key);
    }
}

#[test]
fn test_settings_load_validates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "current_user_id": "" }"#).unwrap();

    assert!(Settings::load(&path).is_err());
}
