//! App creation and session restore tests

use crate::storage::{Session, Settings};
use crate::tests::support::{create_signed_in_app, create_test_app, BrokenStore, ImmediateBackend};
use crate::tui::{App, Focus, Screen, Tab};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_app_without_session_starts_signed_out() {
    let (app, _store) = create_test_app();

    assert_eq!(app.current_screen, Screen::Auth);
    assert!(app.session.is_none());
    assert!(!app.should_quit);
    assert!(app.notification.is_none());
    assert!(!app.is_auth_pending());
}

#[test]
fn test_app_with_session_starts_in_shell() {
    let (app, _store) = create_signed_in_app();

    assert_eq!(app.current_screen, Screen::Shell);
    assert_eq!(app.session.as_ref().unwrap().phone, "+1234567890");
    assert!(app.selected_chat_id.is_none(), "No chat is open on start-up");
    assert_eq!(app.selected_tab, Tab::Chats);
    assert_eq!(app.focus, Focus::Sidebar);
    assert!(app.chat_window_screen.is_none());
}

#[test]
fn test_app_loads_mock_tables() {
    let (app, _store) = create_signed_in_app();

    assert_eq!(app.chats.len(), 2);
    assert_eq!(app.contacts.len(), 3);
}

#[test]
fn test_unreadable_store_starts_signed_out() {
    let app = App::new(
        Settings::default(),
        Box::new(BrokenStore),
        Arc::new(ImmediateBackend),
    );

    assert_eq!(app.current_screen, Screen::Auth);
    assert!(app.session.is_none());
}

#[test]
fn test_from_settings_restores_file_session() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("talkhub_user.json"),
        serde_json::to_string(&Session::new("+15550001", "demo-user")).unwrap(),
    )
    .unwrap();
    let settings = Settings {
        data_dir: temp_dir.path().to_path_buf(),
        ..Settings::default()
    };

    let app = App::from_settings(settings);

    assert_eq!(app.current_screen, Screen::Shell);
    assert_eq!(app.session.unwrap().phone, "+15550001");
}

#[test]
fn test_from_settings_corrupt_session_starts_signed_out() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("talkhub_user.json"), "garbage").unwrap();
    let settings = Settings {
        data_dir: temp_dir.path().to_path_buf(),
        ..Settings::default()
    };

    let app = App::from_settings(settings);

    assert_eq!(app.current_screen, Screen::Auth);
}
