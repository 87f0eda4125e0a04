//! Draft sending tests

use crate::tests::support::create_signed_in_app;

#[test]
fn test_send_message_appends_to_thread() {
    let (mut app, _store) = create_signed_in_app();
    app.select_chat("1");
    for c in "On my way".chars() {
        app.chat_window_screen.as_mut().unwrap().add_char(c);
    }

    app.send_message();

    let window = app.chat_window_screen.as_ref().unwrap();
    assert_eq!(window.messages.len(), 5);
    let sent = window.messages.last().unwrap();
    assert_eq!(sent.content, "On my way");
    assert!(sent.is_from(&app.settings.current_user_id));
    assert!(window.draft.is_empty());

    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.title, "Message sent!");
    assert_eq!(notification.description, "Your message has been delivered.");
}

#[test]
fn test_blank_draft_is_not_sent() {
    let (mut app, _store) = create_signed_in_app();
    app.select_chat("1");
    app.chat_window_screen.as_mut().unwrap().add_char(' ');

    app.send_message();

    assert_eq!(app.chat_window_screen.as_ref().unwrap().messages.len(), 4);
    assert!(app.notification.is_none());
}

#[test]
fn test_send_without_open_chat_is_noop() {
    let (mut app, _store) = create_signed_in_app();

    app.send_message();

    assert!(app.notification.is_none());
}

#[test]
fn test_sent_message_does_not_change_chat_summary() {
    let (mut app, _store) = create_signed_in_app();
    app.select_chat("2");
    for c in "bye".chars() {
        app.chat_window_screen.as_mut().unwrap().add_char(c);
    }

    app.send_message();

    assert_eq!(app.selected_chat().unwrap().last_message, "See you tomorrow!");
}

#[test]
fn test_sent_notification_is_dropped_on_next_key() {
    let (mut app, _store) = create_signed_in_app();
    app.select_chat("1");
    for c in "hi".chars() {
        app.chat_window_screen.as_mut().unwrap().add_char(c);
    }
    app.send_message();
    assert_eq!(app.notification.as_ref().unwrap().title, "Message sent!");

    app.on_key_press();

    assert!(app.notification.is_none());
}
