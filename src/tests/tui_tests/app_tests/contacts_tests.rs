//! Contact search, add contact and start chat tests

use crate::tests::support::create_signed_in_app;
use crate::tui::{Focus, Tab};

#[test]
fn test_visible_contacts_follow_search() {
    let (mut app, _store) = create_signed_in_app();
    app.select_tab(Tab::Contacts);

    for c in "sar".chars() {
        app.contact_list_screen.add_char(c);
    }
    let names: Vec<&str> = app.visible_contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Wilson"]);

    app.contact_list_screen.clear_search();
    assert_eq!(app.visible_contacts().len(), 3);
}

#[test]
fn test_contact_navigation_is_bounded_by_filter() {
    let (mut app, _store) = create_signed_in_app();
    for c in "john".chars() {
        app.contact_list_screen.add_char(c);
    }

    // John Doe and Mike Johnson
    app.next_contact();
    assert_eq!(app.contact_list_screen.selected_index, 1);
    app.next_contact();
    assert_eq!(app.contact_list_screen.selected_index, 0);
}

#[test]
fn test_start_chat_with_existing_chat() {
    let (mut app, _store) = create_signed_in_app();
    app.select_tab(Tab::Contacts);

    assert!(app.start_chat("2"));

    assert_eq!(app.selected_tab, Tab::Chats);
    assert_eq!(app.selected_chat_id.as_deref(), Some("2"));
    assert_eq!(app.focus, Focus::Conversation);
    assert_eq!(app.chats.len(), 2, "No duplicate chat");
}

#[test]
fn test_start_chat_creates_missing_chat() {
    let (mut app, _store) = create_signed_in_app();

    assert!(app.start_chat("3"));

    assert_eq!(app.chats.len(), 3);
    assert_eq!(app.selected_chat().unwrap().name, "Mike Johnson");
    assert!(app.chat_window_screen.as_ref().unwrap().messages.is_empty());
}

#[test]
fn test_start_chat_with_unknown_contact() {
    let (mut app, _store) = create_signed_in_app();
    app.select_tab(Tab::Contacts);

    assert!(!app.start_chat("missing"));

    assert!(app.selected_chat_id.is_none());
    assert_eq!(app.selected_tab, Tab::Contacts);
}

#[test]
fn test_start_chat_with_highlighted_contact() {
    let (mut app, _store) = create_signed_in_app();
    for c in "mike".chars() {
        app.contact_list_screen.add_char(c);
    }

    app.start_chat_with_highlighted_contact();

    assert_eq!(app.selected_chat_id.as_deref(), Some("3"));
}

#[test]
fn test_add_contact() {
    let (mut app, _store) = create_signed_in_app();
    app.contact_list_screen.open_add_form();
    {
        let form = app.contact_list_screen.add_form.as_mut().unwrap();
        for c in "+15550009".chars() {
            form.add_char(c);
        }
        form.next_field();
        for c in "Ann Lee".chars() {
            form.add_char(c);
        }
    }

    app.submit_add_contact();

    assert!(!app.contact_list_screen.is_adding());
    assert_eq!(app.contacts.len(), 4);
    let added = app.contacts.last().unwrap();
    assert_eq!(added.name, "Ann Lee");
    assert_eq!(added.phone_number, "+15550009");
    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.title, "Contact added!");
    assert_eq!(notification.description, "Ann Lee has been added to your contacts.");
}

#[test]
fn test_incomplete_add_contact_stays_open() {
    let (mut app, _store) = create_signed_in_app();
    app.contact_list_screen.open_add_form();
    app.contact_list_screen.add_form.as_mut().unwrap().add_char('5');

    app.submit_add_contact();

    assert!(app.contact_list_screen.is_adding());
    assert_eq!(app.contacts.len(), 3);
    assert!(app.notification.is_none());
}

#[test]
fn test_contact_added_notification_is_dropped_on_next_key() {
    let (mut app, _store) = create_signed_in_app();
    app.contact_list_screen.open_add_form();
    {
        let form = app.contact_list_screen.add_form.as_mut().unwrap();
        form.phone = "+15550009".to_string();
        form.name = "Ann".to_string();
    }
    app.submit_add_contact();
    assert!(app.notification.is_some());

    app.on_key_press();

    assert!(app.notification.is_none());
}
