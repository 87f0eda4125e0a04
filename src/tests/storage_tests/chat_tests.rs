// Chat summary tests

use crate::storage::{Chat, Contact};
use chrono::Utc;

#[test]
fn test_chat_creation_defaults() {
    let now = Utc::now();
    let chat = Chat::new("1", "John Doe", "Hey", now);

    assert_eq!(chat.id, "1");
    assert_eq!(chat.name, "John Doe");
    assert_eq!(chat.last_message, "Hey");
    assert_eq!(chat.last_message_time, now);
    assert_eq!(chat.unread_count, 0);
    assert!(!chat.is_online);
    assert!(chat.avatar.is_none());
    assert!(chat.last_seen.is_none());
}

#[test]
fn test_chat_mark_read_clears_unread() {
    let mut chat = Chat::new("1", "John Doe", "Hey", Utc::now()).with_unread(2);
    assert!(chat.has_unread());

    chat.mark_read();

    assert!(!chat.has_unread());
    assert_eq!(chat.unread_count, 0);
}

#[test]
fn test_chat_from_contact_reuses_identity() {
    let contact = Contact::new("3", "Mike Johnson", "+1234567892")
        .with_status("At work")
        .with_online(true);

    let chat = Chat::from_contact(&contact);

    assert_eq!(chat.id, "3");
    assert_eq!(chat.name, "Mike Johnson");
    assert!(chat.is_online);
    assert!(chat.last_message.is_empty());
    assert_eq!(chat.unread_count, 0);
}

#[test]
fn test_chat_with_last_seen() {
    let seen = Utc::now();
    let chat = Chat::new("2", "Sarah Wilson", "Bye", seen).with_last_seen(seen);

    assert_eq!(chat.last_seen, Some(seen));
}
