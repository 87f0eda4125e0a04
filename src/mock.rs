//! Mock tables standing in for a chat server
//!
//! Times are relative to the moment a table is built, so the chat list
//! always reads "5 minutes ago" on start-up.

use crate::storage::{Chat, Contact, DeliveryStatus, Message};
use chrono::{Duration, Utc};

/// Chat summaries shown in the chat list
pub fn chats() -> Vec<Chat> {
    let now = Utc::now();
    vec![
        Chat::new("1", "John Doe", "Hey, how are you doing?", now - Duration::minutes(5))
            .with_unread(2)
            .with_online(true),
        Chat::new("2", "Sarah Wilson", "See you tomorrow!", now - Duration::hours(2))
            .with_online(false)
            .with_last_seen(now - Duration::minutes(30)),
    ]
}

/// Address book entries
pub fn contacts() -> Vec<Contact> {
    vec![
        Contact::new("1", "John Doe", "+1234567890")
            .with_status("Available")
            .with_online(true),
        Contact::new("2", "Sarah Wilson", "+1234567891")
            .with_status("Busy")
            .with_online(false),
        Contact::new("3", "Mike Johnson", "+1234567892")
            .with_status("At work")
            .with_online(true),
    ]
}

/// Static conversation thread, with `current_user_id` as the local side
pub fn messages(current_user_id: &str) -> Vec<Message> {
    let now = Utc::now();
    vec![
        Message::new("1", "Hello there!", "2", now - Duration::minutes(10), DeliveryStatus::Read),
        Message::new(
            "2",
            "Hey! How are you doing?",
            current_user_id,
            now - Duration::minutes(8),
            DeliveryStatus::Delivered,
        ),
        Message::new(
            "3",
            "I'm doing great, thanks for asking! What about you?",
            "2",
            now - Duration::minutes(5),
            DeliveryStatus::Read,
        ),
        Message::new(
            "4",
            "Same here! Working on some exciting projects.",
            current_user_id,
            now - Duration::minutes(2),
            DeliveryStatus::Sent,
        ),
    ]
}

/// Thread for the chat with `chat_id`
///
/// Every chat currently shares the same static thread; new chats started
/// from a contact begin empty.
pub fn thread_for(chat_id: &str, current_user_id: &str) -> Vec<Message> {
    if chats().iter().any(|c| c.id == chat_id) {
        messages(current_user_id)
    } else {
        Vec::new()
    }
}
