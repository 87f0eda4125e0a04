//! Chat summaries shown in the chat list

use crate::storage::contact::Contact;
use chrono::{DateTime, Utc};

/// Represents a chat conversation summary
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    /// Unique chat identifier
    pub id: String,
    /// Display name of the other party
    pub name: String,
    /// Text of the most recent message
    pub last_message: String,
    /// Time of the most recent message
    pub last_message_time: DateTime<Utc>,
    /// Optional avatar reference
    pub avatar: Option<String>,
    /// Number of unread messages
    pub unread_count: u32,
    /// Whether the other party is online
    pub is_online: bool,
    /// When the other party was last seen, if known
    pub last_seen: Option<DateTime<Utc>>,
}

impl Chat {
    /// Create a new chat with no unread messages
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        last_message: impl Into<String>,
        last_message_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_message: last_message.into(),
            last_message_time,
            avatar: None,
            unread_count: 0,
            is_online: false,
            last_seen: None,
        }
    }

    /// Create an empty chat for a contact, reusing the contact's id
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            last_message: String::new(),
            last_message_time: Utc::now(),
            avatar: contact.avatar.clone(),
            unread_count: 0,
            is_online: contact.is_online,
            last_seen: None,
        }
    }

    /// Set the unread counter
    pub fn with_unread(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }

    /// Set the online flag
    pub fn with_online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Set when the other party was last seen
    pub fn with_last_seen(mut self, last_seen: DateTime<Utc>) -> Self {
        self.last_seen = Some(last_seen);
        self
    }

    /// Whether the chat has unread messages
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    /// Mark all messages as read
    pub fn mark_read(&mut self) {
        self.unread_count = 0;
    }
}
