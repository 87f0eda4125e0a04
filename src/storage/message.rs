//! Message structures and delivery status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message delivery status
///
/// Set once when a message is created; nothing in the client moves a
/// message between states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Message left this client
    #[default]
    Sent,
    /// Message reached the recipient's device
    Delivered,
    /// Recipient has read the message
    Read,
}

impl DeliveryStatus {
    /// Tick marks shown next to own messages
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Sent => "✓",
            Self::Delivered | Self::Read => "✓✓",
        }
    }
}

/// Represents a message in a conversation thread
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Message ID
    pub id: String,
    /// Message text
    pub content: String,
    /// Sender identifier
    pub sender_id: String,
    /// When the message was written
    pub timestamp: DateTime<Utc>,
    /// Delivery status
    pub status: DeliveryStatus,
}

impl Message {
    /// Create a new message
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        sender_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender_id: sender_id.into(),
            timestamp,
            status,
        }
    }

    /// Fabricate a freshly typed outgoing message
    pub fn outgoing(content: impl Into<String>, sender_id: impl Into<String>) -> Self {
        Self::new(
            uuid::Uuid::new_v4().to_string(),
            content,
            sender_id,
            Utc::now(),
            DeliveryStatus::Sent,
        )
    }

    /// Whether `user_id` wrote this message
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}
