// Message and delivery status tests

use crate::storage::{DeliveryStatus, Message};

#[test]
fn test_outgoing_message_is_sent_by_sender() {
    let message = Message::outgoing("Hello", "current-user");

    assert_eq!(message.content, "Hello");
    assert_eq!(message.sender_id, "current-user");
    assert_eq!(message.status, DeliveryStatus::Sent);
    assert!(message.is_from("current-user"));
    assert!(!message.is_from("2"));
    assert!(!message.id.is_empty());
}

#[test]
fn test_outgoing_messages_get_unique_ids() {
    let a = Message::outgoing("a", "me");
    let b = Message::outgoing("a", "me");

    assert_ne!(a.id, b.id);
}

#[test]
fn test_status_indicators() {
    assert_eq!(DeliveryStatus::Sent.indicator(), "✓");
    assert_eq!(DeliveryStatus::Delivered.indicator(), "✓✓");
    assert_eq!(DeliveryStatus::Read.indicator(), "✓✓");
    assert_eq!(DeliveryStatus::default(), DeliveryStatus::Sent);
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&DeliveryStatus::Read).unwrap(), "\"read\"");

    let parsed: DeliveryStatus = serde_json::from_str("\"delivered\"").unwrap();
    assert_eq!(parsed, DeliveryStatus::Delivered);
}
