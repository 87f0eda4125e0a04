//! Data model and local storage
//!
//! This module holds the records the client works with and the one thing it
//! persists:
//! - `chat` - Chat summaries for the chat list
//! - `contact` - Address book entries and search filtering
//! - `message` - Conversation messages and delivery status
//! - `session` - The stored sign-in session and its store capability
//! - `settings` - Application settings and configuration

pub mod chat;
pub mod contact;
pub mod message;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use chat::Chat;
pub use contact::{filter_contacts, Contact};
pub use message::{DeliveryStatus, Message};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use settings::Settings;
