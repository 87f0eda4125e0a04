//! One-time user-visible notifications

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Confirmation of something that worked
    Info,
    /// Something failed
    Error,
}

/// A title/description toast shown once by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Detail line
    pub description: String,
    /// Info or error styling
    pub kind: NotificationKind,
}

impl Notification {
    /// Create an informational notification
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Info,
        }
    }

    /// Create a generic error notification carrying `message`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: message.into(),
            kind: NotificationKind::Error,
        }
    }

    /// Whether this reports a failure
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}
