//! Core types for TUI screens and navigation

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Phone-number sign-in
    Auth,
    /// Sidebar with chats/contacts plus the conversation pane
    Shell,
}

/// Sidebar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Chat list
    Chats,
    /// Contact list
    Contacts,
}

impl Tab {
    /// Get all tabs in display order
    pub fn all() -> [Self; 2] {
        [Self::Chats, Self::Contacts]
    }

    /// Get display label for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chats => "Chats",
            Self::Contacts => "Contacts",
        }
    }

    /// The other tab
    pub fn toggle(&self) -> Self {
        match self {
            Self::Chats => Self::Contacts,
            Self::Contacts => Self::Chats,
        }
    }

    /// Position in [`Tab::all`]
    pub fn index(&self) -> usize {
        match self {
            Self::Chats => 0,
            Self::Contacts => 1,
        }
    }
}

/// Pane receiving key presses in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The chat or contact list
    Sidebar,
    /// The open conversation's draft input
    Conversation,
}
