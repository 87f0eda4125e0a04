//! Screen state structures for TUI

use crate::storage::Message;

/// Chat list state
#[derive(Debug, Default)]
pub struct ChatListScreen {
    /// Highlighted chat index
    pub selected_index: usize,
}

impl ChatListScreen {
    /// Create new chat list screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to next chat
    pub fn next(&mut self, chat_count: usize) {
        if chat_count > 0 {
            self.selected_index = (self.selected_index + 1) % chat_count;
        }
    }

    /// Move to previous chat
    pub fn previous(&mut self, chat_count: usize) {
        if chat_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = chat_count - 1;
            }
        }
    }
}

/// Field of the add-contact form that receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddContactField {
    /// Phone number
    Phone,
    /// Contact name
    Name,
}

/// Add-contact dialog state
#[derive(Debug)]
pub struct AddContactForm {
    /// Phone number input
    pub phone: String,
    /// Name input
    pub name: String,
    /// Field being edited
    pub field: AddContactField,
}

impl AddContactForm {
    /// Create an empty form focused on the phone field
    pub fn new() -> Self {
        Self {
            phone: String::new(),
            name: String::new(),
            field: AddContactField::Phone,
        }
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        match self.field {
            AddContactField::Phone => self.phone.push(c),
            AddContactField::Name => self.name.push(c),
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        match self.field {
            AddContactField::Phone => self.phone.pop(),
            AddContactField::Name => self.name.pop(),
        };
    }

    /// Switch to the other field
    pub fn next_field(&mut self) {
        self.field = match self.field {
            AddContactField::Phone => AddContactField::Name,
            AddContactField::Name => AddContactField::Phone,
        };
    }

    /// Validate the form; returns trimmed `(phone, name)` when both are set
    ///
    /// On success the inputs are cleared.
    pub fn submit(&mut self) -> Option<(String, String)> {
        let phone = self.phone.trim();
        let name = self.name.trim();
        if phone.is_empty() || name.is_empty() {
            return None;
        }
        let entry = (phone.to_string(), name.to_string());
        self.phone.clear();
        self.name.clear();
        self.field = AddContactField::Phone;
        Some(entry)
    }
}

impl Default for AddContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact list state
#[derive(Debug, Default)]
pub struct ContactListScreen {
    /// Search text
    pub search_query: String,
    /// Highlighted index within the filtered list
    pub selected_index: usize,
    /// Add-contact dialog (when open)
    pub add_form: Option<AddContactForm>,
}

impl ContactListScreen {
    /// Create new contact list screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Add character to the search text
    pub fn add_char(&mut self, c: char) {
        self.search_query.push(c);
        self.selected_index = 0;
    }

    /// Remove last character from the search text
    pub fn backspace(&mut self) {
        self.search_query.pop();
        self.selected_index = 0;
    }

    /// Clear the search text
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.selected_index = 0;
    }

    /// Move to next visible contact
    pub fn next(&mut self, visible_count: usize) {
        if visible_count > 0 {
            self.selected_index = (self.selected_index + 1) % visible_count;
        }
    }

    /// Move to previous visible contact
    pub fn previous(&mut self, visible_count: usize) {
        if visible_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = visible_count - 1;
            }
        }
    }

    /// Open the add-contact dialog
    pub fn open_add_form(&mut self) {
        self.add_form = Some(AddContactForm::new());
    }

    /// Close the add-contact dialog, dropping its inputs
    pub fn close_add_form(&mut self) {
        self.add_form = None;
    }

    /// Whether the add-contact dialog is open
    pub fn is_adding(&self) -> bool {
        self.add_form.is_some()
    }
}

/// Conversation pane state
#[derive(Debug)]
pub struct ChatWindowScreen {
    /// Id of the open chat
    pub chat_id: String,
    /// Thread shown in the pane, including locally typed messages
    pub messages: Vec<Message>,
    /// Unsent draft text
    pub draft: String,
    /// Number of newest messages scrolled out of view (0 = pinned to bottom)
    pub scroll_offset: usize,
}

impl ChatWindowScreen {
    /// Create a pane for `chat_id` showing `messages`
    pub fn new(chat_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            chat_id: chat_id.into(),
            messages,
            draft: String::new(),
            scroll_offset: 0,
        }
    }

    /// Add character to the draft
    pub fn add_char(&mut self, c: char) {
        self.draft.push(c);
    }

    /// Remove last character from the draft
    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Whether the draft can be sent
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Turn the draft into an outgoing message appended to the thread
    ///
    /// Returns `None` for a blank draft. The message is only kept in this
    /// pane; nothing is transmitted.
    pub fn send(&mut self, sender_id: &str) -> Option<Message> {
        if !self.can_send() {
            return None;
        }
        let message = Message::outgoing(self.draft.trim(), sender_id);
        self.messages.push(message.clone());
        self.draft.clear();
        self.scroll_offset = 0;
        Some(message)
    }

    /// Scroll towards older messages
    pub fn scroll_up(&mut self) {
        if self.scroll_offset + 1 < self.messages.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll towards newer messages
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Messages to show in a pane `height` rows tall, oldest first
    pub fn visible_messages(&self, height: usize) -> &[Message] {
        let end = self.messages.len().saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(height);
        &self.messages[start..end]
    }
}
