//! Contact entries and search filtering

/// Represents an address book entry
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Unique contact identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Phone number as entered (e.g., "+1234567890")
    pub phone_number: String,
    /// Optional avatar reference
    pub avatar: Option<String>,
    /// Optional status text ("Available", "Busy", ...)
    pub status_message: Option<String>,
    /// Whether the contact is online
    pub is_online: bool,
}

impl Contact {
    /// Create a new offline contact without status text
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
            avatar: None,
            status_message: None,
            is_online: false,
        }
    }

    /// Create a contact from the add-contact form with a fresh random id
    pub fn new_local(name: &str, phone_number: &str) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), name, phone_number)
    }

    /// Set the status text
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status_message = Some(status.into());
        self
    }

    /// Set the online flag
    pub fn with_online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Secondary line shown under the name: status text, or the phone number
    pub fn subtitle(&self) -> &str {
        match self.status_message.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => &self.phone_number,
        }
    }

    /// Whether the contact matches a search query
    ///
    /// Name matching ignores case, phone matching is a plain substring test.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone_number.contains(query)
    }
}

/// Return the contacts matching `query`, in their original order
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts.iter().filter(|c| c.matches(query)).collect()
}
