//! Main TUI application state and logic

use crate::auth::{block_on_backend, AuthBackend, AuthFlow, SimulatedAuthBackend};
use crate::mock;
use crate::notification::Notification;
use crate::storage::{Chat, Contact, FileSessionStore, Session, SessionStore, Settings, filter_contacts};
use crate::tui::screens::*;
use crate::tui::types::{Focus, Screen, Tab};
use crate::{Error, Result};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Background auth request in flight
pub enum AuthTask {
    /// Waiting for a verification code to be sent
    SendCode(JoinHandle<Result<()>>),
    /// Waiting for a code to be verified
    Verify(JoinHandle<Result<Session>>),
}

impl AuthTask {
    fn is_finished(&self) -> bool {
        match self {
            Self::SendCode(handle) => handle.is_finished(),
            Self::Verify(handle) => handle.is_finished(),
        }
    }
}

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Should quit
    pub should_quit: bool,
    /// Loaded settings
    pub settings: Settings,
    /// Signed-in session, if any
    pub session: Option<Session>,
    /// Sign-in flow state
    pub auth: AuthFlow,
    /// Chat table
    pub chats: Vec<Chat>,
    /// Contact table
    pub contacts: Vec<Contact>,
    /// Id of the open chat (`None` shows the placeholder)
    pub selected_chat_id: Option<String>,
    /// Active sidebar tab
    pub selected_tab: Tab,
    /// Pane receiving key presses
    pub focus: Focus,
    /// Chat list state
    pub chat_list_screen: ChatListScreen,
    /// Contact list state
    pub contact_list_screen: ContactListScreen,
    /// Conversation pane (when a chat is open)
    pub chat_window_screen: Option<ChatWindowScreen>,
    /// One-time notification, dropped on the next key press
    pub notification: Option<Notification>,
    /// Background auth request handle
    pub auth_task: Option<AuthTask>,
    backend: Arc<dyn AuthBackend>,
    session_store: Box<dyn SessionStore>,
}

impl App {
    /// Create new application with injected capabilities
    ///
    /// Reads the session store once: a stored session opens the chat shell,
    /// anything else (including an unreadable store) opens the sign-in flow.
    pub fn new(
        settings: Settings,
        session_store: Box<dyn SessionStore>,
        backend: Arc<dyn AuthBackend>,
    ) -> Self {
        let session = match session_store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session: {}", e);
                None
            }
        };

        let current_screen = if session.is_some() {
            Screen::Shell
        } else {
            Screen::Auth
        };

        Self {
            current_screen,
            should_quit: false,
            settings,
            session,
            auth: AuthFlow::new(),
            chats: mock::chats(),
            contacts: mock::contacts(),
            selected_chat_id: None,
            selected_tab: Tab::Chats,
            focus: Focus::Sidebar,
            chat_list_screen: ChatListScreen::new(),
            contact_list_screen: ContactListScreen::new(),
            chat_window_screen: None,
            notification: None,
            auth_task: None,
            backend,
            session_store,
        }
    }

    /// Create new application with the file session store and the simulated backend
    pub fn from_settings(settings: Settings) -> Self {
        let store = FileSessionStore::new(&settings.data_dir, &settings.session_key);
        let backend = SimulatedAuthBackend::from_settings(&settings);
        Self::new(settings, Box::new(store), Arc::new(backend))
    }

    /// Show a notification, replacing the current one
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the current notification
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Bookkeeping run before any key press is handled
    ///
    /// Notifications are shown once, so the next key drops them.
    pub fn on_key_press(&mut self) {
        self.dismiss_notification();
    }

    /// Submit the phone form; the code request runs in the background
    pub fn submit_phone(&mut self) {
        if self.auth_task.is_some() {
            return;
        }
        let Some(phone) = self.auth.begin_send_code() else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let handle = std::thread::spawn(move || {
            block_on_backend(async move { backend.send_code(&phone).await })
        });
        self.auth_task = Some(AuthTask::SendCode(handle));
    }

    /// Submit the code form; verification runs in the background
    pub fn submit_code(&mut self) {
        if self.auth_task.is_some() {
            return;
        }
        let Some((phone, code)) = self.auth.begin_verify() else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let handle = std::thread::spawn(move || {
            block_on_backend(async move { backend.verify_code(&phone, &code).await })
        });
        self.auth_task = Some(AuthTask::Verify(handle));
    }

    /// Return from the code step to the phone step
    pub fn change_number(&mut self) {
        self.auth.change_number();
    }

    /// Poll the background auth request (non-blocking)
    ///
    /// Returns true if a request completed this call.
    pub fn poll_auth_task(&mut self) -> bool {
        let Some(task) = self.auth_task.take() else {
            return false;
        };

        if !task.is_finished() {
            // Still running, put it back
            self.auth_task = Some(task);
            return false;
        }

        match task {
            AuthTask::SendCode(handle) => {
                let result = handle.join().unwrap_or_else(|_| Err(task_panicked()));
                let notification = self.auth.complete_send_code(result);
                self.notify(notification);
            }
            AuthTask::Verify(handle) => {
                let result = handle.join().unwrap_or_else(|_| Err(task_panicked()));
                let (notification, session) =
                    self.auth.complete_verify(result, self.session_store.as_ref());
                if let Some(session) = session {
                    self.enter_shell(session);
                }
                self.notify(notification);
            }
        }
        true
    }

    /// Whether a sign-in request is in flight
    pub fn is_auth_pending(&self) -> bool {
        self.auth_task.is_some()
    }

    fn enter_shell(&mut self, session: Session) {
        self.session = Some(session);
        self.auth = AuthFlow::new();
        self.current_screen = Screen::Shell;
        self.selected_tab = Tab::Chats;
        self.focus = Focus::Sidebar;
    }

    /// Remove the stored session and return to the sign-in flow
    pub fn logout(&mut self) {
        if let Err(e) = self.session_store.clear() {
            tracing::error!("Failed to clear session: {}", e);
            self.notify(Notification::error(e.to_string()));
            return;
        }

        if let Some(session) = self.session.take() {
            tracing::info!("Signed out {}", session.phone);
        }
        self.clear_selection();
        self.auth = AuthFlow::new();
        self.contact_list_screen = ContactListScreen::new();
        self.current_screen = Screen::Auth;
    }

    /// Switch the sidebar tab
    pub fn select_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
        self.focus = Focus::Sidebar;
    }

    /// Switch to the other sidebar tab
    pub fn toggle_tab(&mut self) {
        self.select_tab(self.selected_tab.toggle());
    }

    /// Move focus between the sidebar and the open conversation
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar if self.chat_window_screen.is_some() => Focus::Conversation,
            _ => Focus::Sidebar,
        };
    }

    /// Move the chat list highlight down
    pub fn next_chat(&mut self) {
        self.chat_list_screen.next(self.chats.len());
    }

    /// Move the chat list highlight up
    pub fn previous_chat(&mut self) {
        self.chat_list_screen.previous(self.chats.len());
    }

    /// The chat matching `selected_chat_id`
    pub fn selected_chat(&self) -> Option<&Chat> {
        let id = self.selected_chat_id.as_deref()?;
        self.chats.iter().find(|c| c.id == id)
    }

    /// Open the chat with `chat_id`
    ///
    /// Unknown ids are ignored so the selection always names an existing
    /// chat. Returns whether the chat is now open.
    pub fn select_chat(&mut self, chat_id: &str) -> bool {
        let Some(index) = self.chats.iter().position(|c| c.id == chat_id) else {
            tracing::warn!("Ignoring selection of unknown chat {}", chat_id);
            return false;
        };

        self.chats[index].mark_read();
        self.chat_list_screen.selected_index = index;

        let already_open = self
            .chat_window_screen
            .as_ref()
            .is_some_and(|w| w.chat_id == chat_id);
        if !already_open {
            let thread = mock::thread_for(chat_id, &self.settings.current_user_id);
            self.chat_window_screen = Some(ChatWindowScreen::new(chat_id, thread));
        }

        self.selected_chat_id = Some(chat_id.to_string());
        self.focus = Focus::Conversation;
        true
    }

    /// Open the highlighted chat
    pub fn open_highlighted_chat(&mut self) {
        let Some(chat_id) = self
            .chats
            .get(self.chat_list_screen.selected_index)
            .map(|c| c.id.clone())
        else {
            return;
        };
        self.select_chat(&chat_id);
    }

    /// Close the open chat and show the placeholder
    pub fn clear_selection(&mut self) {
        self.selected_chat_id = None;
        self.chat_window_screen = None;
        self.focus = Focus::Sidebar;
    }

    /// Contacts matching the current search text
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        filter_contacts(&self.contacts, &self.contact_list_screen.search_query)
    }

    /// Move the contact list highlight down
    pub fn next_contact(&mut self) {
        let count = self.visible_contacts().len();
        self.contact_list_screen.next(count);
    }

    /// Move the contact list highlight up
    pub fn previous_contact(&mut self) {
        let count = self.visible_contacts().len();
        self.contact_list_screen.previous(count);
    }

    /// Open a chat with `contact_id`, creating it if needed
    ///
    /// Switches the sidebar to the chat list. Returns whether a chat was
    /// opened.
    pub fn start_chat(&mut self, contact_id: &str) -> bool {
        if !self.chats.iter().any(|c| c.id == contact_id) {
            let Some(contact) = self.contacts.iter().find(|c| c.id == contact_id) else {
                tracing::warn!("Cannot start chat with unknown contact {}", contact_id);
                return false;
            };
            tracing::info!("Starting new chat with {}", contact.name);
            self.chats.push(Chat::from_contact(contact));
        }

        self.selected_tab = Tab::Chats;
        self.select_chat(contact_id)
    }

    /// Start a chat with the highlighted contact
    pub fn start_chat_with_highlighted_contact(&mut self) {
        let Some(contact_id) = self
            .visible_contacts()
            .get(self.contact_list_screen.selected_index)
            .map(|c| c.id.clone())
        else {
            return;
        };
        self.start_chat(&contact_id);
    }

    /// Submit the add-contact dialog
    ///
    /// The new contact is kept in memory only. Incomplete forms stay open.
    pub fn submit_add_contact(&mut self) {
        let Some(form) = self.contact_list_screen.add_form.as_mut() else {
            return;
        };
        let Some((phone, name)) = form.submit() else {
            return;
        };

        self.contacts.push(Contact::new_local(&name, &phone));
        self.contact_list_screen.close_add_form();
        tracing::info!("Added contact {} ({})", name, phone);
        self.notify(Notification::info(
            "Contact added!",
            format!("{} has been added to your contacts.", name),
        ));
    }

    /// Send the draft of the open chat
    ///
    /// The message only lands in the pane's thread; nothing is delivered.
    pub fn send_message(&mut self) {
        let sender_id = self.settings.current_user_id.clone();
        let Some(window) = self.chat_window_screen.as_mut() else {
            return;
        };
        let Some(message) = window.send(&sender_id) else {
            return;
        };

        tracing::debug!("Message {} appended to chat {}", message.id, window.chat_id);
        self.notify(Notification::info(
            "Message sent!",
            "Your message has been delivered.",
        ));
    }
}

fn task_panicked() -> Error {
    Error::Auth("Background sign-in task panicked".to_string())
}
