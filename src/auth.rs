//! Phone-number sign-in flow
//!
//! The flow has two visible steps, [`AuthStep::Phone`] and
//! [`AuthStep::Code`]. Submitting a phone number asks the [`AuthBackend`] to
//! send a code; submitting a six-character code asks it to verify, and the
//! returned [`Session`] is written to the [`SessionStore`]. A written session
//! is the implicit third state: the caller switches to the chat shell.
//!
//! Each submission is split into `begin_*` (validate, mark loading) and
//! `complete_*` (apply the backend result). The async `submit_*` helpers
//! run both halves back to back; the terminal UI instead runs the backend
//! call on a background thread and applies the result when it is polled.

use crate::notification::Notification;
use crate::storage::{Session, SessionStore};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Number of characters in a verification code
pub const CODE_LENGTH: usize = 6;

/// Visible step of the sign-in flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    /// Collecting the phone number
    Phone,
    /// Collecting the verification code
    Code,
}

/// Capability that delivers and checks verification codes
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Send a verification code to `phone`
    async fn send_code(&self, phone: &str) -> Result<()>;

    /// Check `code` for `phone` and return the new session
    async fn verify_code(&self, phone: &str, code: &str) -> Result<Session>;
}

/// Backend that waits a fixed delay and then always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedAuthBackend {
    send_delay: Duration,
    verify_delay: Duration,
    user_id: String,
}

impl SimulatedAuthBackend {
    /// Create a backend with the given delays, issuing sessions for `user_id`
    pub fn new(send_delay: Duration, verify_delay: Duration, user_id: impl Into<String>) -> Self {
        Self {
            send_delay,
            verify_delay,
            user_id: user_id.into(),
        }
    }

    /// Build a backend from application settings
    pub fn from_settings(settings: &crate::storage::Settings) -> Self {
        Self::new(
            settings.send_code_delay(),
            settings.verify_code_delay(),
            settings.demo_user_id.clone(),
        )
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuthBackend {
    async fn send_code(&self, phone: &str) -> Result<()> {
        tokio::time::sleep(self.send_delay).await;
        tracing::info!("Simulated verification code sent to {}", phone);
        Ok(())
    }

    async fn verify_code(&self, phone: &str, _code: &str) -> Result<Session> {
        tokio::time::sleep(self.verify_delay).await;
        Ok(Session::new(phone, self.user_id.clone()))
    }
}

/// State of the sign-in flow
#[derive(Debug, Clone)]
pub struct AuthFlow {
    /// Current step
    pub step: AuthStep,
    /// Phone number input
    pub phone: String,
    /// Verification code input
    pub code: String,
    /// Whether a backend request is in flight
    pub loading: bool,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthFlow {
    /// Create a flow on the phone step with empty inputs
    pub fn new() -> Self {
        Self {
            step: AuthStep::Phone,
            phone: String::new(),
            code: String::new(),
            loading: false,
        }
    }

    /// Add character to the input of the current step
    ///
    /// The phone field takes digits and `+ -()` separators; the code field
    /// takes up to [`CODE_LENGTH`] visible characters.
    pub fn add_char(&mut self, c: char) {
        match self.step {
            AuthStep::Phone => {
                if c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')') {
                    self.phone.push(c);
                }
            }
            AuthStep::Code => {
                if !c.is_control() && !c.is_whitespace() && self.code.chars().count() < CODE_LENGTH {
                    self.code.push(c);
                }
            }
        }
    }

    /// Remove last character from the input of the current step
    pub fn backspace(&mut self) {
        match self.step {
            AuthStep::Phone => self.phone.pop(),
            AuthStep::Code => self.code.pop(),
        };
    }

    /// Whether the phone form can be submitted
    pub fn can_send_code(&self) -> bool {
        self.step == AuthStep::Phone && !self.loading && !self.phone.is_empty()
    }

    /// Whether the code form can be submitted
    pub fn can_verify(&self) -> bool {
        self.step == AuthStep::Code && !self.loading && self.code.chars().count() == CODE_LENGTH
    }

    /// Start a code request; returns the phone number to send to
    ///
    /// Returns `None` (and changes nothing) when the form cannot be submitted.
    pub fn begin_send_code(&mut self) -> Option<String> {
        if !self.can_send_code() {
            return None;
        }
        self.loading = true;
        Some(self.phone.clone())
    }

    /// Apply the result of a code request
    pub fn complete_send_code(&mut self, result: Result<()>) -> Notification {
        self.loading = false;
        match result {
            Ok(()) => {
                self.step = AuthStep::Code;
                tracing::info!("Verification code requested for {}", self.phone);
                Notification::info("OTP sent!", format!("Verification code sent to {}", self.phone))
            }
            Err(e) => {
                tracing::warn!("Code request failed: {}", e);
                Notification::error(e.to_string())
            }
        }
    }

    /// Start a verification; returns `(phone, code)` to check
    pub fn begin_verify(&mut self) -> Option<(String, String)> {
        if !self.can_verify() {
            return None;
        }
        self.loading = true;
        Some((self.phone.clone(), self.code.clone()))
    }

    /// Apply the result of a verification and persist the session
    ///
    /// Returns the notification to show and, on success, the stored session.
    pub fn complete_verify(
        &mut self,
        result: Result<Session>,
        store: &dyn SessionStore,
    ) -> (Notification, Option<Session>) {
        self.loading = false;
        let stored = result.and_then(|session| {
            store.save(&session)?;
            Ok(session)
        });

        match stored {
            Ok(session) => {
                tracing::info!("Signed in as {} ({})", session.phone, session.id);
                (
                    Notification::info("Welcome to TalkHub!", "Successfully logged in"),
                    Some(session),
                )
            }
            Err(e) => {
                tracing::warn!("Verification failed: {}", e);
                (Notification::error(e.to_string()), None)
            }
        }
    }

    /// Go back from the code step to the phone step
    ///
    /// Any code typed so far is discarded; the phone number is kept for
    /// editing.
    pub fn change_number(&mut self) {
        if self.loading {
            return;
        }
        self.step = AuthStep::Phone;
        self.code.clear();
    }

    /// Submit the phone form and wait for the backend
    ///
    /// Returns `None` when the form could not be submitted.
    pub async fn submit_phone(&mut self, backend: &dyn AuthBackend) -> Option<Notification> {
        let phone = self.begin_send_code()?;
        let result = backend.send_code(&phone).await;
        Some(self.complete_send_code(result))
    }

    /// Submit the code form, wait for the backend and persist the session
    ///
    /// Returns `None` when the form could not be submitted.
    pub async fn submit_code(
        &mut self,
        backend: &dyn AuthBackend,
        store: &dyn SessionStore,
    ) -> Option<(Notification, Option<Session>)> {
        let (phone, code) = self.begin_verify()?;
        let result = backend.verify_code(&phone, &code).await;
        Some(self.complete_verify(result, store))
    }
}

/// Run an auth future to completion on a fresh runtime
///
/// Used from background threads, which have no runtime of their own.
pub fn block_on_backend<T>(fut: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Auth(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(fut)
}
