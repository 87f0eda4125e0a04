//! Shared test doubles: auth backends and session stores with fixed behaviour

use crate::auth::AuthBackend;
use crate::storage::{MemorySessionStore, Session, SessionStore, Settings};
use crate::tui::App;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Backend that answers instantly and always succeeds
pub struct ImmediateBackend;

#[async_trait]
impl AuthBackend for ImmediateBackend {
    async fn send_code(&self, _phone: &str) -> Result<()> {
        Ok(())
    }

    async fn verify_code(&self, phone: &str, _code: &str) -> Result<Session> {
        Ok(Session::new(phone, "demo-user"))
    }
}

/// Backend that answers instantly and always fails
pub struct FailingBackend;

#[async_trait]
impl AuthBackend for FailingBackend {
    async fn send_code(&self, _phone: &str) -> Result<()> {
        Err(Error::Auth("backend unavailable".to_string()))
    }

    async fn verify_code(&self, _phone: &str, _code: &str) -> Result<Session> {
        Err(Error::Auth("backend unavailable".to_string()))
    }
}

/// Session store whose every operation fails
pub struct BrokenStore;

impl SessionStore for BrokenStore {
    fn load(&self) -> Result<Option<Session>> {
        Err(Error::Session("store offline".to_string()))
    }

    fn save(&self, _session: &Session) -> Result<()> {
        Err(Error::Session("store offline".to_string()))
    }

    fn clear(&self) -> Result<()> {
        Err(Error::Session("store offline".to_string()))
    }
}

/// Helper to create a signed-out App backed by an in-memory store
/// Returns (App, store) - the store handle shares state with the App
pub fn create_test_app() -> (App, MemorySessionStore) {
    create_test_app_with_backend(Arc::new(ImmediateBackend))
}

/// Helper to create a signed-out App with a custom backend
pub fn create_test_app_with_backend(backend: Arc<dyn AuthBackend>) -> (App, MemorySessionStore) {
    let store = MemorySessionStore::new();
    let app = App::new(Settings::default(), Box::new(store.clone()), backend);
    (app, store)
}

/// Helper to create an App that starts with a stored session
pub fn create_signed_in_app() -> (App, MemorySessionStore) {
    let store = MemorySessionStore::with_session(Session::new("+1234567890", "demo-user"));
    let app = App::new(
        Settings::default(),
        Box::new(store.clone()),
        Arc::new(ImmediateBackend),
    );
    (app, store)
}

/// Poll the App until its background auth request completes
pub fn wait_for_auth(app: &mut App) {
    for _ in 0..1000 {
        if app.poll_auth_task() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("auth task did not finish in time");
}
