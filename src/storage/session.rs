//! Locally persisted sign-in session
//!
//! The session is the only record that outlives the process. Its presence
//! alone decides whether the client opens on the sign-in flow or the chat
//! shell; there is no token, expiry or validation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Signed-in user record, stored as `{ "phone": ..., "id": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Phone number used to sign in
    pub phone: String,
    /// Placeholder user identifier
    pub id: String,
}

impl Session {
    /// Create a new session record
    pub fn new(phone: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            id: id.into(),
        }
    }
}

/// Capability for looking up and writing the session
///
/// The client only talks to this trait, so a real account backend can
/// replace the local file without touching the screens.
pub trait SessionStore {
    /// Read the stored session, `None` when signed out
    fn load(&self) -> Result<Option<Session>>;

    /// Write the session, replacing any previous one
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the stored session
    fn clear(&self) -> Result<()>;
}

/// Session stored as a JSON file under a single key
///
/// `key` names the file: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store for `key` inside `dir`
    pub fn new<P: AsRef<Path>>(dir: P, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Session(format!("Failed to read session: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(None);
        }

        let session = serde_json::from_str(&data)
            .map_err(|e| Error::Session(format!("Failed to parse session: {}", e)))?;

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Session(format!("Failed to create session directory: {}", e)))?;
        }

        let json = serde_json::to_string(session)?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::Session(format!("Failed to write session: {}", e)))?;

        tracing::debug!("Session written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Session(format!("Failed to remove session: {}", e))),
        }
    }
}

/// In-memory session store
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the client wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session`
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(session))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>> {
        self.slot
            .lock()
            .map_err(|_| Error::Session("Session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
