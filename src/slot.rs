use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;

use crate::models::Session;

// 1. SessionSlot Contract
/// SessionSlot
///
/// Defines the abstract contract for the single durable key-value slot holding
/// the persisted session record. This trait allows us to swap the concrete
/// implementation—from the real file-backed slot (FileSlot) in production to
/// the in-memory Mock (MockSlot) during testing—without affecting the
/// Session Store.
///
/// There is exactly one slot and at most one writer (the Session Store), so
/// writes are last-writer-wins with no versioning.
#[async_trait]
pub trait SessionSlot: Send + Sync {
    /// Reads the persisted session record.
    ///
    /// Absence, I/O failure, and parse failure are all indistinguishable by
    /// contract: each yields `None`. This operation never errors, which is
    /// what lets `restore()` be infallible.
    async fn load(&self) -> Option<Session>;

    /// Serializes and writes the session record, replacing any prior value.
    async fn save(&self, session: &Session) -> Result<(), String>;

    /// Removes the persisted record. Clearing an already-empty slot succeeds.
    async fn clear(&self) -> Result<(), String>;
}

// 2. The Real Implementation (File-backed)
/// FileSlot
///
/// The concrete implementation backed by a single JSON file on local disk,
/// standing in for the browser's local-storage entry the record originally
/// lived under. The file holds exactly one serialized `Session`.
#[derive(Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SessionSlot for FileSlot {
    /// load
    ///
    /// Reads and parses the slot file. Malformed content is logged and treated
    /// as absence; the caller never sees an error.
    async fn load(&self) -> Option<Session> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("session slot unreadable: {:?}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                // A corrupt record is dropped, not repaired. The user simply
                // starts anonymous again.
                tracing::warn!("discarding malformed session record: {:?}", e);
                None
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), String> {
        let raw = serde_json::to_string(session).map_err(|e| e.to_string())?;
        fs::write(&self.path, raw).await.map_err(|e| e.to_string())
    }

    async fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockSlot
///
/// An in-memory implementation of `SessionSlot` used for testing. It stores
/// the *serialized* record rather than the struct, so tests can assert the
/// byte-for-byte round-trip law between the in-memory session and the
/// persisted copy.
#[derive(Default)]
pub struct MockSlot {
    stored: std::sync::Mutex<Option<String>>,
    /// When true, all write operations return a simulated failure.
    pub should_fail: bool,
}

impl MockSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            stored: std::sync::Mutex::new(None),
            should_fail: true,
        }
    }

    /// Seeds the slot with raw content, bypassing serialization. Lets tests
    /// plant malformed records.
    pub fn seed(&self, raw: &str) {
        *self.stored.lock().unwrap() = Some(raw.to_string());
    }

    /// The raw persisted bytes, for round-trip assertions.
    pub fn raw(&self) -> Option<String> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionSlot for MockSlot {
    async fn load(&self) -> Option<Session> {
        let raw = self.stored.lock().unwrap().clone()?;
        serde_json::from_str(&raw).ok()
    }

    async fn save(&self, session: &Session) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Slot Error: Simulation requested".to_string());
        }
        let raw = serde_json::to_string(session).map_err(|e| e.to_string())?;
        *self.stored.lock().unwrap() = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Slot Error: Simulation requested".to_string());
        }
        *self.stored.lock().unwrap() = None;
        Ok(())
    }
}

/// SlotState
///
/// The concrete type used to share the slot access across the application state.
pub type SlotState = Arc<dyn SessionSlot>;
