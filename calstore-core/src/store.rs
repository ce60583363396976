//! The event store.
//!
//! `EventStore` owns the canonical event collection and is the only writer of
//! its durable mirror. Every mutation rewrites the full snapshot under a
//! single storage key.
//!
//! If a snapshot write fails the in-memory change is kept and the error is
//! returned. Memory and storage then differ until the next successful write.
//!
//! A snapshot that can't be loaded is copied to `<key>.corrupt` before the
//! store starts empty. If that copy fails too, the store refuses to write so
//! the original is never overwritten.

use crate::config::CalStoreConfig;
use crate::error::{CalStoreError, CalStoreResult};
use crate::event::{Event, EventDraft, EventPatch};
use crate::id::IdGenerator;
use crate::storage::{FileStorage, Storage};

/// Result of an update or delete that targets an event by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

pub struct EventStore<S: Storage> {
    storage: S,
    key: String,
    events: Vec<Event>,
    ids: IdGenerator,
    loading: bool,
    /// Set when an unloadable snapshot could not be backed up
    writes_blocked: bool,
}

impl EventStore<FileStorage> {
    /// A file-backed store using the configured data directory and key.
    pub fn from_config(config: &CalStoreConfig) -> Self {
        EventStore::new(FileStorage::new(config.data_path()), &config.storage_key)
    }
}

impl<S: Storage> EventStore<S> {
    pub fn new(storage: S, key: &str) -> Self {
        EventStore {
            storage,
            key: key.to_string(),
            events: Vec::new(),
            ids: IdGenerator::new(),
            loading: true,
            writes_blocked: false,
        }
    }

    /// True until `initialize` has run.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted snapshot, if any.
    ///
    /// Never fails: a missing, unreadable or undecodable snapshot leaves the
    /// collection empty. Anything that exists but can't be loaded is copied
    /// to `<key>.corrupt` first so the next write doesn't destroy it.
    pub fn initialize(&mut self) {
        self.events = match self.storage.get(&self.key) {
            Ok(Some(raw)) => match decode_snapshot(&raw) {
                Ok(events) => events,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "ignoring stored events");
                    self.preserve_corrupt();
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e @ CalStoreError::LoadDecode(_)) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring stored events");
                self.preserve_corrupt();
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not read stored events");
                self.preserve_corrupt();
                Vec::new()
            }
        };

        self.ids.seed(self.events.iter().map(|e| e.id.as_str()));
        self.loading = false;
        tracing::debug!(key = %self.key, count = self.events.len(), "events loaded");
    }

    fn preserve_corrupt(&mut self) {
        let backup_key = format!("{}.corrupt", self.key);
        if let Err(e) = self.storage.copy(&self.key, &backup_key) {
            tracing::warn!(key = %backup_key, error = %e, "could not back up stored events, writes disabled");
            self.writes_blocked = true;
        }
    }

    /// The committed collection, in insertion order.
    pub async fn list(&self) -> Vec<Event> {
        tokio::task::yield_now().await;
        self.events.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Store a new event built from `draft` and return it with its id.
    pub fn add(&mut self, draft: EventDraft) -> CalStoreResult<Event> {
        let id = self.unused_id();
        let event = Event::from_draft(id, draft);

        self.events.push(event.clone());
        self.persist()?;

        Ok(event)
    }

    pub fn update(&mut self, id: &str, patch: &EventPatch) -> CalStoreResult<Outcome> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(Outcome::NotFound);
        };

        patch.apply_to(event);
        self.persist()?;

        Ok(Outcome::Applied)
    }

    pub fn delete(&mut self, id: &str) -> CalStoreResult<Outcome> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Ok(Outcome::NotFound);
        };

        self.events.remove(index);
        self.persist()?;

        Ok(Outcome::Applied)
    }

    fn unused_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) -> CalStoreResult<()> {
        if self.writes_blocked {
            return Err(CalStoreError::StorageWrite(format!(
                "stored events under '{}' could not be loaded or backed up, refusing to overwrite them",
                self.key
            )));
        }

        let snapshot = encode_snapshot(&self.events)?;
        self.storage.set(&self.key, &snapshot)?;
        tracing::debug!(key = %self.key, count = self.events.len(), "events persisted");
        Ok(())
    }
}

/// Encode events in the durable format: a JSON array of event records.
pub fn encode_snapshot(events: &[Event]) -> CalStoreResult<String> {
    serde_json::to_string(events).map_err(|e| CalStoreError::Serialization(e.to_string()))
}

pub fn decode_snapshot(raw: &str) -> CalStoreResult<Vec<Event>> {
    serde_json::from_str(raw).map_err(|e| CalStoreError::LoadDecode(e.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
