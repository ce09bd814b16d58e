pub mod error;
pub mod queries;

use std::collections::BTreeMap;
use std::sync::Mutex;

use folio_types::models::{ContactMessage, StudySession, User};
use tracing::debug;

pub use error::{StoreError, StoreResult};

/// Process-local record store. All state lives for as long as the value does;
/// nothing is written to disk.
pub struct Store {
    inner: Mutex<Collections>,
}

/// The three collections plus their id counters. Counters start at 1 and only
/// ever move forward, so an id is never handed out twice.
pub(crate) struct Collections {
    pub(crate) users: BTreeMap<u32, User>,
    pub(crate) contact_messages: BTreeMap<u32, ContactMessage>,
    pub(crate) study_sessions: BTreeMap<u32, StudySession>,
    pub(crate) next_user_id: u32,
    pub(crate) next_message_id: u32,
    pub(crate) next_session_id: u32,
}

impl Collections {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            contact_messages: BTreeMap::new(),
            study_sessions: BTreeMap::new(),
            next_user_id: 1,
            next_message_id: 1,
            next_session_id: 1,
        }
    }
}

/// Take the next id from `counter`. The counter never wraps, so an id can
/// never be handed out twice.
pub(crate) fn claim_id(counter: &mut u32, collection: &'static str) -> StoreResult<u32> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(StoreError::IdsExhausted(collection))?;
    Ok(id)
}

impl Store {
    pub fn new() -> Self {
        debug!("In-memory store initialised");
        Self {
            inner: Mutex::new(Collections::new()),
        }
    }

    /// Run `f` with exclusive access to every collection. Each public
    /// operation is a single call to this, so operations never interleave.
    pub(crate) fn with_collections<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Collections) -> StoreResult<T>,
    {
        let mut guard = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut *guard)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
