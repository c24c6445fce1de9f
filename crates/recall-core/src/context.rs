/// Shared access to one store from many consumers.
use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, MutexGuard};

use crate::error::HistoryError;
use crate::record::Record;
use crate::store::HistoryStore;

/// A cloneable handle that provides one `HistoryStore` to any number
/// of consumers.
///
/// Handles may be handed out before the store exists; consumers that
/// call [`lock`](Self::lock) before a store was provided get
/// `UninitializedAccess` instead of a silently empty history. The
/// inner mutex serializes callers, so at most one `undo`/`redo` is in
/// flight against the store at a time.
pub struct HistoryContext<R: Record> {
    slot: Arc<OnceLock<Mutex<HistoryStore<R>>>>,
}

impl<R: Record> Clone for HistoryContext<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<R: Record> std::fmt::Debug for HistoryContext<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryContext")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl<R: Record> HistoryContext<R> {
    /// Creates a handle with no store installed yet.
    pub fn empty() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Creates a handle that already holds `store`.
    pub fn new(store: HistoryStore<R>) -> Self {
        let context = Self::empty();
        let _ = context.slot.set(Mutex::new(store));
        context
    }

    /// Installs `store` as the shared instance.
    ///
    /// Returns `false` if a store was already installed; the existing
    /// one is kept.
    pub fn provide(&self, store: HistoryStore<R>) -> bool {
        self.slot.set(Mutex::new(store)).is_ok()
    }

    /// Locks the shared store for a sequence of calls.
    ///
    /// # Errors
    ///
    /// Returns `UninitializedAccess` if no store has been provided yet.
    pub async fn lock(&self) -> Result<MutexGuard<'_, HistoryStore<R>>, HistoryError> {
        match self.slot.get() {
            Some(mutex) => Ok(mutex.lock().await),
            None => Err(HistoryError::UninitializedAccess),
        }
    }

    /// Whether a store has been provided.
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<R: Record> Default for HistoryContext<R> {
    fn default() -> Self {
        Self::empty()
    }
}
