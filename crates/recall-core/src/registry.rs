/// Handler registration and type-tag dispatch.
use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::error::HistoryError;
use crate::record::Record;

/// A pair of operations that reverse and reapply one record type.
///
/// Implementations are supplied by the host application; the engine
/// only routes records to them by type tag. Both operations may be
/// asynchronous and may fail. A failure is propagated to the caller of
/// `HistoryStore::undo`/`redo` and leaves the stacks untouched.
#[async_trait]
pub trait RecordHandler<R: Record>: Send + Sync {
    /// Reverses the effect of `record`.
    async fn undo(&self, record: &R) -> Result<()>;

    /// Reapplies the effect of `record`.
    async fn redo(&self, record: &R) -> Result<()>;
}

/// Immutable mapping from record type tags to their handler pairs.
///
/// Populated once at startup via `register` and then moved into the
/// `HistoryStore`; there is no way to add or replace handlers after
/// that. The registry has no side effects of its own.
pub struct HandlerRegistry<R: Record> {
    handlers: HashMap<String, Box<dyn RecordHandler<R>>>,
}

impl<R: Record> std::fmt::Debug for HandlerRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

impl<R: Record> HandlerRegistry<R> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers the handler pair for `kind`, replacing any previous
    /// entry for the same tag.
    pub fn register(
        mut self,
        kind: impl Into<String>,
        handler: impl RecordHandler<R> + 'static,
    ) -> Self {
        self.handlers.insert(kind.into(), Box::new(handler));
        self
    }

    /// Looks up the handler pair for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecordType` if no handler was registered for
    /// `kind`. The engine never silently skips an unregistered record:
    /// moving it between stacks without running its handler would leave
    /// the host application out of sync with the history.
    pub fn resolve(&self, kind: &str) -> Result<&dyn RecordHandler<R>, HistoryError> {
        self.handlers
            .get(kind)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| HistoryError::UnknownRecordType {
                kind: kind.to_string(),
            })
    }

    /// Whether a handler pair is registered for `kind`.
    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry has no handlers at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Checks that every tag in `kinds` has a registered handler.
    ///
    /// Hosts can call this at startup with the full set of tags they
    /// will ever add, turning a late `UnknownRecordType` dispatch
    /// failure into an immediate one.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecordType` for the first missing tag.
    pub fn ensure_covers<'a, I>(&self, kinds: I) -> Result<(), HistoryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for kind in kinds {
            if !self.handlers.contains_key(kind) {
                return Err(HistoryError::UnknownRecordType {
                    kind: kind.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<R: Record> Default for HandlerRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
