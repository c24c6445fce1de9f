/// Core two-stack history store with type-keyed dispatch.
///
/// Applied records live in `past` (oldest first); undone records live
/// in `future` (next redo target at the front). All mutation goes
/// through `add`, `undo`, `redo` and `clear_history`.
use crate::config::HistoryConfig;
use crate::error::{HandlerOp, HistoryError};
use crate::record::Record;
use crate::registry::HandlerRegistry;

/// Records and replays a single linear history of typed records.
///
/// The store owns its registry; handlers cannot change for the store's
/// lifetime. Mutating methods take `&mut self`, so a second `undo` or
/// `redo` cannot be issued while one is still pending against the same
/// store. Hosts that share a store across tasks wrap it in a
/// `HistoryContext`, which serializes callers with a mutex; the store
/// itself never locks.
pub struct HistoryStore<R: Record> {
    registry: HandlerRegistry<R>,
    /// Applied records, oldest first; the tail is the next undo target.
    past: Vec<R>,
    /// Undone records; the next redo target is at index 0.
    future: Vec<R>,
    config: HistoryConfig,
}

impl<R: Record> std::fmt::Debug for HistoryStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("past_len", &self.past.len())
            .field("future_len", &self.future.len())
            .field("max_depth", &self.config.max_depth)
            .finish()
    }
}

impl<R: Record> HistoryStore<R> {
    /// Creates an empty store with the default configuration.
    pub fn new(registry: HandlerRegistry<R>) -> Self {
        Self::with_config(registry, HistoryConfig::default())
    }

    /// Creates an empty store with an explicit configuration.
    pub fn with_config(registry: HandlerRegistry<R>, config: HistoryConfig) -> Self {
        Self {
            registry,
            past: Vec::new(),
            future: Vec::new(),
            config,
        }
    }

    /// Records a newly applied action.
    ///
    /// The record becomes the next undo target. Any undone records are
    /// discarded: once a new action is taken, the undone branch is
    /// unreachable. If the past stack exceeds the configured depth, the
    /// oldest records are evicted.
    pub fn add(&mut self, record: R) {
        tracing::debug!(kind = record.kind(), "recording action");
        self.past.push(record);
        self.future.clear();

        if self.past.len() > self.config.max_depth {
            let excess = self.past.len() - self.config.max_depth;
            self.past.drain(..excess);
        }
    }

    /// Undoes the most recently applied record.
    ///
    /// Resolves the record's `undo` handler by type tag, awaits it, and
    /// only then moves the record from the past stack to the front of
    /// the future stack. Calling with an empty past stack is a no-op,
    /// so a stale undo button is harmless.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecordType` if the record's tag has no registry
    /// entry, or `HandlerFailure` if the handler itself fails. In both
    /// cases the stacks are untouched and the call can be retried.
    pub async fn undo(&mut self) -> Result<(), HistoryError> {
        let Some(record) = self.past.last() else {
            return Ok(());
        };

        let handler = self.registry.resolve(record.kind())?;
        tracing::debug!(kind = record.kind(), "undoing record");
        if let Err(source) = handler.undo(record).await {
            tracing::warn!(kind = record.kind(), "undo handler failed: {source:#}");
            return Err(HistoryError::HandlerFailure {
                kind: record.kind().to_string(),
                op: HandlerOp::Undo,
                source,
            });
        }

        if let Some(record) = self.past.pop() {
            self.future.insert(0, record);
        }
        Ok(())
    }

    /// Redoes the most recently undone record.
    ///
    /// Mirror of [`undo`](Self::undo): resolves the `redo` handler for
    /// the record at the front of the future stack, awaits it, and only
    /// then moves the record back onto the past stack. Calling with an
    /// empty future stack is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecordType` if the record's tag has no registry
    /// entry, or `HandlerFailure` if the handler itself fails. In both
    /// cases the stacks are untouched and the call can be retried.
    pub async fn redo(&mut self) -> Result<(), HistoryError> {
        let Some(record) = self.future.first() else {
            return Ok(());
        };

        let handler = self.registry.resolve(record.kind())?;
        tracing::debug!(kind = record.kind(), "redoing record");
        if let Err(source) = handler.redo(record).await {
            tracing::warn!(kind = record.kind(), "redo handler failed: {source:#}");
            return Err(HistoryError::HandlerFailure {
                kind: record.kind().to_string(),
                op: HandlerOp::Redo,
                source,
            });
        }

        if !self.future.is_empty() {
            let record = self.future.remove(0);
            self.past.push(record);
        }
        Ok(())
    }

    /// Discards all history bookkeeping.
    ///
    /// No handler is invoked: this forgets the records, it does not
    /// reverse or reapply anything.
    pub fn clear_history(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Applied records, oldest first.
    pub fn past(&self) -> &[R] {
        &self.past
    }

    /// Undone records, next redo target first.
    pub fn future(&self) -> &[R] {
        &self.future
    }

    /// Whether there is a record to undo.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether there is a record to redo.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The registry this store dispatches through.
    pub fn registry(&self) -> &HandlerRegistry<R> {
        &self.registry
    }
}
