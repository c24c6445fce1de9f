/// Error taxonomy for history operations.
use thiserror::Error;

/// Which half of a handler pair was being invoked when a dispatch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOp {
    Undo,
    Redo,
}

impl std::fmt::Display for HandlerOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerOp::Undo => f.write_str("undo"),
            HandlerOp::Redo => f.write_str("redo"),
        }
    }
}

/// Errors surfaced by the history engine.
///
/// Every variant leaves the past/future stacks exactly as they were
/// before the failing call.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A record's type tag has no entry in the handler registry.
    #[error("no handler registered for record type `{kind}`")]
    UnknownRecordType { kind: String },

    /// A caller-supplied handler failed. The record stays on its stack,
    /// so the call can be retried.
    #[error("{op} handler failed for record type `{kind}`")]
    HandlerFailure {
        kind: String,
        op: HandlerOp,
        #[source]
        source: anyhow::Error,
    },

    /// A shared history context was used before a store was provided.
    #[error("history used before a store was provided")]
    UninitializedAccess,
}
