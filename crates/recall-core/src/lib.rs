/// Generic undo/redo engine with type-keyed handler dispatch.
///
/// Provides a `HistoryStore` that records opaque, type-tagged action
/// records and reverses or reapplies them by dispatching to
/// caller-supplied `undo`/`redo` handlers. Handlers may be
/// asynchronous; a record only moves between the past and future
/// stacks after its handler has succeeded.
pub mod config;
pub mod context;
pub mod error;
pub mod record;
pub mod registry;
pub mod store;

pub use config::HistoryConfig;
pub use context::HistoryContext;
pub use error::{HandlerOp, HistoryError};
pub use record::Record;
pub use registry::{HandlerRegistry, RecordHandler};
pub use store::HistoryStore;
