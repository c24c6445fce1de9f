/// Configuration for the history engine.

/// Maximum number of records kept on the undo side before the oldest
/// are evicted.
const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configuration for a `HistoryStore`.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Max records kept in the past stack; the oldest are evicted when
    /// an `add` pushes the stack beyond this.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// A configuration that never evicts.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}
