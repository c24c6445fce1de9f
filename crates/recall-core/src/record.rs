/// The trait implemented by host-defined history entries.

/// An immutable, type-tagged unit of recorded history with an
/// application-defined payload.
///
/// The engine never inspects the payload; it only reads the type tag
/// to resolve the handler pair that reverses or reapplies the record.
/// Hosts typically implement this on an enum and return one tag per
/// variant, which keeps match exhaustiveness inside their handlers.
pub trait Record: Send + Sync + 'static {
    /// The type tag used to resolve this record's handler pair.
    fn kind(&self) -> &str;
}
