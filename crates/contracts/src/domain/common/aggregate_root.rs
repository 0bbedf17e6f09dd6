use super::AggregateId;

/// Common surface of every catalog and document aggregate.
///
/// The associated names drive the generic parts of the UI and the HTTP
/// layer: `collection_name` is the REST resource segment
/// (`/api/<collection_name>`), `element_name`/`list_name` are the
/// user-facing Spanish labels.
pub trait AggregateRoot {
    type Key: AggregateId;

    fn key(&self) -> Self::Key;

    /// Human-readable name of this record (shown in selects and tables).
    fn display_name(&self) -> &str;

    /// Soft-deactivated records stay on the wire but are hidden from pickers.
    fn is_active(&self) -> bool {
        true
    }

    fn aggregate_index() -> &'static str;

    fn collection_name() -> &'static str;

    fn element_name() -> &'static str;

    fn list_name() -> &'static str;
}
