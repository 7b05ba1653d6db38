use crate::domain::models::EntryId;

/// Source of fresh, unique entry identifiers.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> EntryId;
}
