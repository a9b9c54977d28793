use crate::contract::model::{Pin, Tag, UserRef};
use async_trait::async_trait;

/// Whole-list replacement of one pin field (`$set`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinFieldSet {
    SavedBy(Vec<UserRef>),
    Tags(Vec<Tag>),
}

/// Single-entry append to one pin list (`$push`). The store assigns the new
/// entry's id, and the creation time for comments. The comment author is the
/// authenticated identity, so the store can name it on expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinAppend {
    Comment { author: UserRef, text: String },
    Tag { text: String },
}

/// Partial update applied atomically to a single pin document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinUpdate {
    Set(PinFieldSet),
    Push(PinAppend),
}

/// User references the store should populate in a returned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expand {
    Owner,
    SavedBy,
    Comments,
}

/// Expansion requested after every mutation.
pub const FULL_EXPANSION: &[Expand] = &[Expand::Owner, Expand::SavedBy, Expand::Comments];

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait PinsRepository: Send + Sync {
    /// Load a pin by id, fully expanded.
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Pin>>;

    /// Apply `update` and return the document as it is after the update,
    /// expanded as requested. `None` if no pin has this id.
    async fn update_by_id(
        &self,
        id: &str,
        update: PinUpdate,
        expand: &[Expand],
    ) -> anyhow::Result<Option<Pin>>;
}
