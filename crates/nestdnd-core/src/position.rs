//! Structural position of an item at a point in time.

use crate::item::ItemId;

/// A computed, ephemeral fact about where an item sits in the tree.
///
/// Positions are recomputed by traversal whenever needed and become stale
/// the instant the tree mutates; they are never stored on items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Id of the item this position describes.
    pub item_id: ItemId,
    /// Index among the item's direct siblings, 0-based.
    pub index: usize,
    /// Owning group's id, or `None` at root.
    pub parent_id: Option<ItemId>,
    /// Nesting level: 0 at root, 1 inside a group.
    pub level: usize,
}

impl Position {
    /// Whether this position is at the root level.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.level == 0
    }
}
