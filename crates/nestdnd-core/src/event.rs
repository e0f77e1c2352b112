//! Drag-event snapshot handed to validators and lifecycle callbacks.

use crate::item::Item;
use crate::operation::DragOperation;
use crate::position::Position;

/// Everything known about a drag at one instant: the classified operation,
/// the dragged item, and the hovered target (if any), each with its
/// position. Produced once per over-target change and once at commit;
/// transient, never persisted.
#[derive(Debug, Clone)]
pub struct DragEvent<P> {
    /// Classified operation for this source/target pair.
    pub operation: DragOperation,
    /// Snapshot of the dragged item.
    pub active_item: Item<P>,
    /// Snapshot of the hovered target, if one is hovered.
    pub over_item: Option<Item<P>>,
    /// Source position at snapshot time.
    pub active_position: Position,
    /// Target position at snapshot time, if a target is hovered.
    pub over_position: Option<Position>,
}
