//! Drop validator: structural legality of a candidate drop.
//!
//! Consulted for live validity cues on every hovered target and, combined
//! with an optional session-level custom validator, as the gate before a
//! move is committed. Rules short-circuit on the first failure:
//!
//! 1. No target: vacuously legal (the caller gates the commit on a target).
//! 2. Self-drop: illegal.
//! 3. Cycle guard: a group may not drop onto its own descendant.
//! 4. Item onto a group: legal iff placing inside stays under `max_depth`.
//! 5. Sibling positioning at or past `max_depth`: illegal.
//! 6. With nesting disallowed, a group may not land on a peer group or
//!    anywhere inside one.

use crate::item::Item;
use crate::operation::DragOperation;
use crate::position::Position;

/// Verdict of a drop check, as produced by custom validators.
///
/// The structural check itself answers with a plain `bool`; this richer form
/// lets an application attach a reason for UI feedback and suggest the
/// operation it would accept instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropValidation {
    /// Whether the drop should be allowed.
    pub is_valid: bool,
    /// Human-readable rejection reason, if any.
    pub reason: Option<String>,
    /// Operation the validator would accept instead, if any.
    pub suggested_operation: Option<DragOperation>,
}

impl DropValidation {
    /// An accepting verdict.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
            suggested_operation: None,
        }
    }

    /// A rejecting verdict with a reason.
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
            suggested_operation: None,
        }
    }

    /// Attach the operation that would have been acceptable.
    #[must_use]
    pub fn with_suggestion(mut self, operation: DragOperation) -> Self {
        self.suggested_operation = Some(operation);
        self
    }
}

/// Decide whether `active_item` may drop on the hovered target.
///
/// `max_depth` is the maximum nesting depth counted from 0 at root (2
/// means root plus one level of groups). `allow_nested_groups` permits
/// dropping groups into groups.
#[must_use]
pub fn can_drop<P>(
    active_item: &Item<P>,
    active_position: &Position,
    over_item: Option<&Item<P>>,
    over_position: Option<&Position>,
    max_depth: usize,
    allow_nested_groups: bool,
) -> bool {
    let (Some(over_item), Some(over_position)) = (over_item, over_position) else {
        return true;
    };

    if active_item.id() == over_item.id() {
        return false;
    }

    // Cycle guard: the target sits directly inside the dragged group.
    if active_item.is_group() && over_position.parent_id.as_ref() == Some(active_item.id()) {
        return false;
    }

    // Dropping an item onto a group places it inside: level + 1.
    if over_item.is_group() && !active_item.is_group() {
        return over_position.level + 1 < max_depth;
    }

    if over_position.level >= max_depth {
        return false;
    }

    if !allow_nested_groups && active_item.is_group() {
        if over_item.is_group() && active_position.level == over_position.level {
            return false;
        }
        if over_position.level > 0 {
            return false;
        }
    }

    true
}
