//! Drag-operation classifier.
//!
//! Names an in-progress drag from the source and target positions. The
//! label is advisory: it drives UI affordances (indicators, overlays), while
//! legality is decided separately by [`can_drop`](crate::validate::can_drop).
//!
//! The classification is an ordered decision table, evaluated top to bottom
//! with first match winning, so the precedence between rules is auditable in
//! one place and each predicate can be tested in isolation.

use crate::item::Item;
use crate::position::Position;

/// The six ways a drag can relate source to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DragOperation {
    /// Reordering groups at the root level.
    ReorderGroups,
    /// Reordering within the mixed root sequence (also the no-target default).
    ReorderMixed,
    /// Moving an item from the root into a group.
    ItemToGroup,
    /// Moving an item out of a group to the root.
    ItemFromGroup,
    /// Reordering items within one group.
    ReorderInGroup,
    /// Moving an item from one group to another.
    ItemBetweenGroups,
}

impl DragOperation {
    /// Stable wire name of the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReorderGroups => "REORDER_GROUPS",
            Self::ReorderMixed => "REORDER_MIXED",
            Self::ItemToGroup => "ITEM_TO_GROUP",
            Self::ItemFromGroup => "ITEM_FROM_GROUP",
            Self::ReorderInGroup => "REORDER_IN_GROUP",
            Self::ItemBetweenGroups => "ITEM_BETWEEN_GROUPS",
        }
    }
}

impl std::fmt::Display for DragOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind- and level-facts about one (active, over) pair, extracted once so the
/// decision table below stays free of generics.
#[derive(Debug, Clone, Copy)]
struct RuleCtx {
    active_level: usize,
    over_level: usize,
    active_is_group: bool,
    over_is_group: bool,
    same_parent: bool,
}

type Rule = (fn(&RuleCtx) -> bool, DragOperation);

/// Ordered decision table; first matching predicate wins.
///
/// The no-target case is handled before the table is consulted, and
/// [`DragOperation::ReorderMixed`] is the fallback when nothing matches
/// (e.g. levels deeper than the two the rules reason about).
const RULES: &[Rule] = &[
    // Dropping an item directly onto a group at its own level means
    // "place inside this group".
    (
        |ctx| !ctx.active_is_group && ctx.over_is_group && ctx.active_level == ctx.over_level,
        DragOperation::ItemToGroup,
    ),
    // Root → inside a group.
    (
        |ctx| ctx.active_level == 0 && ctx.over_level == 1,
        DragOperation::ItemToGroup,
    ),
    // Inside a group → root.
    (
        |ctx| ctx.active_level == 1 && ctx.over_level == 0,
        DragOperation::ItemFromGroup,
    ),
    // Both at root, at least one side a group.
    (
        |ctx| {
            ctx.active_level == 0
                && ctx.over_level == 0
                && (ctx.active_is_group || ctx.over_is_group)
        },
        DragOperation::ReorderGroups,
    ),
    // Both at root, items only.
    (
        |ctx| ctx.active_level == 0 && ctx.over_level == 0,
        DragOperation::ReorderMixed,
    ),
    // Both nested, same owner.
    (
        |ctx| ctx.active_level == 1 && ctx.over_level == 1 && ctx.same_parent,
        DragOperation::ReorderInGroup,
    ),
    // Both nested, different owners.
    (
        |ctx| ctx.active_level == 1 && ctx.over_level == 1,
        DragOperation::ItemBetweenGroups,
    ),
];

/// Classify the pending drag operation.
///
/// Total over its inputs: never fails and always returns one of the six
/// labels. With no hovered target the conservative default is
/// [`DragOperation::ReorderMixed`].
#[must_use]
pub fn determine_drag_operation<P>(
    active_position: &Position,
    over_position: Option<&Position>,
    active_item: &Item<P>,
    over_item: Option<&Item<P>>,
) -> DragOperation {
    let (Some(over_position), Some(over_item)) = (over_position, over_item) else {
        return DragOperation::ReorderMixed;
    };

    let ctx = RuleCtx {
        active_level: active_position.level,
        over_level: over_position.level,
        active_is_group: active_item.is_group(),
        over_is_group: over_item.is_group(),
        same_parent: active_position.parent_id == over_position.parent_id,
    };

    RULES
        .iter()
        .find(|(applies, _)| applies(&ctx))
        .map_or(DragOperation::ReorderMixed, |(_, operation)| *operation)
}
