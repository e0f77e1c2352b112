//! Drag-session state machine.
//!
//! [`DragSession`] is the pointer-free analog of an input-handling layer: it
//! owns the single mutable tree value and a small finite-state machine, and
//! calls the pure engine once per gesture step. Device events stay outside;
//! the caller translates them into `drag_start` / `drag_over` / `drag_end` /
//! `cancel` by item id.
//!
//! # State Machine
//!
//! - **Idle**: no drag in progress. `drag_start` on a known id moves to
//!   `Dragging`; everything else is ignored.
//! - **Dragging**: an active item, plus an optional hovered target. Each
//!   `drag_over` re-resolves positions and re-classifies the operation.
//!   `drag_end` commits (if a valid target is hovered) and returns to
//!   `Idle`; `cancel` returns to `Idle` without touching the tree.
//!
//! # Invariants
//!
//! 1. The tree only changes on a committed `drag_end` or an explicit
//!    `set_items`; an abandoned or cancelled drag leaves it untouched.
//! 2. The state machine stores ids, never positions: positions are
//!    recomputed from the current tree on every step, so they can never be
//!    stale.
//! 3. Unknown ids arriving mid-gesture (fast ticks over a tree that just
//!    changed) are absorbed as no-ops, never surfaced as errors.

use nestdnd_core::{
    DragEvent, DragOperation, Found, Item, ItemId, can_drop, determine_drag_operation, find_item,
    first_duplicate_id, move_item, normalize_parents,
};

#[cfg(feature = "tracing")]
use nestdnd_core::item_count;

use crate::config::DndConfig;
use crate::error::SessionError;

/// Current state of the drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Id of the dragged item.
        active: ItemId,
        /// Id of the currently hovered target, if any.
        over: Option<ItemId>,
    },
}

/// Owns a tree and drives drag gestures against it.
///
/// ```
/// use nestdnd::{DragSession, Item};
///
/// let tree: Vec<Item> = vec![
///     Item::new("a", "Alpha"),
///     Item::group("g1", "Group").child(Item::new("b", "Beta")),
/// ];
/// let mut session = DragSession::new(tree).unwrap();
///
/// session.drag_start("a");
/// session.drag_over("g1");
/// assert!(session.can_drop_on("g1"));
/// assert!(session.drag_end());
///
/// // "a" was placed inside the group, at the end.
/// assert_eq!(session.items()[0].children().last().unwrap().label(), "Alpha");
/// ```
pub struct DragSession<P = ()> {
    items: Vec<Item<P>>,
    config: DndConfig<P>,
    state: DragState,
}

impl<P: Clone> DragSession<P> {
    /// Create a session with the default configuration.
    pub fn new(items: Vec<Item<P>>) -> Result<Self, SessionError> {
        Self::with_config(items, DndConfig::default())
    }

    /// Create a session with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Rejects a `max_depth` of 0 and trees with duplicate ids; both would
    /// silently corrupt every later operation.
    pub fn with_config(items: Vec<Item<P>>, config: DndConfig<P>) -> Result<Self, SessionError> {
        if config.max_depth == 0 {
            return Err(SessionError::InvalidMaxDepth(config.max_depth));
        }
        if let Some(id) = first_duplicate_id(&items) {
            return Err(SessionError::DuplicateId(id));
        }
        Ok(Self {
            items: normalize_parents(items),
            config,
            state: DragState::Idle,
        })
    }

    /// The current tree.
    #[must_use]
    pub fn items(&self) -> &[Item<P>] {
        &self.items
    }

    /// Consume the session, yielding the tree.
    #[must_use]
    pub fn into_items(self) -> Vec<Item<P>> {
        self.items
    }

    /// Replace the tree, re-deriving every `parent_id` from containment.
    ///
    /// An in-progress drag survives if its ids still resolve; otherwise the
    /// affected steps degrade to no-ops.
    pub fn set_items(&mut self, items: Vec<Item<P>>) {
        self.items = normalize_parents(items);
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DndConfig<P> {
        &self.config
    }

    /// The gesture state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The dragged item with its current position, if a drag is in progress.
    #[must_use]
    pub fn active(&self) -> Option<Found<'_, P>> {
        match &self.state {
            DragState::Dragging { active, .. } => find_item(&self.items, active),
            DragState::Idle => None,
        }
    }

    /// The hovered target with its current position, if any.
    #[must_use]
    pub fn over(&self) -> Option<Found<'_, P>> {
        match &self.state {
            DragState::Dragging {
                over: Some(over), ..
            } => find_item(&self.items, over),
            _ => None,
        }
    }

    /// Advisory classification of the pending operation.
    ///
    /// `None` while idle; with a drag but no hovered target this is the
    /// classifier's conservative no-target default.
    #[must_use]
    pub fn current_operation(&self) -> Option<DragOperation> {
        let active = self.active()?;
        let over = self.over();
        Some(determine_drag_operation(
            &active.position,
            over.as_ref().map(|found| &found.position),
            active.item,
            over.as_ref().map(|found| found.item),
        ))
    }

    /// Begin dragging the item with `id`.
    ///
    /// Returns `false` (and stays put) if the id does not resolve. Starting
    /// a new drag while one is in progress replaces it.
    pub fn drag_start(&mut self, id: impl Into<ItemId>) -> bool {
        let id = id.into();
        let Some(found) = find_item(&self.items, &id) else {
            return false;
        };
        let position = found.position.clone();

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "drag.start", id = %id, level = position.level);

        if let Some(callback) = self.config.on_drag_start.as_mut() {
            callback(found.item, &position);
        }
        self.state = DragState::Dragging {
            active: id,
            over: None,
        };
        true
    }

    /// Update the hovered target, returning the advisory operation label.
    ///
    /// An id that does not resolve clears the hover (the pointer is over
    /// nothing the engine knows about).
    pub fn drag_over(&mut self, id: impl Into<ItemId>) -> Option<DragOperation> {
        let DragState::Dragging { active, .. } = &self.state else {
            return None;
        };
        let active_id = active.clone();
        let id = id.into();

        let Some(over) = find_item(&self.items, &id) else {
            self.state = DragState::Dragging {
                active: active_id,
                over: None,
            };
            return None;
        };
        let active = find_item(&self.items, &active_id)?;

        let operation = determine_drag_operation(
            &active.position,
            Some(&over.position),
            active.item,
            Some(over.item),
        );
        self.state = DragState::Dragging {
            active: active_id,
            over: Some(id),
        };
        Some(operation)
    }

    /// Clear the hovered target without ending the drag.
    pub fn drag_leave(&mut self) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = None;
        }
    }

    /// Whether the dragged item may legally drop on `id` right now.
    ///
    /// This is both the live validity cue and the gate `drag_end` applies
    /// before committing. With a custom validator configured, its verdict
    /// replaces the structural check.
    #[must_use]
    pub fn can_drop_on(&self, id: impl Into<ItemId>) -> bool {
        let Some(active) = self.active() else {
            return false;
        };
        let id = id.into();
        let Some(over) = find_item(&self.items, &id) else {
            return false;
        };
        self.evaluate_drop(&active, &over)
    }

    /// Commit the drag: validate, move, adopt the new tree, fire callbacks.
    ///
    /// Returns `true` iff a move was committed. Without a hovered target,
    /// or when validation rejects the drop, the tree is left untouched and
    /// the session simply returns to idle.
    pub fn drag_end(&mut self) -> bool {
        let previous = std::mem::replace(&mut self.state, DragState::Idle);
        let DragState::Dragging { active, over } = previous else {
            return false;
        };
        let Some(over_id) = over else {
            return false;
        };
        let Some((event, target_parent, target_index)) = self.prepare_commit(&active, &over_id)
        else {
            return false;
        };

        self.items = move_item(&self.items, &active, target_parent.as_ref(), target_index);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "drag.drop",
            id = %active,
            operation = %event.operation,
            to_parent = ?target_parent,
            to_index = target_index,
            items = item_count(&self.items),
        );

        if let Some(callback) = self.config.on_drag_end.as_mut() {
            callback(&event);
        }
        if let Some(callback) = self.config.on_drop.as_mut() {
            callback(&event, &self.items);
        }
        true
    }

    /// Abort the drag without touching the tree.
    pub fn cancel(&mut self) {
        #[cfg(feature = "tracing")]
        if self.is_dragging() {
            tracing::debug!(message = "drag.cancel");
        }
        self.state = DragState::Idle;
    }

    /// Resolve both ends, validate, and work out the destination slot.
    ///
    /// Dropping an item onto a group places it at the end of that group's
    /// children; every other drop takes the hovered slot. `target_index` is
    /// against the post-removal sibling sequence, which is exactly what the
    /// hovered slot denotes once the active item has left it.
    fn prepare_commit(
        &self,
        active_id: &ItemId,
        over_id: &ItemId,
    ) -> Option<(DragEvent<P>, Option<ItemId>, usize)> {
        let active = find_item(&self.items, active_id)?;
        let over = find_item(&self.items, over_id)?;

        if !self.evaluate_drop(&active, &over) {
            return None;
        }

        let operation = determine_drag_operation(
            &active.position,
            Some(&over.position),
            active.item,
            Some(over.item),
        );
        let (target_parent, target_index) =
            if operation == DragOperation::ItemToGroup && over.item.is_group() {
                (Some(over.item.id().clone()), over.item.children().len())
            } else {
                (over.position.parent_id.clone(), over.position.index)
            };
        let event = DragEvent {
            operation,
            active_item: active.item.clone(),
            over_item: Some(over.item.clone()),
            active_position: active.position.clone(),
            over_position: Some(over.position.clone()),
        };
        Some((event, target_parent, target_index))
    }

    fn evaluate_drop(&self, active: &Found<'_, P>, over: &Found<'_, P>) -> bool {
        if let Some(validator) = self.config.validate_drop.as_ref() {
            let operation = determine_drag_operation(
                &active.position,
                Some(&over.position),
                active.item,
                Some(over.item),
            );
            let event = DragEvent {
                operation,
                active_item: active.item.clone(),
                over_item: Some(over.item.clone()),
                active_position: active.position.clone(),
                over_position: Some(over.position.clone()),
            };
            return validator(&event).is_valid;
        }
        self.structural_check(active, over)
    }

    fn structural_check(&self, active: &Found<'_, P>, over: &Found<'_, P>) -> bool {
        if !can_drop(
            active.item,
            &active.position,
            Some(over.item),
            Some(&over.position),
            self.config.max_depth,
            self.config.allow_nested_groups,
        ) {
            return false;
        }

        let operation = determine_drag_operation(
            &active.position,
            Some(&over.position),
            active.item,
            Some(over.item),
        );
        if !self.config.allow_items_in_groups
            && !active.item.is_group()
            && matches!(
                operation,
                DragOperation::ItemToGroup | DragOperation::ItemBetweenGroups
            )
        {
            return false;
        }
        if !self.config.allow_group_reordering
            && active.item.is_group()
            && operation == DragOperation::ReorderGroups
        {
            return false;
        }
        true
    }
}

impl<P> std::fmt::Debug for DragSession<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSession")
            .field("items", &self.items.len())
            .field("state", &self.state)
            .finish()
    }
}
