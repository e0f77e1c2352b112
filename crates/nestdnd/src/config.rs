//! Session configuration: structural constraints, custom validation, and
//! lifecycle callbacks.

use std::fmt;

use nestdnd_core::{DragEvent, DropValidation, Item, Position};

/// Custom drop validator. When configured, its verdict is authoritative and
/// replaces the structural check entirely; a validator that wants both must
/// re-run the structural check itself (it receives the full [`DragEvent`],
/// including the classified operation).
pub type ValidateDropFn<P> = Box<dyn Fn(&DragEvent<P>) -> DropValidation>;

/// Fired when a drag enters the `Dragging` state.
pub type DragStartFn<P> = Box<dyn FnMut(&Item<P>, &Position)>;

/// Fired after a successful commit, before `on_drop`.
pub type DragEndFn<P> = Box<dyn FnMut(&DragEvent<P>)>;

/// Fired after a successful commit with the adopted tree.
pub type DropFn<P> = Box<dyn FnMut(&DragEvent<P>, &[Item<P>])>;

/// Structural constraints and callbacks for a [`DragSession`].
///
/// Defaults allow exactly one level of grouping: `max_depth` 2, items may
/// enter groups, groups may not nest, groups may be reordered.
///
/// [`DragSession`]: crate::session::DragSession
pub struct DndConfig<P = ()> {
    pub(crate) max_depth: usize,
    pub(crate) allow_items_in_groups: bool,
    pub(crate) allow_nested_groups: bool,
    pub(crate) allow_group_reordering: bool,
    pub(crate) validate_drop: Option<ValidateDropFn<P>>,
    pub(crate) on_drag_start: Option<DragStartFn<P>>,
    pub(crate) on_drag_end: Option<DragEndFn<P>>,
    pub(crate) on_drop: Option<DropFn<P>>,
}

impl<P> Default for DndConfig<P> {
    fn default() -> Self {
        Self {
            max_depth: 2,
            allow_items_in_groups: true,
            allow_nested_groups: false,
            allow_group_reordering: true,
            validate_drop: None,
            on_drag_start: None,
            on_drag_end: None,
            on_drop: None,
        }
    }
}

impl<P> DndConfig<P> {
    /// Create a configuration with the default constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth (root = 0; the default of 2 allows one
    /// level of groups).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether items may be dropped into groups.
    #[must_use]
    pub fn with_allow_items_in_groups(mut self, allow: bool) -> Self {
        self.allow_items_in_groups = allow;
        self
    }

    /// Set whether groups may be nested in other groups.
    #[must_use]
    pub fn with_allow_nested_groups(mut self, allow: bool) -> Self {
        self.allow_nested_groups = allow;
        self
    }

    /// Set whether groups may be reordered at the root level.
    #[must_use]
    pub fn with_allow_group_reordering(mut self, allow: bool) -> Self {
        self.allow_group_reordering = allow;
        self
    }

    /// Install a custom drop validator, replacing the structural check.
    #[must_use]
    pub fn validate_drop_with(
        mut self,
        validator: impl Fn(&DragEvent<P>) -> DropValidation + 'static,
    ) -> Self {
        self.validate_drop = Some(Box::new(validator));
        self
    }

    /// Register a drag-start callback.
    #[must_use]
    pub fn on_drag_start(mut self, callback: impl FnMut(&Item<P>, &Position) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(callback));
        self
    }

    /// Register a drag-end callback, fired after a successful commit.
    #[must_use]
    pub fn on_drag_end(mut self, callback: impl FnMut(&DragEvent<P>) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(callback));
        self
    }

    /// Register a drop callback receiving the adopted tree.
    #[must_use]
    pub fn on_drop(mut self, callback: impl FnMut(&DragEvent<P>, &[Item<P>]) + 'static) -> Self {
        self.on_drop = Some(Box::new(callback));
        self
    }

    /// The configured maximum nesting depth.
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether items may be dropped into groups.
    #[inline]
    #[must_use]
    pub fn allow_items_in_groups(&self) -> bool {
        self.allow_items_in_groups
    }

    /// Whether groups may be nested in other groups.
    #[inline]
    #[must_use]
    pub fn allow_nested_groups(&self) -> bool {
        self.allow_nested_groups
    }

    /// Whether groups may be reordered at the root level.
    #[inline]
    #[must_use]
    pub fn allow_group_reordering(&self) -> bool {
        self.allow_group_reordering
    }
}

impl<P> fmt::Debug for DndConfig<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DndConfig")
            .field("max_depth", &self.max_depth)
            .field("allow_items_in_groups", &self.allow_items_in_groups)
            .field("allow_nested_groups", &self.allow_nested_groups)
            .field("allow_group_reordering", &self.allow_group_reordering)
            .field("has_validator", &self.validate_drop.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_point() {
        let config: DndConfig = DndConfig::new();
        assert_eq!(config.max_depth(), 2);
        assert!(config.allow_items_in_groups());
        assert!(!config.allow_nested_groups());
        assert!(config.allow_group_reordering());
    }

    #[test]
    fn builder_overrides() {
        let config: DndConfig = DndConfig::new()
            .with_max_depth(3)
            .with_allow_nested_groups(true)
            .with_allow_group_reordering(false)
            .with_allow_items_in_groups(false);
        assert_eq!(config.max_depth(), 3);
        assert!(config.allow_nested_groups());
        assert!(!config.allow_group_reordering());
        assert!(!config.allow_items_in_groups());
    }

    #[test]
    fn debug_elides_closures() {
        let config: DndConfig =
            DndConfig::new().validate_drop_with(|_| DropValidation::valid());
        let dbg = format!("{config:?}");
        assert!(dbg.contains("has_validator: true"));
    }
}
