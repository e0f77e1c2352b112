//! Hierarchy node model.
//!
//! An [`Item`] is a node in a two-level hierarchy: plain items and groups at
//! the root, items inside groups. The structural header (`id`, `label`,
//! `kind`, `children`, `parent_id`) is fixed; everything else an application
//! wants to attach travels in the opaque payload type parameter, which every
//! engine operation passes through untouched.
//!
//! # Invariants
//!
//! 1. Ids are unique across the entire tree, not just among siblings.
//! 2. Only [`ItemKind::Group`] nodes own children; traversals never descend
//!    into the children of a plain item.
//! 3. `parent_id` is a denormalized convenience mirror of containment. The
//!    authoritative structure is the `children` sequence; the tree editor
//!    rewrites `parent_id` on every insertion, and [`normalize_parents`]
//!    re-derives it wholesale from containment.
//!
//! [`normalize_parents`]: crate::edit::normalize_parents

use std::fmt;

use ahash::AHashSet;

/// Stable identifier for an item, unique across the whole tree.
///
/// Mirrors the common external forms: an integer key or a text key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// Numeric identifier.
    Int(i64),
    /// Text identifier.
    Text(String),
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Node kind: a plain item or a group that may own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ItemKind {
    /// A leaf entry.
    Item,
    /// A container entry; the only kind that owns children.
    Group,
}

/// A node in the hierarchy, generic over an opaque payload.
///
/// Built in builder style:
///
/// ```
/// use nestdnd_core::Item;
///
/// let group: Item = Item::group("g1", "Inbox")
///     .child(Item::new("a", "First"))
///     .child(Item::new("b", "Second"));
///
/// assert!(group.is_group());
/// assert_eq!(group.children().len(), 2);
/// // Children get their parent back-reference at construction time.
/// assert_eq!(group.children()[0].parent_id(), Some(group.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<P = ()> {
    pub(crate) id: ItemId,
    pub(crate) label: String,
    pub(crate) kind: ItemKind,
    pub(crate) children: Vec<Item<P>>,
    pub(crate) parent_id: Option<ItemId>,
    pub(crate) payload: P,
}

impl<P: Default> Item<P> {
    /// Create a leaf item with a default payload.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self::with_payload(id, label, P::default())
    }

    /// Create an empty group with a default payload.
    #[must_use]
    pub fn group(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self::group_with_payload(id, label, P::default())
    }
}

impl<P> Item<P> {
    /// Create a leaf item carrying `payload`.
    #[must_use]
    pub fn with_payload(id: impl Into<ItemId>, label: impl Into<String>, payload: P) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ItemKind::Item,
            children: Vec::new(),
            parent_id: None,
            payload,
        }
    }

    /// Create an empty group carrying `payload`.
    #[must_use]
    pub fn group_with_payload(
        id: impl Into<ItemId>,
        label: impl Into<String>,
        payload: P,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ItemKind::Group,
            children: Vec::new(),
            parent_id: None,
            payload,
        }
    }

    /// Append a child node, stamping its `parent_id`.
    #[must_use]
    pub fn child(mut self, mut node: Item<P>) -> Self {
        node.parent_id = Some(self.id.clone());
        self.children.push(node);
        self
    }

    /// Replace the children wholesale, stamping each `parent_id`.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Item<P>>) -> Self {
        self.children = nodes;
        for node in &mut self.children {
            node.parent_id = Some(self.id.clone());
        }
        self
    }

    /// Set the denormalized parent back-reference.
    ///
    /// Only useful when reconstructing a tree from external data; the tree
    /// editor and [`normalize_parents`](crate::edit::normalize_parents) keep
    /// this field consistent with containment afterwards.
    #[must_use]
    pub fn with_parent_id(mut self, parent_id: Option<ItemId>) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// The item's identifier.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display text, opaque to the engine.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node kind.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Whether this node is a group.
    #[inline]
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == ItemKind::Group
    }

    /// Child nodes. Empty for leaf items and empty groups.
    #[must_use]
    pub fn children(&self) -> &[Item<P>] {
        &self.children
    }

    /// The owning group's id, or `None` at root.
    #[must_use]
    pub fn parent_id(&self) -> Option<&ItemId> {
        self.parent_id.as_ref()
    }

    /// Borrow the opaque payload.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutably borrow the opaque payload.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }
}

/// Total node count of the tree, groups and leaves included.
#[must_use]
pub fn item_count<P>(items: &[Item<P>]) -> usize {
    let mut count = items.len();
    for item in items {
        if item.is_group() {
            count += item_count(&item.children);
        }
    }
    count
}

/// First id that occurs more than once anywhere in the tree, if any.
///
/// Id uniqueness is a structural invariant the engine assumes; the session
/// layer checks it once at construction with this function rather than on
/// every traversal.
#[must_use]
pub fn first_duplicate_id<P>(items: &[Item<P>]) -> Option<ItemId> {
    fn walk<'a, P>(items: &'a [Item<P>], seen: &mut AHashSet<&'a ItemId>) -> Option<ItemId> {
        for item in items {
            if !seen.insert(&item.id) {
                return Some(item.id.clone());
            }
            if item.is_group()
                && let Some(dup) = walk(&item.children, seen)
            {
                return Some(dup);
            }
        }
        None
    }

    walk(items, &mut AHashSet::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_stamps_parent_ids() {
        let group: Item = Item::group("g", "Group")
            .child(Item::new("a", "A"))
            .child(Item::new("b", "B"));

        for child in group.children() {
            assert_eq!(child.parent_id(), Some(&ItemId::from("g")));
        }
    }

    #[test]
    fn with_children_stamps_parent_ids() {
        let group: Item = Item::group(1, "Group")
            .with_children(vec![Item::new(2, "A"), Item::new(3, "B")]);

        assert_eq!(group.children().len(), 2);
        for child in group.children() {
            assert_eq!(child.parent_id(), Some(&ItemId::Int(1)));
        }
    }

    #[test]
    fn payload_is_carried() {
        let mut item = Item::with_payload("a", "A", 42u32);
        assert_eq!(*item.payload(), 42);
        *item.payload_mut() = 7;
        assert_eq!(*item.payload(), 7);
    }

    #[test]
    fn item_count_spans_levels() {
        let tree: Vec<Item> = vec![
            Item::new("a", "A"),
            Item::group("g", "G")
                .child(Item::new("b", "B"))
                .child(Item::new("c", "C")),
        ];
        assert_eq!(item_count(&tree), 4);
    }

    #[test]
    fn item_count_empty_tree() {
        let tree: Vec<Item> = Vec::new();
        assert_eq!(item_count(&tree), 0);
    }

    #[test]
    fn duplicate_id_found_across_levels() {
        let tree: Vec<Item> = vec![
            Item::new("a", "A"),
            Item::group("g", "G").child(Item::new("a", "Shadow")),
        ];
        assert_eq!(first_duplicate_id(&tree), Some(ItemId::from("a")));
    }

    #[test]
    fn no_duplicate_id_in_valid_tree() {
        let tree: Vec<Item> = vec![
            Item::new(1, "A"),
            Item::group(2, "G").child(Item::new(3, "B")),
        ];
        assert_eq!(first_duplicate_id(&tree), None);
    }

    #[test]
    fn int_and_text_ids_are_distinct() {
        assert_ne!(ItemId::from(1), ItemId::from("1"));
    }

    #[test]
    fn id_display() {
        assert_eq!(ItemId::from(7).to_string(), "7");
        assert_eq!(ItemId::from("g1").to_string(), "g1");
    }
}
