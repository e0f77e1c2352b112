//! Tree editor: remove, insert, move.
//!
//! Every function here is copy-on-write: the input tree is borrowed, a fresh
//! tree comes back, and previously handed-out references into the old value
//! stay valid. Unknown ids degrade to identity transforms rather than
//! errors, so a stale reference arriving mid-gesture cannot crash the
//! caller. The editor is the single entry point that rewrites `parent_id`,
//! keeping the denormalized back-reference in lockstep with containment.

use crate::item::{Item, ItemId};
use crate::locate::find_item;

/// Remove the node matching `id` from wherever it occurs.
///
/// Recursively filters every group's children. Returns an equivalent tree
/// if `id` is absent.
#[must_use]
pub fn remove_item<P: Clone>(items: &[Item<P>], id: &ItemId) -> Vec<Item<P>> {
    items
        .iter()
        .filter(|item| item.id() != id)
        .map(|item| {
            if item.is_group() && !item.children.is_empty() {
                let mut copy = item.clone();
                copy.children = remove_item(&item.children, id);
                copy
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Insert `item` at `index` under `parent_id` (`None` = root sequence).
///
/// An index beyond the sibling count appends at the end. The inserted
/// node's `parent_id` is rewritten to match its new owner. If `parent_id`
/// names no group in the tree, the tree is returned unchanged and the item
/// is discarded: the permissive no-op contract for stale references.
#[must_use]
pub fn insert_item<P: Clone>(
    items: &[Item<P>],
    item: Item<P>,
    parent_id: Option<&ItemId>,
    index: usize,
) -> Vec<Item<P>> {
    match parent_id {
        None => {
            let mut out = items.to_vec();
            let mut item = item;
            item.parent_id = None;
            let at = index.min(out.len());
            out.insert(at, item);
            out
        }
        Some(parent_id) => {
            let mut pending = Some(item);
            insert_nested(items, &mut pending, parent_id, index)
        }
    }
}

fn insert_nested<P: Clone>(
    items: &[Item<P>],
    pending: &mut Option<Item<P>>,
    parent_id: &ItemId,
    index: usize,
) -> Vec<Item<P>> {
    items
        .iter()
        .map(|current| {
            if current.id() == parent_id
                && current.is_group()
                && let Some(mut node) = pending.take()
            {
                node.parent_id = Some(parent_id.clone());
                let mut copy = current.clone();
                let at = index.min(copy.children.len());
                copy.children.insert(at, node);
                return copy;
            }

            if current.is_group() && !current.children.is_empty() {
                let mut copy = current.clone();
                copy.children = insert_nested(&current.children, pending, parent_id, index);
                return copy;
            }

            current.clone()
        })
        .collect()
}

/// Relocate the node matching `id` to `index` under `parent_id`.
///
/// Composition of locate, remove, insert. Because removal happens first,
/// `index` is interpreted against the post-removal sibling sequence at the
/// destination. The moved node's whole subtree travels with it. Returns the
/// tree unchanged if `id` is absent.
#[must_use]
pub fn move_item<P: Clone>(
    items: &[Item<P>],
    id: &ItemId,
    parent_id: Option<&ItemId>,
    index: usize,
) -> Vec<Item<P>> {
    let Some(found) = find_item(items, id) else {
        return items.to_vec();
    };
    let moved = found.item.clone();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "tree.move",
        id = %id,
        from_level = found.position.level,
        to_parent = ?parent_id,
        to_index = index,
    );

    let without = remove_item(items, id);
    insert_item(&without, moved, parent_id, index)
}

/// Rewrite every `parent_id` from authoritative containment.
///
/// Root nodes get `None`; children of a group get that group's id. Use when
/// adopting a tree built from external data, where the denormalized field
/// may be missing or lying.
#[must_use]
pub fn normalize_parents<P>(items: Vec<Item<P>>) -> Vec<Item<P>> {
    normalize_level(items, None)
}

fn normalize_level<P>(items: Vec<Item<P>>, parent_id: Option<&ItemId>) -> Vec<Item<P>> {
    items
        .into_iter()
        .map(|mut item| {
            item.parent_id = parent_id.cloned();
            if item.is_group() && !item.children.is_empty() {
                let id = item.id.clone();
                let children = std::mem::take(&mut item.children);
                item.children = normalize_level(children, Some(&id));
            }
            item
        })
        .collect()
}
