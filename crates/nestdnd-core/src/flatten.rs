//! Pre-order flattening of the tree into a depth-annotated linear view.

use crate::item::{Item, ItemId, item_count};

/// One row of the flattened view: the item plus its depth and owner.
#[derive(Debug, Clone)]
pub struct FlatItem<'a, P> {
    /// The node itself.
    pub item: &'a Item<P>,
    /// Nesting level, 0 at root.
    pub level: usize,
    /// Owning group's id, or `None` at root.
    pub parent_id: Option<ItemId>,
}

/// Flatten the tree in pre-order, annotating each row with its level and
/// parent. Non-mutating, O(n), restartable at will.
#[must_use]
pub fn flatten_items<P>(items: &[Item<P>]) -> Vec<FlatItem<'_, P>> {
    let mut out = Vec::with_capacity(item_count(items));
    push_level(items, 0, None, &mut out);
    out
}

fn push_level<'a, P>(
    items: &'a [Item<P>],
    level: usize,
    parent_id: Option<&ItemId>,
    out: &mut Vec<FlatItem<'a, P>>,
) {
    for item in items {
        out.push(FlatItem {
            item,
            level,
            parent_id: parent_id.cloned(),
        });
        if item.is_group() && !item.children.is_empty() {
            push_level(&item.children, level + 1, Some(item.id()), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preorder_with_levels_and_parents() {
        let tree: Vec<Item> = vec![
            Item::new("a", "A"),
            Item::group("g1", "G1")
                .child(Item::new("b", "B"))
                .child(Item::new("c", "C")),
            Item::new("d", "D"),
        ];

        let flat = flatten_items(&tree);
        let rows: Vec<(String, usize, Option<String>)> = flat
            .iter()
            .map(|row| {
                (
                    row.item.id().to_string(),
                    row.level,
                    row.parent_id.as_ref().map(ToString::to_string),
                )
            })
            .collect();

        assert_eq!(
            rows,
            [
                ("a".to_owned(), 0, None),
                ("g1".to_owned(), 0, None),
                ("b".to_owned(), 1, Some("g1".to_owned())),
                ("c".to_owned(), 1, Some("g1".to_owned())),
                ("d".to_owned(), 0, None),
            ]
        );
    }

    #[test]
    fn empty_tree_flattens_to_nothing() {
        let tree: Vec<Item> = Vec::new();
        assert!(flatten_items(&tree).is_empty());
    }

    #[test]
    fn empty_group_is_a_single_row() {
        let tree: Vec<Item> = vec![Item::group("g", "G")];
        let flat = flatten_items(&tree);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].level, 0);
    }
}
