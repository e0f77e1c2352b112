//! Property-based invariant tests for the hierarchy engine.
//!
//! These verify structural invariants that must hold for any two-level tree:
//!
//! 1. Conservation: a valid move neither duplicates nor loses ids.
//! 2. Round-trip: moving an item to its own slot reproduces the tree.
//! 3. Classification totality: every (active, over) pair gets a label.
//! 4. Self-drop is always rejected.
//! 5. Depth ceiling: entering a level-1 group is rejected at max_depth 2.
//! 6. Flatten/find agreement: every flattened row is findable with the
//!    same level and parent.
//! 7. normalize_parents establishes the containment lockstep.
//! 8. Removal erases exactly the target (and, for groups, its subtree).

use nestdnd_core::{
    DragOperation, Item, ItemId, can_drop, determine_drag_operation, find_item, flatten_items,
    item_count, move_item, normalize_parents, remove_item,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Shape of one root entry: a leaf, or a group with up to 4 leaf children.
type Shape = (bool, u8);

fn tree_strategy() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec((any::<bool>(), 0u8..4), 0..8).prop_map(build_tree)
}

fn build_tree(shapes: Vec<Shape>) -> Vec<Item> {
    let mut next = 0i64;
    let mut take = move || {
        let id = next;
        next += 1;
        id
    };

    shapes
        .into_iter()
        .map(|(is_group, kids)| {
            if is_group {
                let gid = take();
                let mut group = Item::group(gid, format!("group-{gid}"));
                for _ in 0..kids {
                    let id = take();
                    group = group.child(Item::new(id, format!("item-{id}")));
                }
                group
            } else {
                let id = take();
                Item::new(id, format!("item-{id}"))
            }
        })
        .collect()
}

fn sorted_ids(items: &[Item]) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = flatten_items(items)
        .iter()
        .map(|row| row.item.id().clone())
        .collect();
    ids.sort();
    ids
}

fn nth_id(items: &[Item], pick: usize) -> Option<ItemId> {
    let flat = flatten_items(items);
    if flat.is_empty() {
        return None;
    }
    Some(flat[pick % flat.len()].item.id().clone())
}

/// Destinations that keep the move well-formed: root always works; a group
/// works for leaves as long as it is not the moved node itself.
fn valid_parent_for(items: &[Item], moved: &ItemId, pick: usize) -> Option<ItemId> {
    let moved_is_group = find_item(items, moved).is_some_and(|found| found.item.is_group());
    if moved_is_group {
        return None;
    }
    let groups: Vec<ItemId> = flatten_items(items)
        .iter()
        .filter(|row| row.item.is_group() && row.item.id() != moved)
        .map(|row| row.item.id().clone())
        .collect();
    if groups.is_empty() || pick % (groups.len() + 1) == groups.len() {
        None
    } else {
        Some(groups[pick % (groups.len() + 1)].clone())
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Conservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn conservation_under_valid_moves(
        tree in tree_strategy(),
        pick in any::<usize>(),
        dest in any::<usize>(),
        index in 0usize..6,
    ) {
        let Some(id) = nth_id(&tree, pick) else { return Ok(()); };
        let parent = valid_parent_for(&tree, &id, dest);

        let moved = move_item(&tree, &id, parent.as_ref(), index);

        prop_assert_eq!(
            sorted_ids(&moved),
            sorted_ids(&tree),
            "id multiset changed moving {} under {:?}",
            id,
            parent
        );
        prop_assert_eq!(item_count(&moved), item_count(&tree));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Round-trip identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_to_own_slot_is_identity(tree in tree_strategy(), pick in any::<usize>()) {
        let tree = normalize_parents(tree);
        let Some(id) = nth_id(&tree, pick) else { return Ok(()); };
        let position = find_item(&tree, &id).unwrap().position;

        let moved = move_item(&tree, &id, position.parent_id.as_ref(), position.index);

        prop_assert_eq!(moved, tree);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Classification totality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn classification_is_total(
        tree in tree_strategy(),
        a in any::<usize>(),
        b in any::<usize>(),
        with_target in any::<bool>(),
    ) {
        let Some(active_id) = nth_id(&tree, a) else { return Ok(()); };
        let active = find_item(&tree, &active_id).unwrap();

        let operation = if with_target {
            let over_id = nth_id(&tree, b).unwrap();
            let over = find_item(&tree, &over_id).unwrap();
            determine_drag_operation(
                &active.position,
                Some(&over.position),
                active.item,
                Some(over.item),
            )
        } else {
            determine_drag_operation(&active.position, None, active.item, None)
        };

        prop_assert!(matches!(
            operation,
            DragOperation::ReorderGroups
                | DragOperation::ReorderMixed
                | DragOperation::ItemToGroup
                | DragOperation::ItemFromGroup
                | DragOperation::ReorderInGroup
                | DragOperation::ItemBetweenGroups
        ));
        if !with_target {
            prop_assert_eq!(operation, DragOperation::ReorderMixed);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Self-drop rejection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn self_drop_always_rejected(
        tree in tree_strategy(),
        pick in any::<usize>(),
        max_depth in 1usize..5,
        nested in any::<bool>(),
    ) {
        let Some(id) = nth_id(&tree, pick) else { return Ok(()); };
        let found = find_item(&tree, &id).unwrap();

        prop_assert!(!can_drop(
            found.item,
            &found.position,
            Some(found.item),
            Some(&found.position),
            max_depth,
            nested,
        ));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Depth ceiling at max_depth = 2
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nested_groups_cannot_be_entered_at_depth_two(
        tree in tree_strategy(),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        // Wrap the generated tree one level down so its groups sit at level 1.
        let wrapped: Vec<Item> = vec![
            Item::group("wrap", "Wrap").with_children(tree),
            Item::new("loose", "Loose"),
        ];

        let Some(active_id) = nth_id(&wrapped, a) else { return Ok(()); };
        let Some(over_id) = nth_id(&wrapped, b) else { return Ok(()); };
        let active = find_item(&wrapped, &active_id).unwrap();
        let over = find_item(&wrapped, &over_id).unwrap();

        // Any target that is a group at level >= 1 must reject item entry.
        if !active.item.is_group() && over.item.is_group() && over.position.level >= 1 {
            prop_assert!(!can_drop(
                active.item,
                &active.position,
                Some(over.item),
                Some(&over.position),
                2,
                false,
            ));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Flatten/find agreement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flatten_agrees_with_find(tree in tree_strategy()) {
        for row in flatten_items(&tree) {
            let found = find_item(&tree, row.item.id()).unwrap();
            prop_assert_eq!(found.position.level, row.level);
            prop_assert_eq!(found.position.parent_id, row.parent_id);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. normalize_parents lockstep
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalized_parents_match_containment(tree in tree_strategy()) {
        let normalized = normalize_parents(tree);
        for row in flatten_items(&normalized) {
            prop_assert_eq!(row.item.parent_id().cloned(), row.parent_id);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Removal erases exactly the target
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn removal_erases_target_and_subtree(tree in tree_strategy(), pick in any::<usize>()) {
        let Some(id) = nth_id(&tree, pick) else { return Ok(()); };
        let subtree_len = {
            let found = find_item(&tree, &id).unwrap();
            1 + item_count(found.item.children())
        };

        let out = remove_item(&tree, &id);

        prop_assert!(find_item(&out, &id).is_none());
        prop_assert_eq!(item_count(&out), item_count(&tree) - subtree_len);
    }
}
