#![no_main]

//! Fuzz the tree editor: arbitrary move sequences over arbitrary two-level
//! trees must conserve ids and keep `parent_id` consistent with containment.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nestdnd_core::{Item, ItemId, find_item, flatten_items, item_count, move_item};

#[derive(Arbitrary, Debug)]
struct Plan {
    shapes: Vec<(bool, u8)>,
    moves: Vec<(u8, u8, u8)>,
}

fn build_tree(shapes: &[(bool, u8)]) -> Vec<Item> {
    let mut next = 0i64;
    let mut take = || {
        let id = next;
        next += 1;
        id
    };

    shapes
        .iter()
        .take(16)
        .map(|&(is_group, kids)| {
            if is_group {
                let gid = take();
                let mut group = Item::group(gid, format!("group-{gid}"));
                for _ in 0..kids.min(4) {
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

fuzz_target!(|plan: Plan| {
    let mut tree = build_tree(&plan.shapes);
    if tree.is_empty() {
        return;
    }
    let total = item_count(&tree);

    for &(pick, dest, index) in plan.moves.iter().take(32) {
        let flat = flatten_items(&tree);
        let moved = flat[pick as usize % flat.len()].item.id().clone();
        let moved_is_group = find_item(&tree, &moved)
            .is_some_and(|found| found.item.is_group());

        // Root always works as a destination; a group works for leaves.
        let groups: Vec<ItemId> = flat
            .iter()
            .filter(|row| row.item.is_group() && *row.item.id() != moved)
            .map(|row| row.item.id().clone())
            .collect();
        let parent = if moved_is_group || groups.is_empty() || dest as usize % 2 == 0 {
            None
        } else {
            Some(groups[dest as usize % groups.len()].clone())
        };

        tree = move_item(&tree, &moved, parent.as_ref(), index as usize);

        assert_eq!(item_count(&tree), total);
        for row in flatten_items(&tree) {
            assert_eq!(row.item.parent_id().cloned(), row.parent_id);
        }
    }
});
