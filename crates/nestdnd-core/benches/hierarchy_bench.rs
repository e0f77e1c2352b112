//! Benchmarks for the hierarchy engine.
//!
//! Run with: cargo bench -p nestdnd-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nestdnd_core::{Item, ItemId, find_item, flatten_items, move_item};
use std::hint::black_box;

/// Build a tree with `groups` groups of `per_group` items each, plus a few
/// loose root items between them.
fn make_tree(groups: usize, per_group: usize) -> Vec<Item> {
    let mut out = Vec::with_capacity(groups * 2);
    let mut next = 0i64;
    for g in 0..groups {
        out.push(Item::new(next, format!("loose-{g}")));
        next += 1;
        let mut group = Item::group(next, format!("group-{g}"));
        next += 1;
        for i in 0..per_group {
            group = group.child(Item::new(next, format!("item-{g}-{i}")));
            next += 1;
        }
        out.push(group);
    }
    out
}

fn last_id(tree: &[Item]) -> ItemId {
    flatten_items(tree).last().unwrap().item.id().clone()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy/find_item");

    for groups in [10, 50, 100] {
        let tree = make_tree(groups, 8);
        let worst = last_id(&tree);
        group.bench_with_input(BenchmarkId::new("worst_case", groups), &tree, |b, tree| {
            b.iter(|| black_box(find_item(tree, &worst)))
        });
    }

    group.finish();
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy/move_item");

    for groups in [10, 50, 100] {
        let tree = make_tree(groups, 8);
        let moved = last_id(&tree);
        // Move the deepest item to the front of the root sequence.
        group.bench_with_input(BenchmarkId::new("to_root", groups), &tree, |b, tree| {
            b.iter(|| black_box(move_item(tree, &moved, None, 0)))
        });
    }

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy/flatten_items");

    for groups in [10, 50, 100] {
        let tree = make_tree(groups, 8);
        group.bench_with_input(BenchmarkId::new("preorder", groups), &tree, |b, tree| {
            b.iter(|| black_box(flatten_items(tree)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find, bench_move, bench_flatten);
criterion_main!(benches);
