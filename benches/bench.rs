use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bintree::{Node, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a full tree holding `0..num_nodes`, with the middle value at the root.
fn get_full_tree(num_levels: usize) -> Tree<i64> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i64).collect::<Vec<_>>();
    Tree::new(fill_full_tree(&xs))
}

/// Recursive helper for [`get_full_tree`].
fn fill_full_tree(xs: &[i64]) -> Option<Node<i64>> {
    if xs.is_empty() {
        return None;
    }
    let mid = xs.len() / 2;
    Some(Node::with_children(
        xs[mid],
        fill_full_tree(&xs[..mid]),
        fill_full_tree(&xs[mid + 1..]),
    ))
}

/// Builds a degenerate tree where every node has only a right child. Values
/// alternate in sign so `max_sum` has work to do.
fn get_chain_tree(num_levels: usize) -> Tree<i64> {
    let root = (0..num_nodes_in_full_tree(num_levels) as i64)
        .rev()
        .map(|x| if x % 2 == 0 { x } else { -x })
        .fold(None, |child: Option<Node<i64>>, x| {
            Some(Node::with_children(x, None, child))
        });
    Tree::new(root)
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs it against full and degenerate
/// trees of various sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i64>)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let tree_tests = [
            ("full", get_full_tree(num_levels)),
            ("chain", get_chain_tree(num_levels)),
        ];
        let num_nodes = num_nodes_in_full_tree(num_levels);
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, num_nodes);

            group.bench_with_input(id, &tree, |b, tree| b.iter(|| f(black_box(tree))));
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "min_depth", |tree| {
        black_box(tree.min_depth());
    });
    bench_helper(c, "max_depth", |tree| {
        black_box(tree.max_depth());
    });
    bench_helper(c, "max_sum", |tree| {
        black_box(tree.max_sum());
    });
    bench_helper(c, "next_larger", |tree| {
        black_box(tree.next_larger(&42));
    });
    bench_helper(c, "lowest_common_ancestor", |tree| {
        let deepest = tree.pre_order().last();
        if let (Some(root), Some(deepest)) = (tree.root(), deepest) {
            black_box(tree.lowest_common_ancestor(root.left().unwrap_or(root), deepest));
        }
    });
    bench_helper(c, "are_cousins", |tree| {
        if let Some(root) = tree.root() {
            let deepest = tree.pre_order().last().unwrap_or(root);
            black_box(tree.are_cousins(root, deepest));
        }
    });
    bench_helper(c, "count_evens", |tree| {
        black_box(tree.count_evens());
    });
    bench_helper(c, "serialize", |tree| {
        black_box(tree.serialize());
    });

    let mut group = c.benchmark_group("deserialize");
    for num_levels in [3, 7, 11, 15] {
        let num_nodes = num_nodes_in_full_tree(num_levels);
        let inputs = [
            ("full", get_full_tree(num_levels).serialize()),
            ("chain", get_chain_tree(num_levels).serialize()),
        ];
        for (name, encoded) in inputs {
            let id = BenchmarkId::new(name, num_nodes);

            group.bench_with_input(id, &encoded, |b, encoded| {
                b.iter(|| Tree::<i64>::deserialize(black_box(encoded)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
