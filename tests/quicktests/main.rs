use bintree::{Node, Tree};
use quickcheck::{Arbitrary, Gen};

mod chains;
mod encoding;

/// A tree where every node has at most one child, placed on a random side.
#[derive(Clone, Debug)]
pub(crate) struct Chain(pub(crate) Tree<i16>);

impl Arbitrary for Chain {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);

        let mut root = None;
        for _ in 0..len {
            let node = Node::new(i16::arbitrary(g));
            root = Some(match root {
                None => node,
                Some(child) if bool::arbitrary(g) => node.with_left(child),
                Some(child) => node.with_right(child),
            });
        }

        Self(Tree::new(root))
    }
}

/// A tree holding only negative values.
#[derive(Clone, Debug)]
pub(crate) struct Negative(pub(crate) Tree<i64>);

impl Arbitrary for Negative {
    fn arbitrary(g: &mut Gen) -> Self {
        let values = Vec::<i32>::arbitrary(g)
            .into_iter()
            .map(|v| -1 - i64::from(v).abs())
            .collect::<Vec<_>>();

        Self(Tree::new(balanced(&values)))
    }
}

/// Arrange `values` into a balanced tree with the middle value at the root.
fn balanced(values: &[i64]) -> Option<Node<i64>> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    Some(Node::with_children(
        values[mid],
        balanced(&values[..mid]),
        balanced(&values[mid + 1..]),
    ))
}
