use std::collections::VecDeque;
use std::ptr;

use crate::node::Node;

/// A breadth-first walk over a subtree, yielding each level left to right.
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        self.queue.extend(v.children());
        Some(v)
    }
}

/// A depth-first, pre-order walk over a subtree (node, then its left subtree,
/// then its right subtree).
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited first.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}

/// A pre-order walk that also yields `None` for every absent child.
///
/// Unlike [`PreOrder`] the sequence pins down the shape of the subtree, so
/// [`assemble`] can rebuild it.
#[derive(Debug)]
pub(crate) struct Slots<'a, T> {
    stack: Vec<Option<&'a Node<T>>>,
}

impl<'a, T> Slots<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for Slots<'a, T> {
    type Item = Option<&'a Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.stack.pop()?;
        if let Some(v) = slot {
            self.stack.push(v.right());
            self.stack.push(v.left());
        }

        Some(slot)
    }
}

/// A node whose value has been read but whose children are still being
/// built.
struct Pending<T> {
    value: T,
    /// `Some` once the left subtree is complete.
    left: Option<Option<Node<T>>>,
}

/// Rebuilds one subtree from a pre-order listing where `None` marks an
/// absent child, the order [`Slots`] yields.
///
/// `next` is called once per slot and never again after the subtree is
/// complete. Its first error is returned as-is.
pub(crate) fn assemble<T, E>(
    mut next: impl FnMut() -> Result<Option<T>, E>,
) -> Result<Option<Node<T>>, E> {
    let mut pending: Vec<Pending<T>> = Vec::new();

    loop {
        let mut subtree = match next()? {
            Some(value) => {
                pending.push(Pending { value, left: None });
                continue;
            }
            None => None,
        };

        // Hand the finished subtree upwards until it lands in an open left
        // slot, closing every node whose right slot it fills on the way.
        loop {
            match pending.pop() {
                None => return Ok(subtree),
                Some(Pending { value, left: None }) => {
                    pending.push(Pending {
                        value,
                        left: Some(subtree),
                    });
                    break;
                }
                Some(Pending {
                    value,
                    left: Some(left),
                }) => subtree = Some(Node::with_children(value, left, subtree)),
            }
        }
    }
}

/// Where a node sits in a tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement<'a, T> {
    /// Number of edges between the root and the node.
    pub(crate) depth: usize,
    /// The node's parent, or `None` for the root.
    pub(crate) parent: Option<&'a Node<T>>,
}

/// Searches the subtree rooted at `root` for `target` by identity, returning
/// its depth and parent relative to `root`.
///
/// The search stops at the first match. Returns `None` if `target` is not
/// part of the subtree.
pub(crate) fn locate<'a, T>(root: &'a Node<T>, target: &Node<T>) -> Option<Placement<'a, T>> {
    if ptr::eq(root, target) {
        return Some(Placement {
            depth: 0,
            parent: None,
        });
    }

    let mut stack = vec![(root, 0)];
    while let Some((n, depth)) = stack.pop() {
        for child in n.children() {
            if ptr::eq(child, target) {
                return Some(Placement {
                    depth: depth + 1,
                    parent: Some(n),
                });
            }
            stack.push((child, depth + 1));
        }
    }

    None
}

/// The nodes from `root` down to `target` inclusive, found by identity.
///
/// Returns `None` if `target` is not part of the subtree rooted at `root`.
pub(crate) fn path_to<'a, T>(root: &'a Node<T>, target: &Node<T>) -> Option<Vec<&'a Node<T>>> {
    let mut path = Vec::new();
    let mut stack = vec![(root, 0)];

    while let Some((n, depth)) = stack.pop() {
        // In pre-order the last node seen at each shallower depth is an
        // ancestor of `n`.
        path.truncate(depth);
        path.push(n);
        if ptr::eq(n, target) {
            return Some(path);
        }

        stack.extend(n.right().map(|c| (c, depth + 1)));
        stack.extend(n.left().map(|c| (c, depth + 1)));
    }

    None
}
