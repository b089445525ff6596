//! The [`Node`] type and the algorithms that run over a subtree.
//!
//! Every walk here keeps its own stack or queue, so a subtree may be as deep
//! as memory allows.

use std::cmp;
use std::convert::Infallible;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::error::Overflow;
use crate::num::CheckedAdd;
use crate::walk::{self, PreOrder, Slots};

/// A single vertex of a binary tree. A `Node` owns its value and at most two
/// children. A `Node` with no children is a "leaf node".
///
/// # Examples
///
/// ```
/// use bintree::Node;
///
/// //     1
/// //    / \
/// //   2   3
/// let node = Node::new(1).with_left(Node::new(2)).with_right(Node::new(3));
///
/// assert_eq!(node.value(), &1);
/// assert_eq!(node.left().map(Node::value), Some(&2));
/// assert!(!node.is_leaf());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: Link::empty(),
            right: Link::empty(),
        }
    }

    /// Construct a new `Node` holding `value` with the given children.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: Link::new(left),
            right: Link::new(right),
        }
    }

    /// Returns this node with `left` as its left child, replacing any
    /// existing left subtree.
    pub fn with_left(self, left: Node<T>) -> Self {
        Self {
            left: Link::new(Some(left)),
            ..self
        }
    }

    /// Returns this node with `right` as its right child, replacing any
    /// existing right subtree.
    pub fn with_right(self, right: Node<T>) -> Self {
        Self {
            right: Link::new(Some(right)),
            ..self
        }
    }

    /// The value held by this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The existing children of this node, left before right.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Explode this node into its value and children.
    pub fn into_parts(mut self) -> (T, Option<Node<T>>, Option<Node<T>>) {
        let left = self.left.take();
        let right = self.right.take();
        (self.value, left, right)
    }

    /// The number of nodes on the shortest path from this node down to a
    /// leaf, counting both ends.
    ///
    /// A node with a single child is not a leaf so only that child is
    /// descended into.
    pub fn min_depth(&self) -> usize {
        let mut level = vec![self];
        let mut depth = 1;

        // A level without leaves always has a level below it.
        while !level.iter().any(|n| n.is_leaf()) {
            level = level.into_iter().flat_map(Self::children).collect();
            depth += 1;
        }

        depth
    }

    /// The number of nodes on the longest path from this node down to a
    /// leaf, counting both ends.
    pub fn max_depth(&self) -> usize {
        let mut level = vec![self];
        let mut depth = 0;

        while !level.is_empty() {
            level = level.into_iter().flat_map(Self::children).collect();
            depth += 1;
        }

        depth
    }

    /// The largest sum of any downward path in the subtree rooted at this
    /// node. See [`Tree::max_sum`][crate::Tree::max_sum].
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the sum of some path does not fit in `T`.
    pub fn max_sum(&self) -> Result<T, Overflow>
    where
        T: Copy + Ord + Default + CheckedAdd,
    {
        // Walking the pre-order backwards reaches every subtree before its
        // root. Each node pops the sums of its children and pushes its own.
        let descendants = PreOrder::new(Some(self)).skip(1).collect::<Vec<_>>();

        let mut below = Vec::new();
        for n in descendants.into_iter().rev() {
            let sum = n.path_sum(&mut below)?;
            below.push(sum);
        }

        Ok(self.path_sum(&mut below)?.best)
    }

    /// Combines the sums of this node's children, taken from the top of
    /// `below` (left on top of right), with its own value.
    fn path_sum(&self, below: &mut Vec<PathSum<T>>) -> Result<PathSum<T>, Overflow>
    where
        T: Copy + Ord + Default + CheckedAdd,
    {
        let zero = T::default();
        let add = |a: T, b: T| a.checked_add(&b).ok_or(Overflow);

        let left = self.left().and_then(|_| below.pop());
        let right = self.right().and_then(|_| below.pop());

        let left_extend = left.map_or(zero, |s| s.extend);
        let right_extend = right.map_or(zero, |s| s.extend);

        // A path may bend here, joining the best chains of both children. It
        // cannot bend again above this node so only one side extends upward.
        let bridge = add(add(self.value, left_extend)?, right_extend)?;
        let extend = cmp::max(
            zero,
            cmp::max(add(self.value, left_extend)?, add(self.value, right_extend)?),
        );

        let best = left
            .map(|s| s.best)
            .into_iter()
            .chain(right.map(|s| s.best))
            .fold(bridge, cmp::max);

        Ok(PathSum { extend, best })
    }

    /// Finds the deepest node in this subtree that has both `a` and `b` as
    /// descendants, where a node counts as its own descendant.
    ///
    /// Nodes are matched by identity. If only one of the targets lives in
    /// this subtree, that target is returned. If neither does, `None` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let root = Node::new(1)
    ///     .with_left(Node::new(2).with_left(Node::new(4)))
    ///     .with_right(Node::new(3));
    ///
    /// let two = root.left().unwrap();
    /// let four = two.left().unwrap();
    /// let three = root.right().unwrap();
    ///
    /// assert!(std::ptr::eq(root.lowest_common_ancestor(four, three).unwrap(), &root));
    /// assert!(std::ptr::eq(root.lowest_common_ancestor(two, four).unwrap(), two));
    /// ```
    pub fn lowest_common_ancestor<'a>(&'a self, a: &Node<T>, b: &Node<T>) -> Option<&'a Self> {
        match (walk::path_to(self, a), walk::path_to(self, b)) {
            // Both paths start here, so they share at least one node.
            (Some(to_a), Some(to_b)) => to_a
                .into_iter()
                .zip(to_b)
                .take_while(|(x, y)| ptr::eq(*x, *y))
                .last()
                .map(|(x, _)| x),
            (Some(path), None) | (None, Some(path)) => path.last().copied(),
            (None, None) => None,
        }
    }
}

/// The two results of the maximum path-sum walk for one subtree.
#[derive(Debug, Clone, Copy)]
struct PathSum<T> {
    /// Best sum of a path that starts at the subtree root and only goes down,
    /// clamped at zero.
    extend: T,
    /// Best sum of any path entirely inside the subtree.
    best: T,
}

/// An owned child subtree, or nothing.
///
/// Dropping, cloning, comparing and hashing a `Link` walk its subtree with an
/// explicit stack instead of recursing through every `Box`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub(crate) struct Link<T>(Option<Box<Node<T>>>);

impl<T> Link<T> {
    pub(crate) fn new(node: Option<Node<T>>) -> Self {
        Self(node.map(Box::new))
    }

    pub(crate) fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn as_deref(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    pub(crate) fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Detaches the subtree, leaving the link empty.
    pub(crate) fn take(&mut self) -> Option<Node<T>> {
        self.0.take().map(|n| *n)
    }

    /// Swaps in `node`, returning the previous subtree.
    pub(crate) fn replace(&mut self, node: Option<Node<T>>) -> Option<Node<T>> {
        let old = self.take();
        self.0 = node.map(Box::new);
        old
    }

    /// The values of the subtree in pre-order, with `None` for every absent
    /// child. Two subtrees are equal exactly when these sequences are.
    fn shape(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        Slots::new(self.as_deref()).map(|slot| slot.map(Node::value))
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut stack = self.0.take().into_iter().collect::<Vec<_>>();
        while let Some(mut n) = stack.pop() {
            // `n` is freed at the end of the loop body with empty links.
            stack.extend(n.left.0.take());
            stack.extend(n.right.0.take());
        }
    }
}

impl<T> Clone for Link<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut slots = Slots::new(self.as_deref());
        let cloned = walk::assemble(|| {
            Ok::<_, Infallible>(slots.next().flatten().map(|n| n.value.clone()))
        });

        match cloned {
            Ok(root) => Self::new(root),
            Err(never) => match never {},
        }
    }
}

impl<T> PartialEq for Link<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape().eq(other.shape())
    }
}

impl<T> Eq for Link<T> where T: Eq {}

impl<T> Hash for Link<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in self.shape() {
            value.hash(state);
        }
    }
}

impl<T> Debug for Link<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
