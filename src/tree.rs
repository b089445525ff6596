//! The [`Tree`] wrapper and the queries that run over a whole tree.
//!
//! # Examples
//!
//! ```
//! use bintree::{Node, Tree};
//!
//! //        1
//! //       / \
//! //      2   3
//! //     / \   \
//! //    4   5   6
//! let tree = Tree::from(
//!     Node::new(1)
//!         .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
//!         .with_right(Node::new(3).with_right(Node::new(6))),
//! );
//!
//! assert_eq!(tree.min_depth(), 3);
//! assert_eq!(tree.max_depth(), 3);
//! assert_eq!(tree.max_sum(), Ok(5 + 2 + 1 + 3 + 6));
//! assert_eq!(tree.next_larger(&3), Some(&4));
//!
//! let four = tree.find(&4).unwrap();
//! let six = tree.find(&6).unwrap();
//! assert!(tree.are_cousins(four, six));
//! assert_eq!(tree.lowest_common_ancestor(four, six).map(|n| *n.value()), Some(1));
//!
//! let encoded = tree.serialize();
//! assert_eq!(encoded, "1,2,4,#,#,5,#,#,3,#,6,#,#");
//! assert_eq!(Tree::deserialize(&encoded), Ok(tree));
//! ```

use std::fmt::{self, Display};
use std::ops::Rem;
use std::str::FromStr;

use crate::codec;
use crate::error::{DecodeError, Overflow};
use crate::node::{Link, Node};
use crate::num::CheckedAdd;
use crate::walk::{self, LevelOrder, PreOrder};

/// A binary tree: an optional root [`Node`] and the algorithms that run over
/// it. A tree without a root is empty.
///
/// Nothing here mutates individual nodes; the root can only be swapped out
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Self::new(Some(root))
    }
}

impl<T> Tree<T> {
    /// Generates a new tree with the given root.
    pub fn new(root: Option<Node<T>>) -> Self {
        Self {
            root: Link::new(root),
        }
    }

    /// Generates a new, empty tree.
    pub fn empty() -> Self {
        Self {
            root: Link::empty(),
        }
    }

    /// The root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Swaps in a new root, returning the old one.
    pub fn replace_root(&mut self, root: Option<Node<T>>) -> Option<Node<T>> {
        self.root.replace(root)
    }

    /// Consumes the tree, returning its root.
    pub fn into_root(mut self) -> Option<Node<T>> {
        self.root.take()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Visits every node level by level, left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Visits every node in pre-order: a node, then its left subtree, then
    /// its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// The shallowest node holding `value`, ties broken left to right.
    ///
    /// Useful for getting hold of the node handles taken by
    /// [`Tree::are_cousins`] and [`Tree::lowest_common_ancestor`].
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.level_order().find(|n| n.value() == value)
    }

    /// The number of nodes on the shortest path from the root to a leaf.
    /// Returns 0 for the empty tree.
    ///
    /// ```
    /// use bintree::{Node, Tree};
    ///
    /// // A node with one child is not a leaf.
    /// let tree = Tree::from(Node::new(1).with_right(Node::new(2)));
    /// assert_eq!(tree.min_depth(), 2);
    /// ```
    pub fn min_depth(&self) -> usize {
        self.root().map_or(0, Node::min_depth)
    }

    /// The number of nodes on the longest path from the root to a leaf.
    /// Returns 0 for the empty tree.
    pub fn max_depth(&self) -> usize {
        self.root().map_or(0, Node::max_depth)
    }

    /// The largest sum of values along any downward path in the tree.
    ///
    /// A path is a chain of nodes joined by parent/child links. It may start
    /// and end at any node and need not touch the root or a leaf, but it
    /// cannot branch, so it bends at most once. `T::default()` is taken as
    /// zero, and the empty tree sums to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the best path sum (or a path compared against
    /// it) does not fit in `T`.
    ///
    /// ```
    /// use bintree::{Node, Overflow, Tree};
    ///
    /// let tree = Tree::from(Node::new(-2).with_left(Node::new(-7)).with_right(Node::new(-1)));
    /// assert_eq!(tree.max_sum(), Ok(-1));
    ///
    /// let tree = Tree::from(Node::new(2).with_left(Node::new(-7)).with_right(Node::new(5)));
    /// assert_eq!(tree.max_sum(), Ok(7));
    ///
    /// let tree = Tree::from(Node::new(i8::MAX).with_right(Node::new(1)));
    /// assert_eq!(tree.max_sum(), Err(Overflow));
    /// ```
    pub fn max_sum(&self) -> Result<T, Overflow>
    where
        T: Copy + Ord + Default + CheckedAdd,
    {
        self.root().map_or(Ok(T::default()), Node::max_sum)
    }

    /// The sum of every value in the tree. The empty tree sums to
    /// `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a running total, taken in pre-order, does not
    /// fit in `T`.
    pub fn sum_values(&self) -> Result<T, Overflow>
    where
        T: Copy + Default + CheckedAdd,
    {
        self.pre_order()
            .try_fold(T::default(), |acc, n| acc.checked_add(n.value()).ok_or(Overflow))
    }

    /// The number of nodes holding an even value.
    ///
    /// ```
    /// use bintree::{Node, Tree};
    ///
    /// let tree = Tree::from(Node::new(1).with_left(Node::new(2)).with_right(Node::new(-4)));
    /// assert_eq!(tree.count_evens(), 2);
    /// ```
    pub fn count_evens(&self) -> usize
    where
        T: Copy + Rem<Output = T> + PartialEq + From<u8>,
    {
        let (zero, two) = (T::from(0u8), T::from(2u8));
        self.pre_order()
            .filter(|n| *n.value() % two == zero)
            .count()
    }

    /// The smallest value in the tree strictly greater than `lower_bound`.
    ///
    /// The tree is not assumed to be ordered so every node is visited.
    ///
    /// ```
    /// use bintree::{Node, Tree};
    ///
    /// let tree = Tree::from(Node::new(5).with_left(Node::new(9)).with_right(Node::new(5)));
    /// assert_eq!(tree.next_larger(&4), Some(&5));
    /// assert_eq!(tree.next_larger(&5), Some(&9));
    /// assert_eq!(tree.next_larger(&9), None);
    /// ```
    pub fn next_larger(&self, lower_bound: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.level_order()
            .map(Node::value)
            .filter(|v| *v > lower_bound)
            .min()
    }

    /// The number of values in the tree strictly greater than `lower_bound`.
    pub fn num_greater(&self, lower_bound: &T) -> usize
    where
        T: Ord,
    {
        self.level_order()
            .filter(|n| n.value() > lower_bound)
            .count()
    }

    /// Whether `a` and `b` are cousins: both in this tree, at the same depth,
    /// with different parents.
    ///
    /// Nodes are compared by identity, so pass handles borrowed from this
    /// tree. Siblings, a node and itself, and nodes that are not part of the
    /// tree are never cousins.
    pub fn are_cousins(&self, a: &Node<T>, b: &Node<T>) -> bool {
        let root = match self.root() {
            Some(v) => v,
            None => return false,
        };

        let (a, b) = match (walk::locate(root, a), walk::locate(root, b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        if a.depth != b.depth {
            return false;
        }

        match (a.parent, b.parent) {
            (Some(pa), Some(pb)) => !std::ptr::eq(pa, pb),
            // Only the root has no parent and it has no cousins.
            _ => false,
        }
    }

    /// The deepest node that has both `a` and `b` as descendants, where a
    /// node counts as its own descendant.
    ///
    /// Nodes are compared by identity. If only one of them is in the tree it
    /// is returned; if neither is, or the tree is empty, `None` is.
    pub fn lowest_common_ancestor(&self, a: &Node<T>, b: &Node<T>) -> Option<&Node<T>> {
        self.root()
            .and_then(|root| root.lowest_common_ancestor(a, b))
    }

    /// Serialize this tree with the default [`Format`][codec::Format].
    pub fn serialize(&self) -> String
    where
        T: Display,
    {
        codec::serialize(self)
    }

    /// Deserialize a tree written with the default
    /// [`Format`][codec::Format].
    pub fn deserialize(input: &str) -> Result<Self, DecodeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        codec::deserialize(input)
    }
}

/// Writes the tree in the default serialized form.
impl<T> Display for Tree<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<T> FromStr for Tree<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}
