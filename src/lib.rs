//! This crate exposes a binary tree and a handful of classic algorithms over
//! it, mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is defined recursively using the notion of a [`Node`]. A
//! `Node` stores a value and may have up to two child `Node`s, a left one and
//! a right one. Every `Node` except the top-most one (the "root") has exactly
//! one parent.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Unlike a Binary Search Tree, no ordering is imposed between a `Node` and
//! its children. Queries that look for values (such as
//! [`Tree::next_larger`]) therefore have to visit every node.
//!
//! A few terms used throughout:
//!
//! - The *depth* of a node is the number of edges between it and the root.
//!   The root is at depth 0.
//! - Two nodes are *siblings* if they share a parent, and *cousins* if they
//!   are at the same depth with different parents.
//! - A *downward path* is a chain of nodes where each is a child of the one
//!   before it.
//!
//! Trees are built once and then only read. Nodes are identified by address,
//! so algorithms such as [`Tree::are_cousins`] take `&Node` handles borrowed
//! from the tree being queried.
//!
//! Every algorithm walks the tree with its own stack or queue, so even a
//! degenerate chain of hundreds of thousands of nodes is handled.
//!
//! ```
//! use bintree::Tree;
//!
//! let tree: Tree<i32> = "1,2,4,#,#,5,#,#,3,6,#,#,7,#,#".parse().unwrap();
//!
//! let five = tree.find(&5).unwrap();
//! let six = tree.find(&6).unwrap();
//! assert!(tree.are_cousins(five, six));
//!
//! let ancestor = tree.lowest_common_ancestor(five, six).unwrap();
//! assert_eq!(ancestor.value(), &1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod codec;
mod error;
mod node;
mod num;
mod tree;
mod walk;

pub use error::{DecodeError, FormatError, Overflow};
pub use node::Node;
pub use num::CheckedAdd;
pub use tree::Tree;
pub use walk::{LevelOrder, PreOrder};
