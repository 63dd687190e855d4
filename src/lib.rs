//! This crate exposes an ordered Binary Search Tree (BST) over unique
//! integer values, built for studying the tree's mutation algorithms.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree here is deliberately
//! *not* self-balancing, so its height, and with it the cost of every
//! operation, is purely a function of the order values were inserted in.
//!
//! The distinguishing choice of this implementation is that every structural
//! mutation works on the *slot* owning a node (the root field, or a node's
//! child field) rather than on the node itself, which is what lets deletion
//! splice nodes out in place. See the [`boxed`] module for the details.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod boxed;
