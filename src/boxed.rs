//! A mutable BST with uniquely owned, heap-allocated nodes. Every structural
//! mutation goes through the owning *slot* (the `root` field or a node's
//! `left`/`right` field), so insertion and deletion can splice nodes in place
//! without parent pointers or unsafe code.
//!
//! The tree does not rebalance itself: its shape is purely a function of the
//! insertion order. Keys are unique; inserting a duplicate is rejected rather
//! than merged.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::boxed::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! assert!(tree.add(1));
//! assert!(tree.contains(1));
//!
//! // Inserting the same value again is rejected.
//! assert!(!tree.add(1));
//! assert_eq!(tree.length(), 1);
//!
//! // Removing reports whether the value was present.
//! assert!(tree.remove(1));
//! assert!(!tree.remove(1));
//! assert!(!tree.contains(1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// The storage location holding an owning reference to a node: the tree's
/// `root` field or a node's `left`/`right` field. `None` marks an absent
/// child. Lookups that need to support in-place replacement (see
/// [`Tree::locate`]) hand out the slot itself rather than a view of the node.
pub type Link = Option<Box<Node>>;

/// One tree element: a value and the two child slots it exclusively owns.
#[derive(Debug)]
pub struct Node {
    value: i64,
    left: Link,
    right: Link,
}

impl Node {
    fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Overwrites the value stored in this node. The caller is responsible
    /// for keeping the tree's ordering invariant intact; see
    /// [`Tree::increment_all`] for an operation that knowingly gives that up.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An unbalanced Binary Search Tree over unique `i64` values. This can be
/// used for inserting, finding, and deleting values; see the
/// [module docs][crate::boxed] for an overview.
#[derive(Debug, Default)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The node at the top of the tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts the given value as a new leaf at its ordering position and
    /// returns `true`. If the value is already present the tree is left
    /// unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.add(2));
    /// assert!(tree.add(1));
    /// assert!(!tree.add(2));
    /// assert_eq!(tree.length(), 2);
    /// ```
    pub fn add(&mut self, value: i64) -> bool {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Equal => return false,
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
            }
        }
        *cur = Some(Box::new(Node::new(value)));
        true
    }

    /// Returns `true` if the tree holds the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(3));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        false
    }

    /// Finds the slot holding the node with the given value, or `None` if the
    /// value is absent. The returned slot is always occupied.
    ///
    /// Handing out the slot rather than the node lets the caller replace the
    /// node in place, which is what deletion is built on. Doing so makes the
    /// caller responsible for preserving the ordering invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// let slot = tree.locate(3).unwrap();
    /// assert_eq!(slot.as_deref().unwrap().value(), 3);
    ///
    /// assert!(tree.locate(42).is_none());
    /// ```
    pub fn locate(&mut self, value: i64) -> Option<&mut Link> {
        Self::slot_of(&mut self.root, value)
    }

    /// Finds the slot holding the *parent* of the node with the given value.
    /// Returns `None` if the value is absent or held by the root, which has
    /// no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// let parent = tree.locate_parent(1).unwrap();
    /// assert_eq!(parent.as_deref().unwrap().value(), 2);
    ///
    /// // The root has no parent.
    /// assert!(tree.locate_parent(2).is_none());
    /// ```
    pub fn locate_parent(&mut self, value: i64) -> Option<&mut Link> {
        let mut cur = &mut self.root;
        loop {
            let (found, go_left) = match cur.as_deref() {
                None => return None,
                Some(node) => {
                    let here = node.left.as_deref().map_or(false, |l| l.value == value)
                        || node.right.as_deref().map_or(false, |r| r.value == value);
                    (here, value < node.value)
                }
            };
            if found {
                return Some(cur);
            }
            let node = cur.as_deref_mut()?;
            cur = if go_left { &mut node.left } else { &mut node.right };
        }
    }

    /// Finds the slot of the node that replaces the given value on deletion:
    /// the rightmost descendant of the value's *left* subtree. Returns `None`
    /// if the value is absent or its node has no left child.
    ///
    /// Note that despite the name this is the in-order *predecessor*: the
    /// largest value strictly less than the target. [`Tree::remove`] promotes
    /// exactly this node, so the behavior is part of the deletion contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree: Tree = [25, 10, 50, 7, 15, 53].into_iter().collect();
    ///
    /// let successor = tree.locate_successor(25).unwrap();
    /// assert_eq!(successor.as_deref().unwrap().value(), 15);
    ///
    /// // No left child, no "successor".
    /// assert!(tree.locate_successor(7).is_none());
    /// ```
    pub fn locate_successor(&mut self, value: i64) -> Option<&mut Link> {
        let slot = Self::slot_of(&mut self.root, value)?;
        let node = slot.as_deref_mut()?;
        if node.left.is_none() {
            return None;
        }
        Some(Self::rightmost(&mut node.left))
    }

    /// Removes the node holding the given value and returns `true`, or
    /// returns `false` without mutating if the value is absent.
    ///
    /// A node with two children is not spliced out directly: the value of its
    /// in-order predecessor (see [`Tree::locate_successor`]) is copied over
    /// its own, and the predecessor, which has no right child by construction,
    /// is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree: Tree = [25, 10, 50, 7, 15, 53].into_iter().collect();
    ///
    /// // Deleting the root with two children promotes its predecessor.
    /// assert!(tree.remove(25));
    /// assert_eq!(tree.root().unwrap().value(), 15);
    /// assert_eq!(tree.length(), 5);
    ///
    /// assert!(!tree.remove(25));
    /// ```
    pub fn remove(&mut self, value: i64) -> bool {
        let slot = match Self::slot_of(&mut self.root, value) {
            Some(slot) => slot,
            None => return false,
        };
        let node = match slot.as_deref_mut() {
            Some(node) => node,
            None => return false,
        };
        if node.left.is_some() && node.right.is_some() {
            let predecessor = Self::rightmost(&mut node.left);
            let promoted = predecessor
                .as_deref_mut()
                .expect("a node with two children has a rightmost left descendant");
            node.value = promoted.value;
            Self::splice(predecessor);
        } else {
            Self::splice(slot);
        }
        true
    }

    /// Visits every node exactly once in breadth-first (level) order,
    /// left-to-right within a level. A no-op on an empty tree.
    pub fn for_each_breadth_first(&self, mut visit: impl FnMut(&Node)) {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visit(node);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
    }

    /// Like [`Tree::for_each_breadth_first`] but hands the visitor exclusive
    /// access, so it may mutate each node's value in place. Mutations that
    /// reorder values relative to their ancestors break the ordering
    /// invariant and are not repaired.
    pub fn for_each_breadth_first_mut(&mut self, mut visit: impl FnMut(&mut Node)) {
        let mut queue: VecDeque<&mut Node> = VecDeque::new();
        if let Some(root) = self.root.as_deref_mut() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            visit(&mut *node);
            if let Some(left) = node.left.as_deref_mut() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref_mut() {
                queue.push_back(right);
            }
        }
    }

    /// Every value in the tree, in breadth-first order.
    pub fn values(&self) -> Vec<i64> {
        let mut values = Vec::new();
        self.for_each_breadth_first(|node| values.push(node.value));
        values
    }

    /// The number of nodes in the tree, counted by a full traversal.
    pub fn length(&self) -> usize {
        let mut len = 0;
        self.for_each_breadth_first(|_| len += 1);
        len
    }

    /// Adds 1 to every value in place, visiting in breadth-first order, and
    /// returns the tree for chaining.
    ///
    /// This can break the ordering invariant: an incremented value may
    /// collide with or pass an ancestor. That is a documented property of the
    /// operation and is not repaired here. Lookups only remain reliable when
    /// every value moves in lockstep, as they do under this operation on a
    /// duplicate-free tree. A value at `i64::MAX` wraps to `i64::MIN` rather
    /// than panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    /// tree.increment_all();
    ///
    /// assert_eq!(tree.values(), vec![3, 2, 4]);
    /// ```
    pub fn increment_all(&mut self) -> &mut Self {
        self.for_each_breadth_first_mut(|node| node.value = node.value.wrapping_add(1));
        self
    }

    /// Copies the tree, then adds 1 to every value of the original, returning
    /// the pre-increment copy: the postfix counterpart of
    /// [`Tree::increment_all`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::boxed::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    /// let before = tree.increment_all_then_copy();
    ///
    /// assert_eq!(before.values(), vec![2, 1, 3]);
    /// assert_eq!(tree.values(), vec![3, 2, 4]);
    /// ```
    pub fn increment_all_then_copy(&mut self) -> Self {
        let copy = self.clone();
        self.increment_all();
        copy
    }

    /// Walks from the given slot to the slot holding `value`. The walk peeks
    /// at each node immutably to pick a direction, then reborrows mutably to
    /// descend, so the occupied slot itself can be returned.
    fn slot_of(mut cur: &mut Link, value: i64) -> Option<&mut Link> {
        loop {
            let ordering = match cur.as_deref() {
                None => return None,
                Some(node) => value.cmp(&node.value),
            };
            match ordering {
                Ordering::Equal => return Some(cur),
                Ordering::Less => cur = &mut cur.as_deref_mut()?.left,
                Ordering::Greater => cur = &mut cur.as_deref_mut()?.right,
            }
        }
    }

    /// Descends right from the given slot until there is no right child and
    /// returns that slot. An empty slot is returned as-is.
    fn rightmost(mut cur: &mut Link) -> &mut Link {
        while cur.as_deref().map_or(false, |node| node.right.is_some()) {
            cur = &mut cur
                .as_deref_mut()
                .expect("the loop condition saw an occupied slot")
                .right;
        }
        cur
    }

    /// Splices the node out of the given slot, replacing it with its left
    /// child if present, else its right child, else nothing. Callers
    /// guarantee the node has at most one child.
    fn splice(slot: &mut Link) {
        if let Some(mut node) = slot.take() {
            *slot = match (node.left.take(), node.right.take()) {
                (left @ Some(_), _) => left,
                (None, right) => right,
            };
        }
    }
}

/// Deep copy by level-order reinsertion: every value of the source is
/// re-`add`ed, in breadth-first order, into a fresh tree.
///
/// The copy holds the same set of values and satisfies the ordering
/// invariant, but its *shape* is the one produced by inserting the values in
/// level order, which need not match the source's shape if the source was
/// built in a different order. This is a known property of the copy, not a bug.
impl Clone for Tree {
    fn clone(&self) -> Self {
        self.values().into_iter().collect()
    }
}

/// Bulk construction: inserts each value in sequence order; duplicates later
/// in the sequence are silently rejected.
///
/// # Examples
///
/// ```
/// use ordered_tree::boxed::Tree;
///
/// let tree: Tree = [25, 10, 50, 10].into_iter().collect();
/// assert_eq!(tree.length(), 3);
/// ```
impl FromIterator<i64> for Tree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for value in iter {
            tree.add(value);
        }
        tree
    }
}

/// Collects every node first, detaching children along the way, then releases
/// them one by one. Keeping teardown iterative means a deep unbalanced spine
/// cannot overflow the stack, which the default recursive `Box` drop would.
impl Drop for Tree {
    fn drop(&mut self) {
        let mut nodes = Vec::new();
        if let Some(root) = self.root.take() {
            nodes.push(root);
        }
        let mut i = 0;
        while i < nodes.len() {
            if let Some(left) = nodes[i].left.take() {
                nodes.push(left);
            }
            if let Some(right) = nodes[i].right.take() {
                nodes.push(right);
            }
            i += 1;
        }
    }
}

/// Renders a banner, one value per line in breadth-first order, and the node
/// count.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "*".repeat(32))?;
        let values = self.values();
        for value in &values {
            writeln!(f, "{}", value)?;
        }
        writeln!(f, "size: {}", values.len())?;
        write!(f, "{}", "*".repeat(32))
    }
}

/// Checks the ordering invariant by propagating bounds down the tree.
#[cfg(test)]
fn is_ordered(link: &Link, low: Option<i64>, high: Option<i64>) -> bool {
    match link.as_deref() {
        None => true,
        Some(node) => {
            low.map_or(true, |low| node.value > low)
                && high.map_or(true, |high| node.value < high)
                && is_ordered(&node.left, low, Some(node.value))
                && is_ordered(&node.right, Some(node.value), high)
        }
    }
}
