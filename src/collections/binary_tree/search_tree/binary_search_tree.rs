use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};

use log::trace;

use super::{Branch, Iter, Node};
use crate::collections::traits::{Compare, Natural};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

/// An unbalanced binary search tree of keys, ordered by a [`Compare`]r supplied at construction.
///
/// For every node, all keys in its left subtree compare less than its own key and all keys in its
/// right subtree compare greater. Keys are unique under the comparator. No rebalancing is done, so
/// the tree's height depends on the order of insertion.
///
/// Keys are inserted by reference and cloned into the tree (via [`ToOwned`]), leaving the caller's
/// value untouched. All lookups accept any borrowed form `Q` of the key that the comparator can
/// order, so a `BinarySearchTree<String>` can be searched with a `&str`.
///
/// It is a logic error for a key to be modified in a way that changes its order relative to the
/// other keys while it is in the tree. Because of this, the tree doesn't hand out mutable access
/// to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the tree.
/// - `h`: The height of the tree, `O(log n)` for random insertion orders and `O(n)` at worst.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `search` | `O(h)` |
/// | `minimum` / `maximum` | `O(h)` |
/// | `predecessor` / `successor` | `O(h)` |
/// | `insert` | `O(h)` |
/// | `delete` | `O(h)` |
/// | `clear` | `O(n)` |
pub struct BinarySearchTree<K, C = Natural> {
    pub(crate) root: Branch<K>,
    pub(crate) len: usize,
    pub(crate) comparator: C,
}

impl<K> BinarySearchTree<K> {
    /// Creates an empty tree ordered by the keys' [`Ord`] implementation.
    pub const fn new() -> BinarySearchTree<K> {
        BinarySearchTree::with_comparator(Natural)
    }
}

impl<K, C> BinarySearchTree<K, C> {
    /// Creates an empty tree ordered by the provided `comparator`.
    pub const fn with_comparator(comparator: C) -> BinarySearchTree<K, C> {
        BinarySearchTree {
            root: Branch::empty(),
            len: 0,
            comparator,
        }
    }

    /// Returns the number of keys in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the comparator used to order the tree.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the smallest key in the tree, or None if it is empty.
    pub fn minimum(&self) -> Option<&K> {
        self.root.minimum().map(|node| &node.key)
    }

    /// Returns the largest key in the tree, or None if it is empty.
    pub fn maximum(&self) -> Option<&K> {
        self.root.maximum().map(|node| &node.key)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// a height of 0.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node<K>, usize)> = self.root.as_deref()
            .map(|root| (root, 1))
            .into_iter()
            .collect();
        let mut height = 0;

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Removes and drops every key in the tree. Nodes are released in post-order, so both subtrees
    /// of a node are gone before the node itself.
    pub fn clear(&mut self) {
        let released = self.root.release();
        trace!("Released {released} nodes from BinarySearchTree");
        self.len = 0;
    }

    /// Returns an iterator over all keys in the tree in ascending order, as references.
    pub fn iter(&self) -> Iter<'_, K> {
        self.into_iter()
    }

    /// Writes every key to `out` in ascending order, one per line.
    pub fn print<W: Write>(&self, mut out: W) -> io::Result<()>
    where
        K: Display,
    {
        for key in self.iter() {
            writeln!(out, "{key}")?;
        }
        Ok(())
    }
}

impl<K, C> BinarySearchTree<K, C> {
    /// Descends from the root towards `key`, returning the key that the search stopped at.
    ///
    /// If the tree contains a key equal to `key` that key is returned. Otherwise the last key
    /// visited during the unsuccessful search is returned: the key of the node that `key` would be
    /// inserted below. The result is only None if the tree is empty. Compare the result with `key`
    /// to tell the two cases apart, or use [`get`](BinarySearchTree::get).
    pub fn search<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut current = self.root.as_deref()?;

        loop {
            let next = match self.comparator.compare(key, current.key.borrow()) {
                Ordering::Less => current.left.as_deref(),
                Ordering::Greater => current.right.as_deref(),
                Ordering::Equal => return Some(&current.key),
            };

            match next {
                Some(node) => current = node,
                None => return Some(&current.key),
            }
        }
    }

    /// Returns the key in the tree equal to `key`, or None if there isn't one.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let found = self.search(key)?;
        self.comparator.equal(key, found.borrow()).then_some(found)
    }

    /// Returns true if the tree contains a key equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns the largest key in the tree that is strictly less than `key`. `key` itself doesn't
    /// need to be in the tree.
    pub fn predecessor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut current = self.root.as_deref();
        let mut lowest_smaller_parent: Option<&Node<K>> = None;

        while let Some(node) = current {
            match self.comparator.compare(key, node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => {
                    lowest_smaller_parent = Some(node);
                    current = node.right.as_deref();
                },
                Ordering::Equal => {
                    if let Some(max) = node.left.maximum() {
                        return Some(&max.key);
                    }
                    break;
                },
            }
        }

        lowest_smaller_parent.map(|node| &node.key)
    }

    /// Returns the smallest key in the tree that is strictly greater than `key`. `key` itself
    /// doesn't need to be in the tree.
    pub fn successor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut current = self.root.as_deref();
        let mut lowest_greater_parent: Option<&Node<K>> = None;

        while let Some(node) = current {
            match self.comparator.compare(key, node.key.borrow()) {
                Ordering::Less => {
                    lowest_greater_parent = Some(node);
                    current = node.left.as_deref();
                },
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => {
                    if let Some(min) = node.right.minimum() {
                        return Some(&min.key);
                    }
                    break;
                },
            }
        }

        lowest_greater_parent.map(|node| &node.key)
    }

    /// Inserts a copy of `key` into the tree, returning true if it was added. If an equal key is
    /// already present the tree is left unchanged and false is returned, without cloning `key`.
    pub fn insert<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ToOwned<Owned = K> + ?Sized,
    {
        match self.vacant_slot(key) {
            Some(slot) => slot.0 = Some(Box::new(Node::leaf(key.to_owned()))),
            None => return false,
        }

        self.len += 1;
        true
    }

    /// Inserts `key` by value, returning true if it was added. If an equal key is already present
    /// the tree is left unchanged and `key` is dropped.
    pub fn insert_owned(&mut self, key: K) -> bool
    where
        C: Compare<K>,
    {
        match self.vacant_slot(&key) {
            Some(slot) => slot.0 = Some(Box::new(Node::leaf(key))),
            None => return false,
        }

        self.len += 1;
        true
    }

    /// Removes the key equal to `key` from the tree, returning true if there was one.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes the key equal to `key` from the tree and returns it, or None if there isn't one.
    ///
    /// A node with two children is replaced by its in-order successor (the minimum of its right
    /// subtree), which is detached from its original position and takes over both of the removed
    /// node's subtrees.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        // The slot is the link from the parent (or the root itself) that holds the current node.
        let mut slot = &mut self.root;
        loop {
            let ordering = self.comparator.compare(key, slot.0.as_ref()?.key.borrow());
            match ordering {
                Ordering::Less => slot = &mut slot.0.as_mut()?.left,
                Ordering::Greater => slot = &mut slot.0.as_mut()?.right,
                Ordering::Equal => break,
            }
        }

        let mut target = slot.0.take()?;
        trace!("Deleting BinarySearchTree node with {} children", target.child_count());

        slot.0 = match (target.left.0.take(), target.right.0.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Branch::from(right);
                // UNREACHABLE: right holds at least one node, so it has a minimum.
                let mut successor = right.take_minimum().unreachable();
                successor.left = Branch::from(left);
                successor.right = right;
                Some(successor)
            },
        };

        self.len -= 1;
        Some(target.key)
    }

    /// Finds the empty slot that `key` would be inserted into, or None if an equal key is already
    /// present.
    fn vacant_slot<Q>(&mut self, key: &Q) -> Option<&mut Branch<K>>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut slot = &mut self.root;
        while let Some(ref mut node) = slot.0 {
            match self.comparator.compare(key, node.key.borrow()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return None,
            }
        }
        Some(slot)
    }
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Drop for BinarySearchTree<K, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, C: Compare<K>> Extend<K> for BinarySearchTree<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_owned(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for BinarySearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Clone, C: Clone + Compare<K>> Clone for BinarySearchTree<K, C> {
    fn clone(&self) -> Self {
        // Inserting in pre-order reproduces the same shape.
        let mut tree = BinarySearchTree::with_comparator(self.comparator.clone());
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            tree.insert_owned(node.key.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        tree
    }
}

impl<K: Debug, C> Debug for BinarySearchTree<K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Display, C> Display for BinarySearchTree<K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, key) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "}}")
    }
}
