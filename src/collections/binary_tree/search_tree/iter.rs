use std::iter::FusedIterator;
use std::mem;

use super::{BinarySearchTree, Branch, Node};

impl<K, C> IntoIterator for BinarySearchTree<K, C> {
    type Item = K;

    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            len: self.len,
        };
        iter.push_left_spine(mem::take(&mut self.root));
        self.len = 0;
        iter
    }
}

/// An owned iterator over the keys of a [`BinarySearchTree`] in ascending order.
pub struct IntoIter<K> {
    /// Nodes whose left subtree has already been pushed, nearest ancestor last.
    pub(crate) stack: Vec<Box<Node<K>>>,
    pub(crate) len: usize,
}

impl<K> IntoIter<K> {
    fn push_left_spine(&mut self, mut branch: Branch<K>) {
        while let Some(mut node) = branch.0.take() {
            branch = mem::take(&mut node.left);
            self.stack.push(node);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(mem::take(&mut node.right));
        self.len -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        // Drain rather than letting the boxes drop recursively, which could overflow the stack on
        // a degenerate tree.
        for _ in self.by_ref() {}
    }
}

impl<'a, K, C> IntoIterator for &'a BinarySearchTree<K, C> {
    type Item = &'a K;

    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

/// A borrowed iterator over the keys of a [`BinarySearchTree`] in ascending order.
pub struct Iter<'a, K> {
    pub(crate) stack: Vec<&'a Node<K>>,
    pub(crate) len: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut next: Option<&'a Node<K>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.len -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            len: self.len,
        }
    }
}
