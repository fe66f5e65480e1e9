use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// A possibly empty link to a child node. The root of a tree is a Branch too, so any slot that
/// can hold a node is handled the same way during restructuring.
pub(crate) struct Branch<K>(pub Option<Box<Node<K>>>);

pub(crate) struct Node<K> {
    pub left: Branch<K>,
    pub right: Branch<K>,
    pub key: K,
}

impl<K> Node<K> {
    pub const fn leaf(key: K) -> Node<K> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
        }
    }

    pub const fn child_count(&self) -> usize {
        self.left.0.is_some() as usize + self.right.0.is_some() as usize
    }
}

impl<K> Branch<K> {
    pub const fn empty() -> Branch<K> {
        Branch(None)
    }

    /// Returns the node furthest to the left of this branch.
    pub fn minimum(&self) -> Option<&Node<K>> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node)
    }

    /// Returns the node furthest to the right of this branch.
    pub fn maximum(&self) -> Option<&Node<K>> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node)
    }

    /// Detaches the minimum node of this branch, moving its right child up into the slot it
    /// occupied. The detached node is returned without children.
    pub fn take_minimum(&mut self) -> Option<Box<Node<K>>> {
        let mut slot = self;
        while slot.0.as_ref()?.left.0.is_some() {
            slot = &mut slot.0.as_mut()?.left;
        }

        let mut minimum = slot.0.take()?;
        slot.0 = minimum.right.0.take();
        Some(minimum)
    }

    /// Counts the nodes below this branch.
    pub fn node_count(&self) -> usize {
        let mut stack: Vec<&Node<K>> = self.0.as_deref().into_iter().collect();
        let mut count = 0;

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.0.as_deref());
            stack.extend(node.right.0.as_deref());
        }

        count
    }

    /// Removes every node below this branch in post-order, returning the number released. Both
    /// subtrees of a node are released before the node itself.
    pub fn release(&mut self) -> usize {
        let mut stack: Vec<Box<Node<K>>> = self.0.take().into_iter().collect();
        let mut released = 0;

        while let Some(mut node) = stack.pop() {
            match (node.left.0.take(), node.right.0.take()) {
                (None, None) => {
                    drop(node);
                    released += 1;
                },
                (left, right) => {
                    // Revisit the node once both of its (now detached) subtrees are gone.
                    stack.push(node);
                    stack.extend(right);
                    stack.extend(left);
                },
            }
        }

        released
    }
}

impl<K> Default for Branch<K> {
    fn default() -> Self {
        Branch::empty()
    }
}

impl<K> Deref for Branch<K> {
    type Target = Option<Box<Node<K>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K> DerefMut for Branch<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K> From<Box<Node<K>>> for Branch<K> {
    fn from(value: Box<Node<K>>) -> Self {
        Branch(Some(value))
    }
}

/// Subtrees below this depth are summarised by their node count instead of being drawn. Every
/// drawn line is indented by its depth, so this keeps the output of a degenerate tree linear.
pub(crate) const MAX_DRAWN_DEPTH: usize = 64;

enum DebugFrame<'a, K> {
    Branch(&'a Branch<K>, String, usize),
    Key(&'a K, String),
}

impl<K: Debug> Debug for Branch<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Frames are popped in order: left subtree, key, right subtree.
        let mut stack = vec![DebugFrame::Branch(self, String::new(), 0)];
        let mut first = true;

        while let Some(frame) = stack.pop() {
            let (prefix, body) = match frame {
                DebugFrame::Branch(branch, prefix, depth) => match branch.0.as_deref() {
                    None => (prefix, String::from("-")),
                    Some(_) if depth >= MAX_DRAWN_DEPTH => {
                        (prefix, format!("… {} nodes", branch.node_count()))
                    },
                    Some(node) => {
                        stack.push(DebugFrame::Branch(
                            &node.right,
                            format!("{prefix}└    "),
                            depth + 1,
                        ));
                        stack.push(DebugFrame::Key(&node.key, prefix.clone()));
                        stack.push(DebugFrame::Branch(
                            &node.left,
                            format!("{prefix}┌    "),
                            depth + 1,
                        ));
                        continue;
                    },
                },
                DebugFrame::Key(key, prefix) => (prefix, format!("({key:?})")),
            };

            for line in body.lines() {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{prefix}{line}")?;
                first = false;
            }
        }

        Ok(())
    }
}
