//! Binary tree collections. Currently this is [`BinarySearchTree`], an unbalanced tree of keys
//! ordered by a caller supplied [`Compare`](crate::collections::traits::Compare)r.

pub mod search_tree;

#[doc(inline)]
pub use search_tree::BinarySearchTree;
