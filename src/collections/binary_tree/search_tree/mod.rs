//! A module containing [`BinarySearchTree`] and associtated types.
//!
//! Currently, the only other included types are for iteration, providing owned and borrowed
//! in-order iteration over keys.
//!
//! [`BinarySearchTree`] is also re-exported under the parent module.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
