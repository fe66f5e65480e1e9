//! Generic collection types whose stored types are only known at the call site.
//!
//! # Purpose
//! The containers here own their nodes exclusively and rely on behaviour supplied by the caller
//! (comparison, hashing, cloning, printing) rather than hard-coding it for a particular key type.
//!
//! # Method
//! Both containers are built from boxed nodes with strictly downward ownership. Neither keeps
//! parent or back pointers, so all restructuring is done by walking mutable references to child
//! links.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
