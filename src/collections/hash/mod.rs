//! Hash based collections. Currently this is [`ChainedHashMap`], a table of buckets where
//! colliding keys share a chain of entries.

pub mod map;

#[doc(inline)]
pub use map::ChainedHashMap;
