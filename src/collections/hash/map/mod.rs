//! A module containing [`ChainedHashMap`] and associtated types.
//!
//! Currently, the only other included types are for iteration and errors, providing owned and
//! borrowed iteration over entries, keys or values in a map.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! ChainedHashMap in place would cause a logic error.
//!
//! [`ChainedHashMap`] is also re-exported under the parent module.

mod chain;
mod chained_hash_map;
mod error;
mod iter;
mod tests;

pub(crate) use chain::*;
pub use chained_hash_map::*;
pub use error::*;
pub use iter::*;
