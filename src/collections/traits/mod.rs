//! Capability traits shared by the collections in this crate.

pub mod compare;

#[doc(inline)]
pub use compare::{Compare, Natural};
