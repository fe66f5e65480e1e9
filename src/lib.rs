//! Generic, single-threaded container types: a comparator-driven binary search tree and a
//! separately chained hash map.
//!
//! # Purpose
//! Both containers are learning-sized building blocks rather than production caches. They own all
//! of their nodes exclusively and are generic over the stored types, with the behaviour that
//! depends on those types supplied by the caller:
//!
//! | Capability | Expressed as |
//! |-|-|
//! | compare | [`Compare`](collections::traits::Compare) (or [`Ord`] through [`Natural`](collections::traits::Natural)) |
//! | copy | [`ToOwned`], inserts take borrowed keys and values and clone them into the container |
//! | hash | [`BuildHasher`](std::hash::BuildHasher) |
//! | to string | [`Display`](std::fmt::Display) for printing |
//! | free | [`Drop`] |
//!
//! # Error Handling
//! Missing keys are not errors, lookups return [`Option`]s and removals report whether anything
//! was removed. The only errors are capacity related: constructing a hash map that is too small to
//! index or growing one past [`usize::MAX`] buckets. When this crate employs errors via
//! [`Result`]s, it does so in a method that is strongly typed, using enums for static dispatch with
//! (often zero-sized) structs that implement [`Error`](std::error::Error). Infallible counterparts
//! panic with the error's message.
//!
//! # Logging
//! Structural events (hash map growth, tree deletions) are reported through the [`log`] facade at
//! `debug` and `trace` level. The crate never installs a logger itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
