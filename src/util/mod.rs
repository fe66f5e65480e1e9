#![warn(missing_docs)]

#[cfg(feature = "binary-tree")]
pub mod fmt;
#[cfg(feature = "binary-tree")]
pub mod option;
#[cfg(feature = "hash")]
pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod logger;
#[cfg(test)]
pub mod panic;
