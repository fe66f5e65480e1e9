use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The capacity requested for a [`ChainedHashMap`](super::ChainedHashMap) is too small to hold a
/// usable table.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity {requested} is below the minimum of {minimum} buckets!")]
pub struct CapacityTooSmall {
    pub requested: usize,
    pub minimum: usize,
}

/// Growing a [`ChainedHashMap`](super::ChainedHashMap) would need more buckets than fit in a
/// `usize`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    TooSmall(CapacityTooSmall),
    Overflow(CapacityOverflow),
}
