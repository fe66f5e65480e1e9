use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::traits::Compare;

/// A singly linked list of entries sharing one bucket. Entries are kept in insertion order, the
/// head being the oldest.
pub(crate) struct Chain<K, V>(pub Option<Box<Entry<K, V>>>);

pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub next: Chain<K, V>,
}

impl<K, V> Entry<K, V> {
    pub const fn new(key: K, value: V) -> Entry<K, V> {
        Entry {
            key,
            value,
            next: Chain(None),
        }
    }
}

impl<K, V> Chain<K, V> {
    pub const fn empty() -> Chain<K, V> {
        Chain(None)
    }

    pub fn find<Q, C>(&self, key: &Q, comparator: &C) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut current = self.0.as_deref();
        while let Some(entry) = current {
            if comparator.equal(entry.key.borrow(), key) {
                return Some(entry);
            }
            current = entry.next.0.as_deref();
        }
        None
    }

    pub fn find_mut<Q, C>(&mut self, key: &Q, comparator: &C) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut current = self.0.as_deref_mut();
        while let Some(entry) = current {
            if comparator.equal(entry.key.borrow(), key) {
                return Some(entry);
            }
            current = entry.next.0.as_deref_mut();
        }
        None
    }

    /// Replaces the value of the entry whose key equals `key`, returning the previous value. If
    /// no entry matches, `value` is handed back along with the empty link at the end of the chain.
    pub fn replace_or_tail<Q, C>(
        &mut self,
        key: &Q,
        value: V,
        comparator: &C,
    ) -> Result<V, (V, &mut Chain<K, V>)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut slot = self;
        while let Some(ref mut entry) = slot.0 {
            if comparator.equal(entry.key.borrow(), key) {
                return Ok(mem::replace(&mut entry.value, value));
            }
            slot = &mut entry.next;
        }
        Err((value, slot))
    }

    /// Appends `entry` after the last entry of the chain.
    pub fn push_back(&mut self, entry: Box<Entry<K, V>>) {
        let mut slot = self;
        while let Some(ref mut existing) = slot.0 {
            slot = &mut existing.next;
        }
        slot.0 = Some(entry);
    }

    /// Unlinks the entry whose key equals `key`, joining its predecessor (or the bucket itself)
    /// to its successor.
    pub fn unlink<Q, C>(&mut self, key: &Q, comparator: &C) -> Option<Box<Entry<K, V>>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut slot = self;
        while !comparator.equal(slot.0.as_ref()?.key.borrow(), key) {
            slot = &mut slot.0.as_mut()?.next;
        }

        let mut removed = slot.0.take()?;
        slot.0 = removed.next.0.take();
        Some(removed)
    }

    /// Detaches and returns the head of the chain, leaving its successor in place.
    pub fn pop_front(&mut self) -> Option<Box<Entry<K, V>>> {
        let mut head = self.0.take()?;
        self.0 = head.next.0.take();
        Some(head)
    }

    /// Removes every entry in the chain, one at a time from the head, returning the number
    /// released.
    pub fn release(&mut self) -> usize {
        let mut released = 0;
        while let Some(entry) = self.pop_front() {
            drop(entry);
            released += 1;
        }
        released
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        let mut current = self.0.as_deref();
        std::iter::from_fn(move || {
            let entry = current?;
            current = entry.next.0.as_deref();
            Some(entry)
        })
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Chain::empty()
    }
}

impl<K: Debug, V: Debug> Debug for Chain<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_none() {
            return write!(f, "-");
        }

        let mut first = true;
        for entry in self.iter() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({:?}: {:?})", entry.key, entry.value)?;
            first = false;
        }
        Ok(())
    }
}
