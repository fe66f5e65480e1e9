use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::io::{self, Write};
use std::mem;

use log::{debug, trace};

use super::{
    CapacityError, CapacityOverflow, CapacityTooSmall, Chain, Entry, IntoKeys, IntoValues, Iter,
    IterMut, Keys, Values, ValuesMut,
};
use crate::collections::traits::{Compare, Natural};
use crate::util::result::ResultExtension;

/// The number of buckets a map starts with when no capacity is given.
pub const INITIAL_CAP: usize = 13;

/// The smallest number of buckets a map can be created with.
pub const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// The load factor is 3/4: the table grows before an insertion would bring `len / cap` to this
/// value or above.
pub const LOAD_FACTOR_NUMERATOR: usize = 3;
pub const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which stores colliding keys in a chain of entries per bucket.
///
/// Keys are located by hashing them with `B` and compared for equality with `C`, a
/// [`Compare`]r. The key type's [`Eq`] implementation isn't used, so `B` and `C` must agree: keys
/// that `C` considers equal have to hash to the same value.
///
/// Inserting through [`ChainedHashMap::insert`] stores owned copies of the provided key and value
/// (via [`ToOwned`]), so the caller's originals can change or be dropped freely afterwards.
///
/// The map starts with [`INITIAL_CAP`] buckets and doubles whenever an insertion would bring the
/// load factor to 3/4. The capacity never shrinks.
///
/// It is a logic error for keys in a ChainedHashMap to be manipulated in a way that changes their
/// hash or their order under `C`. Because of this, ChainedHashMap's API prevents mutable access to
/// its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
/// - `c`: The length of the chain for the relevant bucket.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `rehash` | `O(n)` |
/// | `clear` | `O(n + cap)` |
///
/// \* If the map needs to grow before the insertion, `insert` will take `O(n)`.
///
/// With a reasonable hasher, `c` stays close to 1 as the load factor is kept below 3/4.
pub struct ChainedHashMap<K, V, B = RandomState, C = Natural> {
    pub(crate) buckets: Box<[Chain<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
    pub(crate) comparator: C,
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates a new ChainedHashMap with [`INITIAL_CAP`] buckets, a randomly seeded hasher and
    /// keys compared by their [`Ord`] implementation.
    pub fn new() -> ChainedHashMap<K, V> {
        ChainedHashMap::with_hasher(RandomState::new())
    }

    /// Creates a new ChainedHashMap with the provided `cap`acity.
    ///
    /// # Panics
    /// Panics if `cap` is less than [`MIN_CAP`].
    pub fn with_cap(cap: usize) -> ChainedHashMap<K, V> {
        ChainedHashMap::try_with_cap(cap).throw()
    }

    /// Creates a new ChainedHashMap with the provided `cap`acity, returning an error if `cap` is
    /// less than [`MIN_CAP`].
    pub fn try_with_cap(cap: usize) -> Result<ChainedHashMap<K, V>, CapacityError> {
        ChainedHashMap::try_with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K, V, B> ChainedHashMap<K, V, B> {
    /// Creates a new ChainedHashMap with [`INITIAL_CAP`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap::with_hasher_and_comparator(hasher, Natural)
    }

    /// Creates a new ChainedHashMap with the provided `cap`acity and `hasher`.
    ///
    /// # Panics
    /// Panics if `cap` is less than [`MIN_CAP`].
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap::try_with_cap_and_hasher(cap, hasher).throw()
    }

    /// Creates a new ChainedHashMap with the provided `cap`acity and `hasher`, returning an error
    /// if `cap` is less than [`MIN_CAP`].
    pub fn try_with_cap_and_hasher(
        cap: usize,
        hasher: B,
    ) -> Result<ChainedHashMap<K, V, B>, CapacityError> {
        ChainedHashMap::try_with_parts(cap, hasher, Natural)
    }
}

impl<K, V, B, C> ChainedHashMap<K, V, B, C> {
    /// Creates a new ChainedHashMap with [`INITIAL_CAP`] buckets, the provided `hasher` and
    /// the provided `comparator` for key equality.
    pub fn with_hasher_and_comparator(hasher: B, comparator: C) -> ChainedHashMap<K, V, B, C> {
        ChainedHashMap {
            buckets: empty_buckets(INITIAL_CAP),
            len: 0,
            hasher,
            comparator,
        }
    }

    /// Creates a new ChainedHashMap from each of its parts, returning an error if `cap` is less
    /// than [`MIN_CAP`].
    pub fn try_with_parts(
        cap: usize,
        hasher: B,
        comparator: C,
    ) -> Result<ChainedHashMap<K, V, B, C>, CapacityError> {
        if cap < MIN_CAP {
            return Err(CapacityTooSmall {
                requested: cap,
                minimum: MIN_CAP,
            }
            .into());
        }

        Ok(ChainedHashMap {
            buckets: empty_buckets(cap),
            len: 0,
            hasher,
            comparator,
        })
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns a reference to the map's hasher.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns a reference to the map's comparator.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes and drops every entry, chain by chain, keeping the current capacity.
    pub fn clear(&mut self) {
        let released: usize = self.buckets.iter_mut().map(Chain::release).sum();
        if released > 0 {
            trace!("Released {released} entries from a ChainedHashMap");
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the map, as references. Entries are
    /// visited bucket by bucket and in insertion order within a bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the map, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the map, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the map, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.into_iter())
    }

    /// Returns an iterator over all values in the map, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Writes every entry as a bracketed `Key:` / `Value:` block, in iteration order.
    pub fn print<W: Write>(&self, mut out: W) -> io::Result<()>
    where
        K: Display,
        V: Display,
    {
        for (key, value) in self.iter() {
            write!(out, "[\nKey: {key}\nValue: {value}\n]\n")?;
        }
        Ok(())
    }
}

impl<K: Hash, V, B: BuildHasher, C> ChainedHashMap<K, V, B, C> {
    /// Inserts copies of the provided `key` and `value` into the map, growing it first if the new
    /// entry would bring the load factor to 3/4. If the key was already present, its value is
    /// replaced and the previous one is returned.
    ///
    /// As with the standard library, the stored key isn't changed if it already exists.
    ///
    /// # Panics
    /// Panics if growing the map would overflow its capacity.
    pub fn insert<Q, R>(&mut self, key: &Q, value: &R) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + ToOwned<Owned = K> + ?Sized,
        R: ToOwned<Owned = V> + ?Sized,
        C: Compare<Q>,
    {
        self.grow_for_insert();

        let index = self.index_for(key);
        match self.buckets[index].replace_or_tail(key, value.to_owned(), &self.comparator) {
            Ok(previous) => Some(previous),
            Err((value, tail)) => {
                tail.0 = Some(Box::new(Entry::new(key.to_owned(), value)));
                self.len += 1;
                None
            },
        }
    }

    /// Inserts the provided `key`-`value` pair, taking ownership rather than copying. Otherwise
    /// identical to [`ChainedHashMap::insert`].
    pub fn insert_owned(&mut self, key: K, value: V) -> Option<V>
    where
        C: Compare<K>,
    {
        self.grow_for_insert();

        let index = self.index_for(&key);
        match self.buckets[index].replace_or_tail(&key, value, &self.comparator) {
            Ok(previous) => Some(previous),
            Err((value, tail)) => {
                tail.0 = Some(Box::new(Entry::new(key, value)));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        let index = self.index_for(key);
        self.buckets[index]
            .find(key, &self.comparator)
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Looks up the value stored for `key`. This is the same as [`ChainedHashMap::get`].
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        self.get(key)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        let index = self.index_for(key);
        self.buckets[index]
            .find_mut(key, &self.comparator)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        let index = self.index_for(key);
        let removed = self.buckets[index].unlink(key, &self.comparator)?;
        self.len -= 1;

        let Entry { key: stored, value, .. } = *removed;
        Some((stored, value))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes and drops the entry associated with `key`, returning true if there was one.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
        C: Compare<Q>,
    {
        self.remove_entry(key).is_some()
    }

    /// Doubles the number of buckets and moves every entry into the bucket its hash selects in
    /// the new table.
    ///
    /// # Panics
    /// Panics if the doubled capacity would overflow.
    pub fn rehash(&mut self) {
        self.try_rehash().throw()
    }

    /// Doubles the number of buckets, returning an error if the doubled capacity would overflow.
    /// The map is left untouched on error.
    pub fn try_rehash(&mut self) -> Result<(), CapacityOverflow> {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        self.realloc_with_cap(new_cap);
        Ok(())
    }

    /// Increases the capacity of the map to ensure that len + `extra` entries will fit without
    /// reaching the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity would overflow.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Increases the capacity of the map to ensure that len + `extra` entries will fit without
    /// reaching the load factor, returning an error if the required capacity would overflow.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityError> {
        let required = self
            .len
            .checked_add(extra)
            .and_then(|total| total.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .ok_or(CapacityOverflow)?;

        let mut new_cap = self.cap();
        while required >= new_cap.checked_mul(LOAD_FACTOR_NUMERATOR).ok_or(CapacityOverflow)? {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        }

        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
        Ok(())
    }
}

impl<K: Hash, V, B: BuildHasher, C> ChainedHashMap<K, V, B, C> {
    /// Checks if inserting one more entry would bring the load factor to 3/4 or above.
    pub(crate) fn should_grow(&self) -> bool {
        (self.len + 1) * LOAD_FACTOR_DENOMINATOR >= self.cap() * LOAD_FACTOR_NUMERATOR
    }

    /// Grows the map if required for the next insertion. The check happens even if the key turns
    /// out to be present already.
    pub(crate) fn grow_for_insert(&mut self) {
        if self.should_grow() {
            self.rehash();
        }
    }

    /// Replaces the buckets with `new_cap` empty ones and moves every entry across. Entries are
    /// moved rather than copied, and a bucket in the new table only receives entries from a single
    /// old bucket, so insertion order within each chain is kept.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug!(
            "Rehashing ChainedHashMap with {} entries from {} to {new_cap} buckets",
            self.len,
            self.cap(),
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_cap));

        for mut chain in old_buckets.into_vec() {
            while let Some(entry) = chain.pop_front() {
                let index = self.index_for(&entry.key);
                self.buckets[index].push_back(entry);
            }
        }
    }

    /// Calculates the index of the bucket for the provided `hashable`.
    pub(crate) fn index_for<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        // The capacity is never below MIN_CAP while the map is usable.
        (self.hasher.hash_one(hashable) % self.cap() as u64) as usize
    }
}

pub(crate) fn empty_buckets<K, V>(cap: usize) -> Box<[Chain<K, V>]> {
    (0..cap).map(|_| Chain::empty()).collect()
}

impl<K, V, B, C> Drop for ChainedHashMap<K, V, B, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        ChainedHashMap::new()
    }
}

impl<K: Hash + Clone, V: Clone, B: BuildHasher + Clone, C: Clone> Clone
    for ChainedHashMap<K, V, B, C>
{
    fn clone(&self) -> Self {
        let mut cloned = ChainedHashMap {
            buckets: empty_buckets(self.cap()),
            len: 0,
            hasher: self.hasher.clone(),
            comparator: self.comparator.clone(),
        };
        for (key, value) in self.iter() {
            let index = cloned.index_for(key);
            cloned.buckets[index].push_back(Box::new(Entry::new(key.clone(), value.clone())));
            cloned.len += 1;
        }
        cloned
    }
}

impl<K: Hash, V, B: BuildHasher, C: Compare<K>> Extend<(K, V)> for ChainedHashMap<K, V, B, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_owned(key, value);
        }
    }
}

impl<K: Hash + Ord, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Debug, V: Debug, B: Debug, C> Debug for ChainedHashMap<K, V, B, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("buckets", &self.buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Debug, V: Debug, B, C> Display for ChainedHashMap<K, V, B, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
