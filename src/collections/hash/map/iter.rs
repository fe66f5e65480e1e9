use std::iter::FusedIterator;
use std::{mem, slice, vec};

use super::{ChainedHashMap, Chain, Entry};

impl<K, V, B, C> IntoIterator for ChainedHashMap<K, V, B, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        IntoIter {
            // Leaves an empty table behind for the map's own drop.
            buckets: mem::take(&mut self.buckets).into_vec().into_iter(),
            current: Chain::empty(),
            len,
        }
    }
}

/// An owned iterator over the entries of a [`ChainedHashMap`].
pub struct IntoIter<K, V> {
    pub(crate) buckets: vec::IntoIter<Chain<K, V>>,
    pub(crate) current: Chain<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.pop_front() {
                self.len -= 1;
                let Entry { key, value, .. } = *entry;
                return Some((key, value));
            }
            self.current = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<'a, K, V, B, C> IntoIterator for &'a mut ChainedHashMap<K, V, B, C> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            len: self.len,
            buckets: self.buckets.iter_mut(),
            current: None,
        }
    }
}

/// A borrowed iterator over the entries of a [`ChainedHashMap`], with mutable access to values.
pub struct IterMut<'a, K, V> {
    pub(crate) buckets: slice::IterMut<'a, Chain<K, V>>,
    pub(crate) current: Option<&'a mut Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.take() {
                let Entry { key, value, next } = entry;
                self.current = next.0.as_deref_mut();
                self.len -= 1;
                return Some((&*key, value));
            }
            self.current = self.buckets.next()?.0.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<'a, K, V, B, C> IntoIterator for &'a ChainedHashMap<K, V, B, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            buckets: self.buckets.iter(),
            current: None,
        }
    }
}

/// A borrowed iterator over the entries of a [`ChainedHashMap`].
pub struct Iter<'a, K, V> {
    pub(crate) buckets: slice::Iter<'a, Chain<K, V>>,
    pub(crate) current: Option<&'a Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.0.as_deref();
                self.len -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.current = self.buckets.next()?.0.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            buckets: self.buckets.clone(),
            current: self.current,
            len: self.len,
        }
    }
}

pub struct IntoKeys<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct IntoValues<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
