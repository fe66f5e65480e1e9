use std::cmp::Ordering;

/// A total order over values of type `T`, supplied to a collection at construction.
///
/// This plays the same role for ordering that [`BuildHasher`](std::hash::BuildHasher) plays for
/// hashing: the collection stores one comparator and consults it for every key comparison, so the
/// order isn't tied to the key type's [`Ord`] implementation.
///
/// Any `Fn(&T, &T) -> Ordering` closure or function is a comparator. [`Natural`] uses `T`'s own
/// [`Ord`] implementation.
///
/// It is a logic error for a comparator to be inconsistent (e.g. not transitive) or to change its
/// order while a collection holds keys compared by it. The collections remain memory safe, but
/// lookups may miss keys that are present.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` and `b` compare equal.
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// A comparator that delegates to [`Ord`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
