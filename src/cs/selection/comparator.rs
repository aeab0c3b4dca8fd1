use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A total order over `T`.
///
/// `compare` must be transitive and consistent. Two elements comparing
/// `Ordering::Equal` are *equivalent* for every selection operation, whether
/// or not they are identical values.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator. Closures passed directly need
/// their parameter types spelled out, e.g. `|a: &i32, b: &i32| b.cmp(a)`.
/// Shared references to a comparator are comparators too, so one instance can
/// back several `Selector`s.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` when `a` and `b` occupy the same rank in this order.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order given by `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for &NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for &Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders elements by a single key extracted from each element.
///
/// Elements with equal keys are equivalent even when the rest of their
/// contents differ.
pub struct ByKey<F, K> {
    key: F,
    _key_marker: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new<T: ?Sized>(key: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        ByKey {
            key,
            _key_marker: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        ByKey {
            key: self.key.clone(),
            _key_marker: PhantomData,
        }
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, F, K> Comparator<T> for ByKey<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<T, F, K> Comparator<T> for &ByKey<F, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (*self).compare(a, b)
    }
}
