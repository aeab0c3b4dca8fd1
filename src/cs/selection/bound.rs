use std::cmp::Ordering;

use super::comparator::Comparator;
use super::split_first;
use crate::error::{Error, Result};

/// Returns the smallest element of `c` that is greater than or equal to `key`.
///
/// `key` need not occur in `c`. Among equivalent candidates the first one
/// encountered is returned.
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty or every element orders below `key`
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn ceiling<'a, T, I, C>(c: I, key: &T, comp: &C) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    nearest(c, key, comp, Ordering::Less, "ceiling")
}

/// Returns the largest element of `c` that is less than or equal to `key`.
///
/// `key` need not occur in `c`. Among equivalent candidates the first one
/// encountered is returned.
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty or every element orders above `key`
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn floor<'a, T, I, C>(c: I, key: &T, comp: &C) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    nearest(c, key, comp, Ordering::Greater, "floor")
}

/// Single scan for the element closest to `key` on the side opposite `toward`.
///
/// An element qualifies unless it orders `toward` the key; a qualifying element
/// replaces the candidate only when it orders strictly `toward` it.
fn nearest<'a, T, I, C>(c: I, key: &T, comp: &C, toward: Ordering, op: &str) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (first, rest) = split_first(c, op)?;

    let mut best: Option<&'a T> = None;
    for e in std::iter::once(first).chain(rest) {
        if comp.compare(e, key) == toward {
            continue;
        }
        best = match best {
            Some(current) if comp.compare(e, current) != toward => Some(current),
            _ => Some(e),
        };
    }

    best.ok_or_else(|| {
        log::debug!("{}: no qualifying element", op);
        Error::not_found(format!("{}: no element on the required side of the key", op))
    })
}
