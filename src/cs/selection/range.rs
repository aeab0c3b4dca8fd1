use std::cmp::Ordering;

use super::comparator::Comparator;
use super::split_first;
use crate::error::{Error, Result};

/// Returns every element `e` of `c` with `low <= e <= high` under `comp`.
///
/// The result keeps the relative order of `c` and includes duplicates.
/// `low` and `high` need not occur in `c`. When `low` orders after `high`
/// the range is empty, which is reported like any other empty range.
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty or no element lies in `[low, high]`
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(m) where m is the number of qualifying elements
pub fn range<'a, T, I, C>(c: I, low: &T, high: &T, comp: &C) -> Result<Vec<&'a T>>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (first, rest) = split_first(c, "range")?;

    let in_range = |e: &T| {
        comp.compare(e, low) != Ordering::Less && comp.compare(e, high) != Ordering::Greater
    };
    let selected: Vec<&'a T> = std::iter::once(first)
        .chain(rest)
        .filter(|e| in_range(*e))
        .collect();

    if selected.is_empty() {
        log::debug!("range: no element within bounds");
        return Err(Error::not_found("range: no element within [low, high]"));
    }
    log::trace!("range: {} elements within bounds", selected.len());
    Ok(selected)
}
