use super::comparator::Comparator;
use crate::error::{Error, Result};

/// Returns the distinct values of `c` in ascending order.
///
/// Elements are sorted by `comp` into a private snapshot of references and each
/// run of equivalent elements collapses to its first member. The sort is
/// stable, so that member is the one appearing earliest in `c`. An empty
/// collection yields an empty vector.
///
/// # Panics
/// * If `comp` is not a total order, the underlying sort may detect it and panic
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn distinct_sorted<'a, T, I, C>(c: I, comp: &C) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let mut sorted: Vec<&'a T> = c.into_iter().collect();
    sorted.sort_by(|a, b| comp.compare(*a, *b));
    sorted.dedup_by(|later, kept| comp.equivalent(*later, *kept));
    sorted
}

/// Number of distinct values in `c` under `comp`.
///
/// # Panics
/// * If `comp` is not a total order (see [`distinct_sorted`])
pub fn distinct_count<'a, T, I, C>(c: I, comp: &C) -> usize
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    distinct_sorted(c, comp).len()
}

/// Returns the k-th smallest distinct value of `c` (`k = 1` is the minimum).
///
/// # Arguments
/// * `c` - The collection to select from
/// * `k` - 1-based rank among the distinct values
/// * `comp` - The total order over the elements
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty, `k == 0`, or `k` exceeds the number of distinct values
///
/// # Panics
/// * If `comp` is not a total order, the underlying sort may detect it and panic
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn kmin<'a, T, I, C>(c: I, k: usize, comp: &C) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let distinct = ranked(c, k, comp, "kmin")?;
    Ok(distinct[k - 1])
}

/// Returns the k-th largest distinct value of `c` (`k = 1` is the maximum).
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty, `k == 0`, or `k` exceeds the number of distinct values
///
/// # Panics
/// * If `comp` is not a total order, the underlying sort may detect it and panic
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn kmax<'a, T, I, C>(c: I, k: usize, comp: &C) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let distinct = ranked(c, k, comp, "kmax")?;
    Ok(distinct[distinct.len() - k])
}

/// Builds the distinct snapshot and checks `1 <= k <= distinct count`.
fn ranked<'a, T, I, C>(c: I, k: usize, comp: &C, op: &str) -> Result<Vec<&'a T>>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let distinct = distinct_sorted(c, comp);
    if distinct.is_empty() {
        log::debug!("{}: empty collection", op);
        return Err(Error::not_found(format!("{}: collection is empty", op)));
    }
    log::trace!("{}: {} distinct values, rank {}", op, distinct.len(), k);

    if k == 0 {
        log::debug!("{}: rank 0 requested", op);
        return Err(Error::not_found(format!("{}: rank must be at least 1", op)));
    }
    if k > distinct.len() {
        log::debug!("{}: rank {} out of {} distinct values", op, k, distinct.len());
        return Err(Error::not_found(format!(
            "{}: rank {} exceeds {} distinct values",
            op,
            k,
            distinct.len()
        )));
    }
    Ok(distinct)
}
