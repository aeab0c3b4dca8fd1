use std::cmp::Ordering;

use super::comparator::Comparator;
use super::split_first;
use crate::error::Result;

/// Returns an order-minimal element of `c`.
///
/// Among equivalent minima the first one encountered is returned.
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn min<'a, T, I, C>(c: I, comp: &C) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    select_by(c, comp, Ordering::Less, "min")
}

/// Returns an order-maximal element of `c`.
///
/// Among equivalent maxima the first one encountered is returned.
///
/// # Errors
/// * `Error::NotFound` - If `c` is empty
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn max<'a, T, I, C>(c: I, comp: &C) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    select_by(c, comp, Ordering::Greater, "max")
}

/// Keeps the element that compares `wins` against every other one.
fn select_by<'a, T, I, C>(c: I, comp: &C, wins: Ordering, op: &str) -> Result<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    C: Comparator<T> + ?Sized,
{
    let (first, rest) = split_first(c, op)?;
    Ok(rest.fold(first, |best, item| {
        if comp.compare(item, best) == wins {
            item
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::selection::{NaturalOrder, Reversed};
    use crate::error::Error;
    use std::collections::{BTreeSet, VecDeque};

    #[test]
    fn test_min_max_basic() {
        let c = [7, 3, 5, 3, 9];
        assert_eq!(min(&c, &NaturalOrder), Ok(&3));
        assert_eq!(max(&c, &NaturalOrder), Ok(&9));
    }

    #[test]
    fn test_single_element() {
        let c = vec![42];
        assert_eq!(min(&c, &NaturalOrder), Ok(&42));
        assert_eq!(max(&c, &NaturalOrder), Ok(&42));
    }

    #[test]
    fn test_empty_collection() {
        let c: Vec<i32> = Vec::new();
        assert!(matches!(min(&c, &NaturalOrder), Err(Error::NotFound(_))));
        assert!(matches!(max(&c, &NaturalOrder), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_reversed_comparator_swaps_roles() {
        let c = [4, -2, 8, 0];
        assert_eq!(min(&c, &Reversed(NaturalOrder)), Ok(&8));
        assert_eq!(max(&c, &Reversed(NaturalOrder)), Ok(&-2));
    }

    #[test]
    fn test_ties_return_first_encountered() {
        let c = [(2, 'a'), (1, 'b'), (3, 'c'), (1, 'd'), (3, 'e')];
        let by_num = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        assert_eq!(min(&c, &by_num), Ok(&(1, 'b')));
        assert_eq!(max(&c, &by_num), Ok(&(3, 'c')));
    }

    #[test]
    fn test_other_collections() {
        let deque: VecDeque<i32> = [5, 1, 9].into_iter().collect();
        assert_eq!(min(&deque, &NaturalOrder), Ok(&1));

        let set: BTreeSet<&str> = ["pear", "apple", "fig"].into_iter().collect();
        assert_eq!(max(&set, &NaturalOrder), Ok(&"pear"));
    }

    #[test]
    fn test_input_not_mutated() {
        let c = vec![3, 1, 2];
        let _ = min(&c, &NaturalOrder);
        let _ = max(&c, &NaturalOrder);
        assert_eq!(c, vec![3, 1, 2]);
    }
}
