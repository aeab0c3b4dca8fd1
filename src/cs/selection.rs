//! Comparator-driven selection.
//!
//! This module finds extremal and order-statistic values in an arbitrary
//! collection under a caller-supplied total order:
//! - Extrema (`min`, `max`)
//! - K-th smallest / largest distinct value (`kmin`, `kmax`)
//! - Inclusive range extraction (`range`)
//! - Nearest bounds around a key (`ceiling`, `floor`)
//!
//! Every operation borrows the collection, never mutates it, and returns
//! elements borrowed from it. Collections are anything that iterates over
//! `&T`: slices, `&Vec<T>`, `&BTreeSet<T>`, `&HashSet<T>`, iterator adapters.
//!
//! Distinctness is decided by the comparator alone: two elements comparing
//! `Ordering::Equal` count as one value.
//!
//! # Examples
//!
//! ```rust
//! use selection::{ceiling, floor, kmax, kmin, range, NaturalOrder};
//!
//! let c = [7, 3, 5, 3, 9];
//! assert_eq!(kmin(&c, 2, &NaturalOrder), Ok(&5));
//! assert_eq!(kmax(&c, 4, &NaturalOrder), Ok(&3));
//! assert_eq!(range(&c, &4, &8, &NaturalOrder), Ok(vec![&7, &5]));
//! assert_eq!(ceiling(&c, &6, &NaturalOrder), Ok(&7));
//! assert_eq!(floor(&c, &6, &NaturalOrder), Ok(&5));
//! ```

use crate::error::{Error, Result};

pub mod bound;
pub mod comparator;
pub mod extrema;
pub mod order_statistic;
pub mod range;
pub mod selector;


pub use bound::{ceiling, floor};
pub use comparator::{ByKey, Comparator, NaturalOrder, Reversed};
pub use extrema::{max, min};
pub use order_statistic::{distinct_count, distinct_sorted, kmax, kmin};
pub use range::range;
pub use selector::Selector;

/// Splits off the first element of `c`, failing with `NotFound` when `c` is empty.
pub(crate) fn split_first<'a, T, I>(c: I, op: &str) -> Result<(&'a T, I::IntoIter)>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = c.into_iter();
    match iter.next() {
        Some(first) => Ok((first, iter)),
        None => {
            log::debug!("{}: empty collection", op);
            Err(Error::not_found(format!("{}: collection is empty", op)))
        }
    }
}
