use super::comparator::Comparator;
use super::{bound, extrema, order_statistic, range};
use crate::error::{Error, Result};

/// A selection query over a collection that may be missing either of its parts.
///
/// The free functions in this module cannot be called without a collection or
/// a comparator. `Selector` is the boundary for callers that receive those parts
/// from elsewhere and may not have them: every operation first checks that both
/// are present and fails with `Error::InvalidArgument` otherwise, before
/// looking at a single element.
///
/// # Examples
/// ```
/// use selection::{Error, NaturalOrder, Selector};
///
/// let c = vec![7, 3, 5, 3, 9];
/// let selector = Selector::new(&c, NaturalOrder);
/// assert_eq!(selector.kmax(1), Ok(&9));
///
/// let missing = Selector::from_parts(Some(&c), None::<NaturalOrder>);
/// assert!(matches!(missing.min(), Err(Error::InvalidArgument(_))));
/// ```
#[derive(Debug, Clone)]
pub struct Selector<I, C> {
    collection: Option<I>,
    comparator: Option<C>,
}

impl<I, C> Default for Selector<I, C> {
    fn default() -> Self {
        Selector {
            collection: None,
            comparator: None,
        }
    }
}

impl<I, C> Selector<I, C> {
    pub fn new(collection: I, comparator: C) -> Self {
        Selector {
            collection: Some(collection),
            comparator: Some(comparator),
        }
    }

    pub fn from_parts(collection: Option<I>, comparator: Option<C>) -> Self {
        Selector {
            collection,
            comparator,
        }
    }

    /// Sets the collection to select from.
    pub fn over(mut self, collection: I) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Sets the total order used by every operation.
    pub fn ordered_by(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    pub fn has_collection(&self) -> bool {
        self.collection.is_some()
    }

    pub fn has_comparator(&self) -> bool {
        self.comparator.is_some()
    }
}

impl<'a, T, I, C> Selector<I, C>
where
    T: 'a,
    I: IntoIterator<Item = &'a T> + Clone,
    C: Comparator<T>,
{
    fn parts(&self, op: &str) -> Result<(I, &C)> {
        let collection = self.collection.clone().ok_or_else(|| {
            log::debug!("{}: collection is absent", op);
            Error::invalid_argument(format!("{}: collection is absent", op))
        })?;
        let comparator = self.comparator.as_ref().ok_or_else(|| {
            log::debug!("{}: comparator is absent", op);
            Error::invalid_argument(format!("{}: comparator is absent", op))
        })?;
        Ok((collection, comparator))
    }

    /// See [`extrema::min`].
    pub fn min(&self) -> Result<&'a T> {
        let (c, comp) = self.parts("min")?;
        extrema::min(c, comp)
    }

    /// See [`extrema::max`].
    pub fn max(&self) -> Result<&'a T> {
        let (c, comp) = self.parts("max")?;
        extrema::max(c, comp)
    }

    /// See [`order_statistic::kmin`].
    pub fn kmin(&self, k: usize) -> Result<&'a T> {
        let (c, comp) = self.parts("kmin")?;
        order_statistic::kmin(c, k, comp)
    }

    /// See [`order_statistic::kmax`].
    pub fn kmax(&self, k: usize) -> Result<&'a T> {
        let (c, comp) = self.parts("kmax")?;
        order_statistic::kmax(c, k, comp)
    }

    /// See [`range::range`].
    pub fn range(&self, low: &T, high: &T) -> Result<Vec<&'a T>> {
        let (c, comp) = self.parts("range")?;
        range::range(c, low, high, comp)
    }

    /// See [`bound::ceiling`].
    pub fn ceiling(&self, key: &T) -> Result<&'a T> {
        let (c, comp) = self.parts("ceiling")?;
        bound::ceiling(c, key, comp)
    }

    /// See [`bound::floor`].
    pub fn floor(&self, key: &T) -> Result<&'a T> {
        let (c, comp) = self.parts("floor")?;
        bound::floor(c, key, comp)
    }
}
