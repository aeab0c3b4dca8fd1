pub mod cs;
pub mod error;

pub use cs::selection;
pub use cs::selection::{
    ceiling, distinct_count, distinct_sorted, floor, kmax, kmin, max, min, range, ByKey,
    Comparator, NaturalOrder, Reversed, Selector,
};
pub use error::{Error, Result};
