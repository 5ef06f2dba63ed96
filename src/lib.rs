//! Implementation of a nested containment list ([`NCList`]), a static index over
//! half-open intervals `[start, stop)`. It is based on the data structure
//! described in Alekseyenko & Lee (2007, "Nested Containment List (NCList): a
//! new algorithm for accelerating interval query of genome alignment and
//! interval databases").
//!
//! Intervals are sorted once and partitioned into a forest in which every
//! entry's sublist holds the intervals nested inside it. A query then binary
//! searches each visited level and only descends into entries already known
//! to overlap, so the cost is proportional to the size of the answer.
//!
//! ```
//! use nclist::{Interval, NCList};
//!
//! let intervals: Vec<Interval<u32>> = [(1, 5), (3, 8), (4, 7), (8, 11)]
//!     .into_iter()
//!     .map(|(start, stop)| Interval::new(start, stop).unwrap())
//!     .collect();
//! let nclist = NCList::build(&intervals).unwrap();
//!
//! let query = Interval::new(7, 9).unwrap();
//! let hits: Vec<String> = nclist
//!     .overlap(&query)
//!     .unwrap()
//!     .into_iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(hits, ["[3, 8)", "[8, 11)"]);
//! ```
//!
//! Note that any type satisfying the [`Ord`] trait can be used for bounds.

mod error;
mod interval;
mod iter;
/// The nested containment list and its build and query procedures.
pub mod nclist;
mod node;

pub use error::NCListError;
pub use interval::{format_list, Interval};
pub use iter::Iter;
pub use nclist::NCList;
pub use node::Entry;
