use std::fmt;
use std::iter::Peekable;
use std::vec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NCListError;
use crate::interval::Interval;
use crate::iter::Iter;
use crate::node::Entry;

/// A nested containment list: a static forest of intervals answering
/// overlap queries in `O(log n + k)` per visited level.
///
/// Siblings (top level or inside any sublist) are sorted by start then by
/// decreasing stop, and each entry's sublist holds exactly the intervals
/// nested inside it. The list is immutable once built; rebuild it when the
/// input changes.
///
/// With the `serde` feature it serializes as the flat pre-order list of its
/// intervals and is rebuilt on deserialization.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        into = "Vec<Interval<K>>",
        try_from = "Vec<Interval<K>>",
        bound(
            serialize = "K: Clone + Serialize",
            deserialize = "K: Ord + Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct NCList<K> {
    entries: Vec<Entry<K>>,
    len: usize,
}

type Cursor<K> = Peekable<vec::IntoIter<Interval<K>>>;

impl<K> NCList<K>
where
    K: Ord,
{
    /// Builds a list from a copy of `intervals`.
    ///
    /// ```
    /// use nclist::{Interval, NCList};
    ///
    /// let intervals = vec![
    ///     Interval::new(1, 5).unwrap(),
    ///     Interval::new(3, 8).unwrap(),
    ///     Interval::new(4, 7).unwrap(),
    /// ];
    /// let nclist = NCList::build(&intervals).unwrap();
    ///
    /// let hits = nclist.overlap(&Interval::new(6, 9).unwrap()).unwrap();
    /// assert_eq!(hits, vec![&intervals[1], &intervals[2]]);
    /// ```
    pub fn build(intervals: &[Interval<K>]) -> Result<NCList<K>, NCListError>
    where
        K: Clone,
    {
        NCList::from_vec(intervals.to_vec())
    }

    /// Builds a list by taking ownership of `intervals` and sorting them in place.
    pub fn from_vec(mut intervals: Vec<Interval<K>>) -> Result<NCList<K>, NCListError> {
        if let Some(index) = intervals.iter().position(|interval| !interval.is_valid()) {
            log::debug!("NCList::from_vec(): interval #{} has start > stop", index);
            return Err(NCListError::InvalidInterval);
        }

        // Stable, so exact duplicates keep their input order.
        intervals.sort_by(Interval::nesting_cmp);

        let len = intervals.len();
        let mut cursor = intervals.into_iter().peekable();
        let entries = NCList::build_sublist(None, &mut cursor);
        debug_assert!(cursor.peek().is_none());

        log::debug!(
            "NCList::from_vec(): nested {} intervals under {} top-level entries",
            len,
            entries.len()
        );
        Ok(NCList { entries, len })
    }

    /// Consumes from `cursor` every interval belonging under `parent` (or
    /// everything, at the top level). Each consumed interval first claims the
    /// run of intervals nested inside it, then its next sibling is examined.
    fn build_sublist(parent: Option<&Interval<K>>, cursor: &mut Cursor<K>) -> Vec<Entry<K>> {
        let mut sublist = Vec::new();
        while let Some(current) = cursor.next_if(|current| match parent {
            Some(parent) => parent.contains(current) && parent != current,
            None => true,
        }) {
            let mut entry = Entry::new(current);
            entry.sublist = NCList::build_sublist(Some(&entry.value), cursor);
            sublist.push(entry);
        }
        sublist
    }

    /// Returns every stored interval `v` with `v.start < query.stop` and
    /// `query.start < v.stop`, in pre-order of the forest.
    pub fn overlap(&self, query: &Interval<K>) -> Result<Vec<&Interval<K>>, NCListError> {
        query.validate()?;

        let mut result = Vec::new();
        NCList::overlap_sublist(&self.entries, query, &mut result);
        log::trace!("NCList::overlap(): {} of {} intervals overlap", result.len(), self.len);
        Ok(result)
    }

    fn overlap_sublist<'a>(
        sublist: &'a [Entry<K>],
        query: &Interval<K>,
        result: &mut Vec<&'a Interval<K>>,
    ) {
        // Sibling stops never decrease, so everything before this point ends
        // at or before the query starts.
        let first = sublist.partition_point(|entry| entry.value.stop <= query.start);

        for entry in sublist[first..]
            .iter()
            .take_while(|entry| entry.value.start < query.stop)
        {
            result.push(&entry.value);
            NCList::overlap_sublist(&entry.sublist, query, result);
        }
    }
}

impl<K> NCList<K> {
    /// The top-level entries of the containment forest.
    pub fn entries(&self) -> &[Entry<K>] {
        &self.entries
    }

    /// Number of stored intervals, at every depth.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over every stored interval in pre-order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.entries, self.len)
    }

    fn flatten(entries: Vec<Entry<K>>, out: &mut Vec<Interval<K>>) {
        for entry in entries {
            out.push(entry.value);
            NCList::flatten(entry.sublist, out);
        }
    }
}

impl<'a, K> IntoIterator for &'a NCList<K> {
    type Item = &'a Interval<K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> TryFrom<Vec<Interval<K>>> for NCList<K>
where
    K: Ord,
{
    type Error = NCListError;

    fn try_from(intervals: Vec<Interval<K>>) -> Result<Self, Self::Error> {
        NCList::from_vec(intervals)
    }
}

impl<K> From<NCList<K>> for Vec<Interval<K>> {
    /// Returns the stored intervals in pre-order, which is also nesting order.
    fn from(nclist: NCList<K>) -> Self {
        let mut intervals = Vec::with_capacity(nclist.len);
        NCList::flatten(nclist.entries, &mut intervals);
        intervals
    }
}

impl<K> fmt::Display for NCList<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "toplevel = [")?;
        Entry::dump(f, &self.entries, 1)?;
        write!(f, "]")
    }
}
