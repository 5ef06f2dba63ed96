use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NCListError;

/// A half-open interval `[start, stop)`.
///
/// It holds every `x` such that `start <= x < stop`. `start <= stop` must
/// always hold; when `start == stop` the interval is empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInterval<K>",
        bound(deserialize = "K: Ord + Deserialize<'de>")
    )
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<K> {
    /// Inclusive.
    pub start: K,
    /// Exclusive.
    pub stop: K,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawInterval<K> {
    start: K,
    stop: K,
}

#[cfg(feature = "serde")]
impl<K: Ord> TryFrom<RawInterval<K>> for Interval<K> {
    type Error = NCListError;

    fn try_from(raw: RawInterval<K>) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.stop)
    }
}

impl<K> Interval<K>
where
    K: Ord,
{
    /// Creates the interval `[start, stop)`.
    ///
    /// ```
    /// use nclist::{Interval, NCListError};
    ///
    /// assert!(Interval::new(3, 8).is_ok());
    /// assert!(Interval::new(4, 4).unwrap().is_empty());
    /// assert_eq!(Interval::new(8, 3), Err(NCListError::InvalidInterval));
    /// ```
    pub fn new(start: K, stop: K) -> Result<Interval<K>, NCListError> {
        let interval = Interval { start, stop };
        interval.validate()?;
        Ok(interval)
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.stop
    }

    pub(crate) fn validate(&self) -> Result<(), NCListError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(NCListError::InvalidInterval)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Returns true if `other` is nested inside `self`.
    ///
    /// The test is strict on the stop bound: an interval never contains an
    /// identical one, nor one that stops where it stops. Duplicates therefore
    /// end up as siblings in the containment forest instead of nesting forever.
    ///
    /// ```
    /// use nclist::Interval;
    ///
    /// let outer = Interval::new(3, 8).unwrap();
    /// assert!(outer.contains(&Interval::new(3, 6).unwrap()));
    /// assert!(!outer.contains(&Interval::new(4, 8).unwrap()));
    /// assert!(!outer.contains(&outer));
    /// ```
    pub fn contains(&self, other: &Interval<K>) -> bool {
        self.start <= other.start && other.stop < self.stop
    }

    /// Half-open overlap test: `self.start < other.stop && other.start < self.stop`.
    pub fn overlaps(&self, other: &Interval<K>) -> bool {
        self.start < other.stop && other.start < self.stop
    }

    /// The order intervals are sorted by before being nested.
    ///
    /// Intervals are ordered by start; among equal starts the one stopping
    /// later comes first, so a container always precedes what it contains.
    pub fn nesting_cmp(&self, other: &Interval<K>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| other.stop.cmp(&self.stop))
    }
}

impl<K> TryFrom<Range<K>> for Interval<K>
where
    K: Ord,
{
    type Error = NCListError;

    fn try_from(range: Range<K>) -> Result<Self, Self::Error> {
        Interval::new(range.start, range.end)
    }
}

impl<K> From<Interval<K>> for Range<K> {
    fn from(interval: Interval<K>) -> Self {
        interval.start..interval.stop
    }
}

impl<K> fmt::Display for Interval<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

/// Renders a sequence of intervals as a bracketed list, e.g. `[[1, 5), [3, 6)]`.
pub fn format_list<'a, K, I>(intervals: I) -> String
where
    K: fmt::Display + 'a,
    I: IntoIterator<Item = &'a Interval<K>>,
{
    let items: Vec<String> = intervals.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i32, stop: i32) -> Interval<i32> {
        Interval::new(start, stop).unwrap()
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        assert_eq!(Interval::new(5, 4), Err(NCListError::InvalidInterval));
        assert_eq!(Interval::new(4, 4), Ok(Interval { start: 4, stop: 4 }));
        assert_eq!(
            Interval::<i32>::try_from(7..2),
            Err(NCListError::InvalidInterval)
        );
        assert_eq!(Interval::<i32>::try_from(2..7), Ok(iv(2, 7)));
    }

    #[test]
    fn hand_built_interval_can_be_invalid() {
        let bad = Interval { start: 9, stop: 1 };
        assert!(!bad.is_valid());
        assert_eq!(bad.validate(), Err(NCListError::InvalidInterval));
    }

    #[test]
    fn contains_is_strict_on_stop() {
        assert!(iv(1, 5).contains(&iv(1, 2)));
        assert!(iv(1, 5).contains(&iv(2, 4)));
        assert!(iv(1, 5).contains(&iv(3, 3)));
        assert!(!iv(1, 5).contains(&iv(1, 5)));
        assert!(!iv(1, 5).contains(&iv(2, 5)));
        assert!(!iv(1, 5).contains(&iv(0, 2)));
        assert!(!iv(1, 2).contains(&iv(1, 5)));
    }

    #[test]
    fn overlaps_uses_half_open_bounds() {
        assert!(iv(1, 5).overlaps(&iv(4, 9)));
        assert!(iv(4, 9).overlaps(&iv(1, 5)));
        assert!(!iv(1, 5).overlaps(&iv(5, 9)));
        assert!(!iv(5, 9).overlaps(&iv(1, 5)));
        assert!(iv(3, 8).overlaps(&iv(5, 5)));
        assert!(!iv(3, 8).overlaps(&iv(8, 8)));
    }

    #[test]
    fn nesting_order_puts_containers_first() {
        assert_eq!(iv(1, 5).nesting_cmp(&iv(3, 4)), Ordering::Less);
        assert_eq!(iv(3, 8).nesting_cmp(&iv(3, 6)), Ordering::Less);
        assert_eq!(iv(3, 6).nesting_cmp(&iv(3, 8)), Ordering::Greater);
        assert_eq!(iv(3, 6).nesting_cmp(&iv(3, 6)), Ordering::Equal);

        let mut intervals = vec![iv(4, 5), iv(3, 5), iv(3, 8), iv(1, 2), iv(1, 5)];
        intervals.sort_by(Interval::nesting_cmp);
        assert_eq!(
            intervals,
            vec![iv(1, 5), iv(1, 2), iv(3, 8), iv(3, 5), iv(4, 5)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(iv(3, 8).to_string(), "[3, 8)");
        assert_eq!(format_list(&[iv(1, 5), iv(3, 6)]), "[[1, 5), [3, 6)]");
        assert_eq!(format_list(&Vec::<Interval<i32>>::new()), "[]");
    }

    #[test]
    fn converts_into_range() {
        let range: Range<i32> = iv(2, 6).into();
        assert_eq!(range, 2..6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid_interval() {
        let json = serde_json::to_string(&iv(1, 5)).unwrap();
        assert_eq!(json, r#"{"start":1,"stop":5}"#);
        let back: Interval<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv(1, 5));

        let bad: Result<Interval<i32>, _> = serde_json::from_str(r#"{"start":6,"stop":2}"#);
        assert!(bad.is_err());
    }
}
