use std::fmt;

use crate::interval::Interval;

/// One node of the containment forest.
///
/// Every interval of `sublist` is contained in `value` (see
/// [`Interval::contains`]) and differs from it. The sublist is sorted in the
/// same nesting order as the top level.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<K> {
    pub(crate) value: Interval<K>,
    pub(crate) sublist: Vec<Entry<K>>,
}

impl<K> Entry<K> {
    pub(crate) fn new(value: Interval<K>) -> Entry<K> {
        Entry {
            value,
            sublist: Vec::new(),
        }
    }

    pub fn value(&self) -> &Interval<K> {
        &self.value
    }

    pub fn sublist(&self) -> &[Entry<K>] {
        &self.sublist
    }

    pub fn is_leaf(&self) -> bool {
        self.sublist.is_empty()
    }

    /// Writes `entries` one per line, indented two spaces per `depth`.
    pub(crate) fn dump(f: &mut fmt::Formatter, entries: &[Entry<K>], depth: usize) -> fmt::Result
    where
        K: fmt::Display,
    {
        let indent = "  ".repeat(depth);
        for entry in entries {
            write!(f, "{}{}", indent, entry.value)?;
            if entry.is_leaf() {
                writeln!(f)?;
            } else {
                writeln!(f, ", sublist = [")?;
                Entry::dump(f, &entry.sublist, depth + 1)?;
                writeln!(f, "{}]", indent)?;
            }
        }
        Ok(())
    }
}

impl<K> fmt::Display for Entry<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Entry::dump(f, std::slice::from_ref(self), 0)
    }
}
