use std::iter::FusedIterator;
use std::slice;

use crate::interval::Interval;
use crate::node::Entry;

/// Pre-order iterator over every interval stored in a [`crate::NCList`].
///
/// A parent is yielded before its sublist, and a sublist is exhausted before
/// the parent's next sibling. This is the nesting order of the input.
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: Vec<slice::Iter<'a, Entry<K>>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(entries: &'a [Entry<K>], len: usize) -> Iter<'a, K> {
        Iter {
            stack: vec![entries.iter()],
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a Interval<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(entry) => {
                    if !entry.is_leaf() {
                        self.stack.push(entry.sublist.iter());
                    }
                    self.remaining -= 1;
                    return Some(&entry.value);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
