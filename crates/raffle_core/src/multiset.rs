//! Count-based multiset over borrowed values.
//!
//! Used for both the hat (tickets) and the remaining prize pool. Values are
//! kept in key order; `take_nth` addresses the n-th element of the sorted
//! expansion (each key repeated `count` times), which makes index draws
//! independent of the order the values were supplied in.

use alloc::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Multiset<'a, T: Ord> {
    counts: BTreeMap<&'a T, usize>,
    total: usize,
}

impl<'a, T: Ord> Multiset<'a, T> {
    pub fn new() -> Self {
        Self { counts: BTreeMap::new(), total: 0 }
    }

    pub fn insert(&mut self, value: &'a T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total number of elements, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct values still present.
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.count(value) > 0
    }

    /// Remove one instance of `value`. Returns `false` if none was present.
    pub fn remove_one(&mut self, value: &T) -> bool {
        match self.counts.get_mut(value) {
            Some(c) => {
                *c -= 1;
                if *c == 0 {
                    self.counts.remove(value);
                }
                self.total -= 1;
                true
            }
            None => false,
        }
    }

    /// Remove and return the element at `index` of the sorted expansion.
    /// Returns `None` if `index >= len()`.
    pub fn take_nth(&mut self, index: usize) -> Option<&'a T> {
        let mut rest = index;
        let mut hit = None;
        for (value, count) in &self.counts {
            if rest < *count {
                hit = Some(*value);
                break;
            }
            rest -= *count;
        }
        let value = hit?;
        self.remove_one(value);
        Some(value)
    }

    /// Remaining `(value, count)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, usize)> + '_ {
        self.counts.iter().map(|(v, c)| (*v, *c))
    }
}

impl<'a, T: Ord> FromIterator<&'a T> for Multiset<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        let mut ms = Multiset::new();
        for v in iter {
            ms.insert(v);
        }
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let items = ["foo", "foo", "bar"];
        let ms: Multiset<'_, &str> = items.iter().collect();
        assert_eq!(ms.len(), 3);
        assert_eq!(ms.distinct_len(), 2);
        assert_eq!(ms.count(&"foo"), 2);
        assert_eq!(ms.count(&"baz"), 0);
    }

    #[test]
    fn remove_one_decrements_then_drops_key() {
        let items = ["foo", "foo"];
        let mut ms: Multiset<'_, &str> = items.iter().collect();
        assert!(ms.remove_one(&"foo"));
        assert!(ms.contains(&"foo"));
        assert!(ms.remove_one(&"foo"));
        assert!(!ms.contains(&"foo"));
        assert!(!ms.remove_one(&"foo"));
        assert!(ms.is_empty());
    }

    #[test]
    fn take_nth_walks_sorted_expansion() {
        // expansion: a, b, b, c
        let items = ["c", "b", "a", "b"];
        let mut ms: Multiset<'_, &str> = items.iter().collect();
        assert_eq!(ms.take_nth(2), Some(&"b"));
        // now: a, b, c
        assert_eq!(ms.take_nth(2), Some(&"c"));
        assert_eq!(ms.take_nth(1), Some(&"b"));
        assert_eq!(ms.take_nth(1), None);
        assert_eq!(ms.take_nth(0), Some(&"a"));
        assert!(ms.is_empty());
    }
}
