//! Inclusive index ranges returned by the range resolvers.

use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` index range.
///
/// A range always covers at least one index (`start <= end`); resolvers
/// return `Option<IndexRange>` and use `None` as the empty-range sentinel
/// when the row or column set is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    /// First index covered by the range (inclusive).
    pub start: usize,
    /// Last index covered by the range (inclusive).
    pub end: usize,
}

impl IndexRange {
    /// Create a range covering `start..=end`.
    ///
    /// Callers must pass `start <= end`; the resolvers uphold this by
    /// construction.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of indices covered by the range (always at least 1).
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Iterate the covered indices in order.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl From<IndexRange> for std::ops::RangeInclusive<usize> {
    fn from(range: IndexRange) -> Self {
        range.indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_contains() {
        let r = IndexRange::new(2, 13);
        assert_eq!(r.count(), 12);
        assert!(r.contains(2));
        assert!(r.contains(13));
        assert!(!r.contains(1));
        assert!(!r.contains(14));
    }

    #[test]
    fn single_index_range() {
        let r = IndexRange::new(7, 7);
        assert_eq!(r.count(), 1);
        assert_eq!(r.indices().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn converts_to_std_range() {
        let r: std::ops::RangeInclusive<usize> = IndexRange::new(0, 4).into();
        assert_eq!(r.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }
}
