use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-ordering of task ids by a key.
/// Entries with equal keys are extracted by increasing task id.
#[derive(Clone, Debug)]
pub struct PriorityOrdering<K: Ord> {
    heap: BinaryHeap<Reverse<(K, usize)>>,
}

impl<K: Ord> Default for PriorityOrdering<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<K: Ord + Copy> PriorityOrdering<K> {
    /// Creates an empty ordering with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: K, id: usize) {
        self.heap.push(Reverse((key, id)));
    }

    /// Returns the smallest key without removing its entry.
    #[must_use]
    pub fn peek_min_key(&self) -> Option<K> {
        self.heap.peek().map(|Reverse((key, _))| *key)
    }

    /// Removes the entry with the smallest key and returns its id.
    pub fn extract_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Iterates over the held `(key, id)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.heap.iter().map(|Reverse(entry)| *entry)
    }
}

impl<K: Ord> FromIterator<(K, usize)> for PriorityOrdering<K> {
    fn from_iter<T: IntoIterator<Item = (K, usize)>>(iter: T) -> Self {
        Self {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_by_key_then_id() {
        let mut ordering: PriorityOrdering<i64> = [(5, 0), (2, 3), (5, 1), (2, 2)]
            .into_iter()
            .collect();

        assert_eq!(ordering.len(), 4);
        assert_eq!(ordering.peek_min_key(), Some(2));

        let ids: Vec<_> = std::iter::from_fn(|| ordering.extract_min()).collect();
        assert_eq!(ids, [2, 3, 0, 1]);
        assert!(ordering.is_empty());
        assert_eq!(ordering.peek_min_key(), None);
    }

    #[test]
    fn iteration_does_not_drain() {
        let mut ordering = PriorityOrdering::with_capacity(3);
        ordering.insert(7, 1);
        ordering.insert(3, 0);

        let mut entries: Vec<_> = ordering.iter().collect();
        entries.sort_unstable();

        assert_eq!(entries, [(3, 0), (7, 1)]);
        assert_eq!(ordering.extract_min(), Some(0));
        assert_eq!(ordering.extract_min(), Some(1));
        assert_eq!(ordering.extract_min(), None);
    }
}
