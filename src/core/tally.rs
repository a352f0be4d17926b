//! Collision tally over the digests produced by one hash function

use std::collections::HashMap;

/// Occurrence count per digest
#[derive(Debug, Default, Clone)]
pub struct CollisionTally {
    counts: HashMap<String, usize>,
    total: usize,
}

impl CollisionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one digest occurrence
    pub fn add(&mut self, digest: &str) {
        *self.counts.entry(digest.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of digests recorded
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct digests seen
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of (count - 1) over digests seen more than once
    pub fn collisions(&self) -> usize {
        self.counts
            .values()
            .filter(|&&count| count > 1)
            .map(|count| count - 1)
            .sum()
    }

    /// The `n` most frequent colliding digests, highest count first; ties are
    /// ordered by digest so output is stable
    pub fn top_collisions(&self, n: usize) -> Vec<(String, usize)> {
        let mut colliding: Vec<(String, usize)> = self
            .counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(digest, &count)| (digest.clone(), count))
            .collect();
        colliding.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        colliding.truncate(n);
        colliding
    }
}

impl<S: AsRef<str>> FromIterator<S> for CollisionTally {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tally = CollisionTally::new();
        for digest in iter {
            tally.add(digest.as_ref());
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_no_collisions() {
        let tally: CollisionTally = ["X", "Y"].into_iter().collect();
        assert_eq!(tally.collisions(), 0);
        assert_eq!(tally.distinct(), 2);
    }

    #[test]
    fn test_single_collision() {
        let tally: CollisionTally = ["X", "X"].into_iter().collect();
        assert_eq!(tally.collisions(), 1);
    }

    #[test]
    fn test_collisions_sum_over_groups() {
        let tally: CollisionTally = ["a", "a", "a", "b", "b", "c"].into_iter().collect();
        // (3 - 1) + (2 - 1)
        assert_eq!(tally.collisions(), 3);
        assert_eq!(tally.total(), 6);
    }

    #[test]
    fn test_empty_tally() {
        let tally = CollisionTally::new();
        assert_eq!(tally.collisions(), 0);
        assert!(tally.top_collisions(5).is_empty());
    }

    #[test]
    fn test_top_collisions_ordering() {
        let tally: CollisionTally = ["b", "b", "a", "a", "c", "c", "c", "d"]
            .into_iter()
            .collect();
        assert_eq!(
            tally.top_collisions(2),
            vec![("c".to_string(), 3), ("a".to_string(), 2)]
        );
        assert_eq!(tally.top_collisions(10).len(), 3);
    }

    proptest! {
        #[test]
        fn prop_collisions_equal_total_minus_distinct(
            digests in prop::collection::vec("[a-d]{1,2}", 0..64)
        ) {
            let tally: CollisionTally = digests.iter().collect();
            prop_assert_eq!(tally.collisions(), tally.total() - tally.distinct());
        }

        #[test]
        fn prop_collisions_invariant_to_order(
            digests in prop::collection::vec("[a-c]", 0..32)
        ) {
            let forward: CollisionTally = digests.iter().collect();
            let backward: CollisionTally = digests.iter().rev().collect();
            prop_assert_eq!(forward.collisions(), backward.collisions());
        }
    }
}
