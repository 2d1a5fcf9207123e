//! Score tally for a single quiz attempt

use crate::core::category::Category;

/// Per-category answer counts
///
/// Backed by a fixed array indexed by [`Category::index`], so every known
/// category always has an entry and an unknown category cannot be counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTally {
    counts: [u32; Category::ALL.len()],
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every category
    pub fn reset(&mut self) {
        self.counts = [0; Category::ALL.len()];
    }

    pub fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn count(&self, category: Category) -> u32 {
        self.counts[category.index()]
    }

    /// Sum of all counts (the number of accepted answers)
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Read-only `(category, count)` view in enumeration order
    pub fn snapshot(&self) -> Vec<(Category, u32)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_zeroed() {
        let tally = ScoreTally::new();
        assert_eq!(tally.total(), 0);
        for (_, count) in tally.snapshot() {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_increment_and_total() {
        let mut tally = ScoreTally::new();
        tally.increment(Category::Ork);
        tally.increment(Category::Ork);
        tally.increment(Category::Eldar);

        assert_eq!(tally.count(Category::Ork), 2);
        assert_eq!(tally.count(Category::Eldar), 1);
        assert_eq!(tally.count(Category::SpaceMarine), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_reset_clears_every_category() {
        let mut tally = ScoreTally::new();
        for category in Category::ALL {
            tally.increment(category);
        }
        tally.reset();
        assert_eq!(tally, ScoreTally::new());
    }

    #[test]
    fn test_snapshot_order() {
        let mut tally = ScoreTally::new();
        tally.increment(Category::ImperialGuard);
        let snapshot = tally.snapshot();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot[0], (Category::Ork, 0));
        assert_eq!(snapshot[4], (Category::ImperialGuard, 1));
    }
}
