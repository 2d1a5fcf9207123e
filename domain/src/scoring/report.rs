//! Alignment report computed from a finished tally
//!
//! Percentages use round-half-up on exact integer arithmetic, so they may
//! sum to 99 or 101 when the counts do not divide evenly.

use super::tally::ScoreTally;
use crate::core::category::Category;

/// Width of the percentage bar in characters (one character per 2%)
pub const BAR_WIDTH: usize = 50;

/// One category's share of the answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub count: u32,
    pub percent: u32,
}

impl CategoryShare {
    /// Number of filled bar cells for this share
    pub fn bar_filled(&self) -> usize {
        (self.percent as usize / 2).min(BAR_WIDTH)
    }

    /// Line written to the result file, e.g. `Ork: 50%`
    pub fn summary_line(&self) -> String {
        format!("{}: {}%", self.category, self.percent)
    }
}

/// The outcome of an attempt: per-category shares and the dominant category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentReport {
    pub shares: Vec<CategoryShare>,
    pub total: u32,
    pub dominant: Category,
}

impl AlignmentReport {
    pub fn from_tally(tally: &ScoreTally) -> Self {
        let total = tally.total();

        let shares: Vec<CategoryShare> = tally
            .snapshot()
            .into_iter()
            .map(|(category, count)| CategoryShare {
                category,
                count,
                percent: percent_of(count, total),
            })
            .collect();

        // First maximum in enumeration order wins ties
        let mut dominant = Category::ALL[0];
        let mut best = 0;
        for share in &shares {
            if share.count > best {
                best = share.count;
                dominant = share.category;
            }
        }

        Self {
            shares,
            total,
            dominant,
        }
    }

    pub fn quote(&self) -> &'static str {
        self.dominant.quote()
    }

    pub fn share(&self, category: Category) -> Option<&CategoryShare> {
        self.shares.iter().find(|s| s.category == category)
    }

    /// Plain-text summary persisted after each attempt
    pub fn summary_text(&self) -> String {
        let mut text = String::new();
        for share in &self.shares {
            text.push_str(&share.summary_line());
            text.push('\n');
        }
        text.push_str(&format!("You align most with: {}\n", self.dominant));
        text
    }
}

/// `round(100 * count / total)` with halves rounded up; zero when `total` is zero
pub fn percent_of(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let count = u64::from(count);
    let total = u64::from(total);
    ((200 * count + total) / (2 * total)) as u32
}
