//! Category breakdown for the spending pie chart.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::models::Expense;

/// The fixed palette cycled through for category slices.
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#FF9500", "#FF2D55", "#5AC8FA", "#007AFF", "#5856D6", "#AF52DE", "#FF3B30", "#34C759",
    "#FFCC00", "#64D2FF",
];

/// How palette colours are assigned to category slices.
///
/// Colour assignment carries no correctness requirement beyond determinism,
/// but it is user-visible, so the policy is explicit rather than a side effect
/// of iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Cycle the palette in the order categories first appear in the ledger.
    ///
    /// This reproduces the original chart colours but reshuffles them when
    /// records arrive in a different order.
    #[default]
    FirstSeen,
    /// Derive the palette index from a hash of the category name, so a
    /// category keeps its colour regardless of record order.
    Hashed,
}

/// One category's share of total spending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// The category label; uncategorized expenses appear under
    /// [crate::models::DEFAULT_CATEGORY].
    pub category: String,
    /// Total parseable spend in this category.
    pub amount: f64,
    /// The palette colour assigned to this slice.
    pub color: &'static str,
}

/// Per-category totals in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    /// One slice per category, ordered by first appearance in the ledger.
    pub slices: Vec<CategorySlice>,
}

impl CategoryBreakdown {
    /// The category with the largest total.
    ///
    /// Ties are broken by first appearance: the reduce starts from the first
    /// slice and only a strictly larger amount replaces it.
    pub fn max_category(&self) -> Option<&CategorySlice> {
        self.slices
            .iter()
            .reduce(|max, slice| if slice.amount > max.amount { slice } else { max })
    }
}

/// Group `expenses` by category and sum each group's parseable amounts.
///
/// Categories appear in the order they are first seen; records with no
/// category are grouped under the default label. Records whose amounts do not
/// parse are excluded from the sums but still establish their category's
/// position in the ordering.
pub fn category_breakdown(expenses: &[Expense], policy: ColorPolicy) -> CategoryBreakdown {
    // Categories are few, so a linear scan keeps first-seen order without an
    // order-preserving map.
    let mut groups: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        let label = expense.category_label();
        let amount = expense.amount.parse().unwrap_or(0.0);

        match groups.iter_mut().find(|(category, _)| category == label) {
            Some((_, total)) => *total += amount,
            None => groups.push((label.to_owned(), amount)),
        }
    }

    let slices = groups
        .into_iter()
        .enumerate()
        .map(|(position, (category, amount))| {
            let color = assign_color(&category, position, policy);
            CategorySlice {
                category,
                amount,
                color,
            }
        })
        .collect();

    CategoryBreakdown { slices }
}

fn assign_color(category: &str, position: usize, policy: ColorPolicy) -> &'static str {
    let index = match policy {
        ColorPolicy::FirstSeen => position % CATEGORY_PALETTE.len(),
        ColorPolicy::Hashed => {
            // DefaultHasher with default keys is stable within a build, which
            // is all the chart needs.
            let mut hasher = DefaultHasher::new();
            category.hash(&mut hasher);
            (hasher.finish() % CATEGORY_PALETTE.len() as u64) as usize
        }
    };

    CATEGORY_PALETTE[index]
}
