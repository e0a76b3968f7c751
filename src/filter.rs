//! Search and filtering for the expense list screen.
//!
//! Like the dashboard aggregations, everything here is a pure function of the
//! current record store snapshot. The list shows the newest records first, so
//! results come back in reverse store order.

use time::Date;

use crate::models::Expense;

/// The criteria collected by the expense list's search bar and filter sheet.
///
/// An empty or unset field leaves that criterion unconstrained; the default
/// filter matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring matched against the name and description.
    pub search: String,
    /// Keep only expenses filed under exactly this category.
    pub category: Option<String>,
    /// Keep only expenses recorded on or after this date.
    pub date_from: Option<Date>,
    /// Keep only expenses recorded on or before this date.
    pub date_to: Option<Date>,
    /// Keep only expenses of at least this amount.
    pub min_amount: Option<f64>,
    /// Keep only expenses of at most this amount.
    pub max_amount: Option<f64>,
}

impl ExpenseFilter {
    /// A filter with only the search box filled in.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: query.into(),
            ..Self::default()
        }
    }

    /// Whether any criterion is set, i.e. the list is showing a subset.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Whether `expense` satisfies every set criterion.
    ///
    /// The date bounds are inclusive. When an amount bound is set, an expense
    /// whose amount does not parse is excluded: an unreadable amount cannot
    /// be shown to be in range.
    pub fn matches(&self, expense: &Expense) -> bool {
        if !self.search.is_empty() && !matches_search(expense, &self.search) {
            return false;
        }

        if let Some(category) = &self.category {
            if expense.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        let date = expense.created_at.date();
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }

        if self.min_amount.is_some() || self.max_amount.is_some() {
            let Some(amount) = expense.amount.parse() else {
                return false;
            };

            if self.min_amount.is_some_and(|min| amount < min) {
                return false;
            }
            if self.max_amount.is_some_and(|max| amount > max) {
                return false;
            }
        }

        true
    }
}

fn matches_search(expense: &Expense, query: &str) -> bool {
    let query = query.to_lowercase();

    expense.name.to_lowercase().contains(&query)
        || expense
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&query))
}

/// Apply `filter` to the snapshot, newest records first.
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .rev()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect()
}
