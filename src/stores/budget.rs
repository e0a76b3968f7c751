//! The session's budget records.
//!
//! The remote service exposes budget endpoints, but the app has never called
//! them: this store keeps the collection client-side, seeded with placeholder
//! records. `current_amount` is tracked here independently of the expense
//! ledger and is never recomputed from expense sums.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{Budget, NewBudget, RawAmount},
};

/// The in-memory holder of the session's budgets.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStore {
    budgets: Vec<Budget>,
}

impl BudgetStore {
    /// Create a store holding the given budgets.
    pub fn new(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    /// Create a store with the placeholder budgets the app ships with.
    pub fn seeded() -> Self {
        let seed = [
            ("1", "Food", "300", "250"),
            ("2", "Transportation", "150", "85"),
            ("3", "Entertainment", "200", "195"),
        ];

        let budgets = seed
            .into_iter()
            .map(|(id, category, limit, current)| Budget {
                id: id.to_owned(),
                category: category.to_owned(),
                limit: RawAmount::from(limit),
                current_amount: RawAmount::from(current),
                period: "Monthly".to_owned(),
            })
            .collect();

        Self::new(budgets)
    }

    /// The current snapshot of the session's budgets.
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Find the budget tracking `category`, if one exists.
    pub fn get_by_category(&self, category: &str) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.category == category)
    }

    /// Add a budget, assigning a millisecond-timestamp id.
    pub fn add(&mut self, budget: NewBudget) -> &Budget {
        let id = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).to_string();
        self.budgets.push(budget.into_budget(id));

        // Just pushed, so the collection is non-empty.
        self.budgets.last().unwrap()
    }

    /// Replace the budget with the given id.
    pub fn update(&mut self, id: &str, budget: NewBudget) -> Result<&Budget, Error> {
        let existing = self
            .budgets
            .iter_mut()
            .find(|budget| budget.id == id)
            .ok_or(Error::NotFound)?;

        *existing = budget.into_budget(id.to_owned());

        Ok(existing)
    }

    /// Remove the budget with the given id.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        if !self.budgets.iter().any(|budget| budget.id == id) {
            return Err(Error::NotFound);
        }

        self.budgets.retain(|budget| budget.id != id);

        Ok(())
    }
}

impl Default for BudgetStore {
    fn default() -> Self {
        Self::seeded()
    }
}
