//! The budget record for a single spending category.

use serde::{Deserialize, Serialize};

use crate::models::RawAmount;

/// A spending limit for one category over a period.
///
/// `current_amount` is tracked independently of the expense ledger; it is not
/// recomputed from expense sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// The unique id of the budget.
    pub id: String,
    /// The spending category this budget applies to.
    pub category: String,
    /// The spending limit for the period.
    pub limit: RawAmount,
    /// How much has been spent against the limit so far.
    pub current_amount: RawAmount,
    /// The budgeting period, e.g. "Monthly".
    pub period: String,
}

/// The fields submitted to create or replace a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    /// The spending category this budget applies to.
    pub category: String,
    /// The spending limit for the period.
    pub limit: RawAmount,
    /// How much has been spent against the limit so far.
    pub current_amount: RawAmount,
    /// The budgeting period, e.g. "Monthly".
    pub period: String,
}

impl NewBudget {
    /// Attach an id to form a full budget record.
    pub fn into_budget(self, id: String) -> Budget {
        Budget {
            id,
            category: self.category,
            limit: self.limit,
            current_amount: self.current_amount,
            period: self.period,
        }
    }
}
