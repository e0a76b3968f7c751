//! The expense record, the core type of the tracker.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{models::RawAmount, validation::ValidationError};

/// The category label applied to expenses that were filed without one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A single spending record owned by the session's record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The unique id assigned by the remote service.
    pub id: String,
    /// A short label for the expense, e.g. "Groceries".
    pub name: String,
    /// How much was spent.
    pub amount: RawAmount,
    /// When the expense was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The spending category, if the user picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Expense {
    /// The category to aggregate this expense under.
    ///
    /// Missing and empty categories both fall back to [DEFAULT_CATEGORY].
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }
}

/// The fields submitted to create or replace an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    /// A short label for the expense.
    pub name: String,
    /// How much was spent.
    pub amount: RawAmount,
    /// When the expense was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The spending category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewExpense {
    /// Check the form fields before submission.
    ///
    /// The first failing rule is returned so it can be shown next to the
    /// offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validation::validate_required(&self.name, "Name")?;

        match &self.amount {
            RawAmount::Text(text) => crate::validation::validate_amount(text),
            RawAmount::Number(value) if value.is_finite() && *value > 0.0 => Ok(()),
            RawAmount::Number(_) => Err(ValidationError::AmountNotPositive),
        }
    }

    /// Attach the id assigned by the remote service.
    pub fn into_expense(self, id: String) -> Expense {
        Expense {
            id,
            name: self.name,
            amount: self.amount,
            created_at: self.created_at,
            description: self.description,
            category: self.category,
        }
    }
}
