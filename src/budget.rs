//! Budget utilization and the dashboard alerting rule.

use std::fmt;

use crate::models::Budget;

/// The utilization percentage above which the dashboard banner fires.
///
/// This is deliberately distinct from [BudgetStatus]'s 90% danger boundary:
/// the banner and the list badges are independent signals.
pub const ALERT_THRESHOLD: f64 = 80.0;

const WARNING_BOUNDARY: f64 = 75.0;
const DANGER_BOUNDARY: f64 = 90.0;

/// The badge shown for a budget in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Utilization below 75%.
    Safe,
    /// Utilization in [75, 90).
    Warning,
    /// Utilization at or above 90%.
    Danger,
}

impl BudgetStatus {
    /// Classify a clamped utilization percentage.
    ///
    /// Each band includes its lower boundary: exactly 75 is a warning and
    /// exactly 90 is danger.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= DANGER_BOUNDARY {
            BudgetStatus::Danger
        } else if percentage >= WARNING_BOUNDARY {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Safe
        }
    }
}

/// A budget's progress toward its limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    /// `current_amount / limit * 100`, clamped to `[0, 100]`.
    pub percentage: f64,
    /// The badge band the percentage falls in.
    pub status: BudgetStatus,
}

impl Utilization {
    /// Whether this budget should raise the dashboard alert banner.
    pub fn exceeds_alert_threshold(&self) -> bool {
        self.percentage > ALERT_THRESHOLD
    }

    /// The percentage rounded half-away-from-zero for display, e.g. 97.5 → 98.
    pub fn display_percentage(&self) -> i64 {
        self.percentage.round() as i64
    }
}

/// Compute how far along `budget` is toward its limit.
///
/// A limit that is missing, malformed, or not positive yields 0% rather than
/// an error; malformed current amounts are treated as 0.
pub fn utilization(budget: &Budget) -> Utilization {
    let limit = budget.limit.parse_or_zero();
    let current = budget.current_amount.parse_or_zero();

    let percentage = if limit > 0.0 {
        (current / limit * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    Utilization {
        percentage,
        status: BudgetStatus::from_percentage(percentage),
    }
}

/// Pick the budget closest to (or furthest past) its limit. The first of any
/// tied budgets wins; an empty set has no critical budget.
///
/// Ordering uses the unclamped spend-to-limit ratio, so when several budgets
/// sit at a clamped 100% the most overrun one is still singled out.
pub fn critical_budget(budgets: &[Budget]) -> Option<(&Budget, Utilization)> {
    budgets
        .iter()
        .map(|budget| (budget, overrun_ratio(budget)))
        .reduce(|max, candidate| if candidate.1 > max.1 { candidate } else { max })
        .map(|(budget, _)| (budget, utilization(budget)))
}

/// `current_amount / limit` without clamping, 0 for unusable limits.
fn overrun_ratio(budget: &Budget) -> f64 {
    let limit = budget.limit.parse_or_zero();

    if limit > 0.0 {
        budget.current_amount.parse_or_zero() / limit
    } else {
        0.0
    }
}

/// The dashboard banner raised when the critical budget crosses
/// [ALERT_THRESHOLD].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    /// The category of the budget that triggered the alert.
    pub category: String,
    /// The rounded utilization percentage at the time of the alert.
    pub percentage: i64,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your {} budget is {}% used",
            self.category, self.percentage
        )
    }
}

/// Derive the dashboard alert from the full budget set, if any budget has
/// crossed the alert threshold.
pub fn budget_alert(budgets: &[Budget]) -> Option<BudgetAlert> {
    let (budget, utilization) = critical_budget(budgets)?;

    utilization
        .exceeds_alert_threshold()
        .then(|| BudgetAlert {
            category: budget.category.clone(),
            percentage: utilization.display_percentage(),
        })
}
