//! Derived analytics for the dashboard screen.
//!
//! Everything here is a pure, re-entrant function of the current record store
//! snapshots; nothing is cached, so consumers recompute on every change.

mod aggregation;
mod breakdown;

pub use aggregation::{
    MonthlyTrend, SummaryStatistics, TREND_MONTHS, TrendDirection, TrendPoint, month_label,
    monthly_trend, summarize,
};
pub use breakdown::{
    CATEGORY_PALETTE, CategoryBreakdown, CategorySlice, ColorPolicy, category_breakdown,
};

use time::Date;

use crate::{
    budget::{BudgetAlert, Utilization, budget_alert, utilization},
    models::{Budget, Expense},
};

/// One budget's progress entry on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    /// The budget's category label.
    pub category: String,
    /// The parsed current spend, 0 if malformed.
    pub current_amount: f64,
    /// The parsed limit, 0 if malformed.
    pub limit: f64,
    /// The clamped utilization and its status band.
    pub utilization: Utilization,
}

/// Everything the dashboard renders, derived in one pass from the record
/// store snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Total, highest, and average spend.
    pub statistics: SummaryStatistics,
    /// Per-category totals for the pie chart.
    pub breakdown: CategoryBreakdown,
    /// The 6-month spending trend for the line chart.
    pub trend: MonthlyTrend,
    /// A progress entry per tracked budget, in store order.
    pub budget_progress: Vec<BudgetProgress>,
    /// The banner for the critical budget, if one crossed the alert threshold.
    pub alert: Option<BudgetAlert>,
}

impl DashboardData {
    /// Derive the full dashboard from the given snapshots.
    ///
    /// `reference` fixes the trend window's final month, normally today.
    pub fn compute(
        expenses: &[Expense],
        budgets: &[Budget],
        reference: Date,
        policy: ColorPolicy,
    ) -> Self {
        let budget_progress = budgets
            .iter()
            .map(|budget| BudgetProgress {
                category: budget.category.clone(),
                current_amount: budget.current_amount.parse_or_zero(),
                limit: budget.limit.parse_or_zero(),
                utilization: utilization(budget),
            })
            .collect();

        Self {
            statistics: summarize(expenses),
            breakdown: category_breakdown(expenses, policy),
            trend: monthly_trend(expenses, reference, TREND_MONTHS),
            budget_progress,
            alert: budget_alert(budgets),
        }
    }
}
