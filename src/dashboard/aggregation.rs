//! Expense aggregation for the dashboard summary.
//!
//! Provides pure functions that reduce the expense ledger to headline
//! statistics and a monthly spending trend. Every function here degrades
//! per-record: a malformed amount is excluded from sums, never an error.

use std::collections::HashMap;

use time::{Date, Month};

use crate::models::Expense;

/// The number of months shown in the dashboard trend chart.
pub const TREND_MONTHS: usize = 6;

/// Headline statistics across the whole expense ledger.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryStatistics {
    /// Sum of all parseable expense amounts.
    pub total_spent: f64,
    /// The largest single expense, 0 when no expense parses.
    pub highest: f64,
    /// `total_spent` divided by the record count, 0 for an empty ledger.
    pub average: f64,
}

/// Compute total, highest, and average spend over `expenses`.
///
/// The average divides by the full record count, including records whose
/// amounts did not parse, matching the dashboard's historical behaviour.
pub fn summarize(expenses: &[Expense]) -> SummaryStatistics {
    let mut total_spent = 0.0;
    let mut highest = 0.0_f64;

    for expense in expenses {
        if let Some(amount) = expense.amount.parse() {
            total_spent += amount;
            highest = highest.max(amount);
        }
    }

    let average = if expenses.is_empty() {
        0.0
    } else {
        total_spent / expenses.len() as f64
    };

    SummaryStatistics {
        total_spent,
        highest,
        average,
    }
}

/// Whether spending moved up or down between the two most recent months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    /// The latest month spent strictly more than the month before.
    Increased,
    /// The latest month spent the same or less than the month before.
    Decreased,
}

/// One calendar-month bucket in the spending trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// The first day of the bucket's month.
    pub month: Date,
    /// The month as a 3-letter abbreviation, e.g. "Jan".
    pub label: &'static str,
    /// Total parseable spend assigned to this month.
    pub total: f64,
}

/// The monthly spending trend for the dashboard line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    /// Exactly the requested number of buckets, oldest first, zero-filled.
    pub points: Vec<TrendPoint>,
    /// How the latest month compares to the one before it.
    pub direction: TrendDirection,
}

impl MonthlyTrend {
    /// The bucket values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.total).collect()
    }
}

/// Bucket `expenses` into `month_count` consecutive calendar months ending at
/// `reference`'s month (inclusive), oldest first.
///
/// Expenses whose month falls outside the window are dropped silently. Months
/// with no expenses appear as zero rather than being omitted.
pub fn monthly_trend(expenses: &[Expense], reference: Date, month_count: usize) -> MonthlyTrend {
    let mut months = Vec::with_capacity(month_count);
    let mut month = month_start(reference);

    for _ in 0..month_count {
        months.push(month);
        month = previous_month(month);
    }

    months.reverse();

    let mut totals: HashMap<Date, f64> = months.iter().map(|&month| (month, 0.0)).collect();

    for expense in expenses {
        let month = month_start(expense.created_at.date());

        if let (Some(slot), Some(amount)) = (totals.get_mut(&month), expense.amount.parse()) {
            *slot += amount;
        }
    }

    let points: Vec<TrendPoint> = months
        .into_iter()
        .map(|month| TrendPoint {
            month,
            label: month_label(month.month()),
            total: totals[&month],
        })
        .collect();

    let direction = trend_direction(&points);

    MonthlyTrend { points, direction }
}

/// Compare the last two buckets. The comparison is strictly greater-than, so
/// equal months resolve to [TrendDirection::Decreased].
fn trend_direction(points: &[TrendPoint]) -> TrendDirection {
    match points {
        [.., second_to_last, last] if last.total > second_to_last.total => {
            TrendDirection::Increased
        }
        _ => TrendDirection::Decreased,
    }
}

/// The first day of `date`'s month.
fn month_start(date: Date) -> Date {
    // Day 1 is valid for every month.
    date.replace_day(1).unwrap()
}

/// The first day of the month before `month_start`.
fn previous_month(month_start: Date) -> Date {
    let year = match month_start.month() {
        Month::January => month_start.year() - 1,
        _ => month_start.year(),
    };

    Date::from_calendar_date(year, month_start.month().previous(), 1).unwrap()
}

/// Format a month as its 3-letter abbreviation.
pub fn month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::{TREND_MONTHS, TrendDirection, monthly_trend, summarize, trend_direction};
    use crate::models::{Expense, RawAmount};

    fn expense(amount: RawAmount, created_at: time::OffsetDateTime) -> Expense {
        Expense {
            id: "1".to_owned(),
            name: "Test".to_owned(),
            amount,
            created_at,
            description: None,
            category: None,
        }
    }

    #[test]
    fn summarize_handles_empty_ledger() {
        let stats = summarize(&[]);

        assert_eq!(stats.total_spent, 0.0);
        assert_eq!(stats.highest, 0.0);
        assert_eq!(stats.average, 0.0);
    }

    #[test]
    fn summarize_sums_and_finds_highest() {
        let expenses = vec![
            expense(RawAmount::from("100"), datetime!(2025-06-01 12:00 UTC)),
            expense(RawAmount::from("50"), datetime!(2025-06-02 12:00 UTC)),
            expense(RawAmount::Number(30.0), datetime!(2025-06-03 12:00 UTC)),
        ];

        let stats = summarize(&expenses);

        assert_eq!(stats.total_spent, 180.0);
        assert_eq!(stats.highest, 100.0);
        assert_eq!(stats.average, 60.0);
    }

    #[test]
    fn summarize_excludes_unparseable_amounts() {
        let expenses = vec![
            expense(RawAmount::from("100"), datetime!(2025-06-01 12:00 UTC)),
            expense(RawAmount::from("not a number"), datetime!(2025-06-02 12:00 UTC)),
        ];

        let stats = summarize(&expenses);

        assert_eq!(stats.total_spent, 100.0);
        assert_eq!(stats.highest, 100.0);
        // The record count still includes the degraded record.
        assert_eq!(stats.average, 50.0);
    }

    #[test]
    fn monthly_trend_always_produces_month_count_buckets() {
        let trend = monthly_trend(&[], date!(2025 - 06 - 15), TREND_MONTHS);

        assert_eq!(trend.points.len(), TREND_MONTHS);
        assert_eq!(trend.points[0].month, date!(2025 - 01 - 01));
        assert_eq!(trend.points[5].month, date!(2025 - 06 - 01));
        assert!(trend.points.iter().all(|point| point.total == 0.0));
    }

    #[test]
    fn monthly_trend_buckets_span_a_year_boundary() {
        let trend = monthly_trend(&[], date!(2025 - 02 - 10), TREND_MONTHS);

        let labels: Vec<&str> = trend.points.iter().map(|point| point.label).collect();
        assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(trend.points[0].month, date!(2024 - 09 - 01));
    }

    #[test]
    fn monthly_trend_assigns_expenses_to_their_month() {
        let expenses = vec![
            expense(RawAmount::from("100"), datetime!(2025-04-10 09:00 UTC)),
            expense(RawAmount::from("25"), datetime!(2025-04-28 18:00 UTC)),
            expense(RawAmount::from("40"), datetime!(2025-06-01 00:00 UTC)),
            // Outside the window, dropped silently.
            expense(RawAmount::from("999"), datetime!(2024-06-01 00:00 UTC)),
        ];

        let trend = monthly_trend(&expenses, date!(2025 - 06 - 15), TREND_MONTHS);
        let totals = trend.values();

        assert_eq!(totals, vec![0.0, 0.0, 0.0, 125.0, 0.0, 40.0]);
    }

    #[test]
    fn trend_direction_uses_strict_comparison() {
        let direction = |values: &[f64]| {
            let points: Vec<_> = values
                .iter()
                .map(|&total| super::TrendPoint {
                    month: date!(2025 - 01 - 01),
                    label: "Jan",
                    total,
                })
                .collect();
            trend_direction(&points)
        };

        assert_eq!(direction(&[80.0, 100.0]), TrendDirection::Increased);
        assert_eq!(direction(&[100.0, 80.0]), TrendDirection::Decreased);
        // Ties resolve to decreased.
        assert_eq!(direction(&[100.0, 100.0]), TrendDirection::Decreased);
        assert_eq!(direction(&[100.0]), TrendDirection::Decreased);
    }
}
