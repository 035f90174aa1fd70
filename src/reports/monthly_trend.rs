//! Monthly expense trend

use std::collections::BTreeMap;

use crate::models::{Money, Month, Transaction};

/// Number of months shown when no setting overrides it
pub const DEFAULT_TREND_MONTHS: usize = 12;

/// Expenses in one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: Month,
    /// Short label such as "Jun 2024"
    pub label: String,
    pub total: Money,
    pub count: usize,
}

/// Expense totals per month, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    pub points: Vec<TrendPoint>,
}

impl MonthlyTrend {
    /// Group every expense by month and keep the most recent `max_points`
    ///
    /// Months without expenses produce no point.
    pub fn generate(transactions: &[Transaction], max_points: usize) -> Self {
        let mut by_month: BTreeMap<Month, (Money, usize)> = BTreeMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let entry = by_month.entry(txn.month()).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let skip = by_month.len().saturating_sub(max_points);
        let points = by_month
            .into_iter()
            .skip(skip)
            .map(|(month, (total, count))| TrendPoint {
                month,
                label: month.label(),
                total,
                count,
            })
            .collect();

        Self { points }
    }

    /// Largest monthly total, used to scale bars
    pub fn peak(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.total)
            .max()
            .unwrap_or_default()
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Expense Trend\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No expenses recorded yet.\n");
            return output;
        }

        let peak = self.peak();
        for point in &self.points {
            let width = point
                .total
                .percent_of(peak)
                .map(|p| (p * 0.3).round() as usize)
                .unwrap_or(0);
            output.push_str(&format!(
                "{:<9} {:>14} {:>5}  {}\n",
                point.label,
                point.total.format_with_symbol(symbol),
                point.count,
                "#".repeat(width)
            ));
        }

        output
    }
}
