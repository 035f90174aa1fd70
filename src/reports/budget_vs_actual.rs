//! Budget versus actual spending

use std::collections::HashMap;
use std::fmt;

use crate::models::{Budget, Category, Money, Month, Transaction};

/// Usage above this percentage is flagged as a warning
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

/// How close spending is to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At or below 80% of the budget
    Good,
    /// Above 80%, up to and including 100%
    Warning,
    /// Above 100%
    Over,
}

impl BudgetStatus {
    pub fn from_usage(usage: f64) -> Self {
        if usage > 100.0 {
            Self::Over
        } else if usage > WARNING_THRESHOLD_PERCENT {
            Self::Warning
        } else {
            Self::Good
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Over => "over",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One budget compared against that month's spending
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetComparison {
    pub category: Category,
    pub budgeted: Money,
    pub spent: Money,
    /// Budget left, never negative
    pub remaining: Money,
    /// Spending beyond the budget, never negative
    pub overage: Money,
    pub usage: f64,
    pub status: BudgetStatus,
}

/// Every budget of a month with its actual spending
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetVsActual {
    pub month: Month,
    pub rows: Vec<BudgetComparison>,
}

impl BudgetVsActual {
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], month: Month) -> Self {
        let mut spent_by_category: HashMap<Category, Money> = HashMap::new();
        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
        {
            *spent_by_category.entry(txn.category).or_default() += txn.amount;
        }

        let rows = budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|budget| {
                let spent = spent_by_category
                    .get(&budget.category)
                    .copied()
                    .unwrap_or_default();
                let usage = spent.percent_of(budget.amount).unwrap_or(0.0);

                BudgetComparison {
                    category: budget.category,
                    budgeted: budget.amount,
                    spent,
                    remaining: (budget.amount - spent).floor_zero(),
                    overage: (spent - budget.amount).floor_zero(),
                    usage,
                    status: BudgetStatus::from_usage(usage),
                }
            })
            .collect();

        Self { month, rows }
    }

    /// Rows whose spending exceeds the budget
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetComparison> {
        self.rows.iter().filter(|r| r.spent > r.budgeted)
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget vs Actual: {}\n", self.month.long_label()));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12} {:>8} {:>9}\n",
            "Category", "Budget", "Spent", "Remaining", "Used", "Status"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.rows {
            let left = if row.overage.is_zero() {
                row.remaining.format_with_symbol(symbol)
            } else {
                format!("{} over", row.overage.format_with_symbol(symbol))
            };
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>12} {:>7.1}% {:>9}\n",
                row.category.label(),
                row.budgeted.format_with_symbol(symbol),
                row.spent.format_with_symbol(symbol),
                left,
                row.usage,
                row.status
            ));
        }

        output
    }
}
