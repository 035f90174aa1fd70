//! Dashboard summary
//!
//! Headline totals for a single month.

use crate::models::{Budget, Money, Month, Transaction, TransactionType};

/// Totals for the reference month
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub month: Month,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_balance: Money,
    /// Sum of every budget set for the month
    pub total_budget: Money,
    /// Expenses as a percentage of the month's budgets, 0 without budgets
    pub budget_usage: f64,
    pub transaction_count: usize,
}

impl DashboardSummary {
    /// Summarise the transactions and budgets of `month`
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], month: Month) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut transaction_count = 0;

        for txn in transactions.iter().filter(|t| month.contains(t.date)) {
            match txn.kind {
                TransactionType::Income => total_income += txn.amount,
                TransactionType::Expense => total_expenses += txn.amount,
            }
            transaction_count += 1;
        }

        let total_budget: Money = budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|b| b.amount)
            .sum();

        Self {
            month,
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            total_budget,
            budget_usage: total_expenses.percent_of(total_budget).unwrap_or(0.0),
            transaction_count,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.month.long_label()));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Income",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Expenses",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Net Balance",
            self.net_balance.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        if self.total_budget.is_zero() {
            output.push_str("Budget Usage         no budgets set\n");
        } else {
            output.push_str(&format!(
                "{:<20} {:>17.1}%\n",
                "Budget Usage", self.budget_usage
            ));
            output.push_str(&format!(
                "  {} of {}\n",
                self.total_expenses.format_with_symbol(symbol),
                self.total_budget.format_with_symbol(symbol)
            ));
        }

        output.push_str(&format!("Transactions this month: {}\n", self.transaction_count));
        output
    }
}
