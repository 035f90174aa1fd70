//! Spending insights
//!
//! Short observations derived from one month of data, compared against the
//! previous month where relevant. Each insight is produced only when its
//! precondition holds, so the list may be empty.

use crate::models::{Budget, Money, Month, Transaction};

use super::budget_vs_actual::BudgetVsActual;
use super::category_breakdown::CategoryBreakdown;
use super::dashboard::DashboardSummary;

/// Number of expenses listed under recent activity
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

/// Which observation an insight reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    SpendingTrend,
    TopCategory,
    BudgetAlert,
    LargeTransactions,
    SavingsRate,
}

impl InsightKind {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SpendingTrend => "Monthly Spending Trend",
            Self::TopCategory => "Top Spending Category",
            Self::BudgetAlert => "Budget Alert",
            Self::LargeTransactions => "Large Transactions",
            Self::SavingsRate => "Savings Rate",
        }
    }
}

/// A single generated observation
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// Headline value, already formatted
    pub value: String,
}

impl Insight {
    fn new(kind: InsightKind, description: String, value: String) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            description,
            value,
        }
    }
}

/// Insights for a month plus its most recent expenses
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsReport {
    pub month: Month,
    pub insights: Vec<Insight>,
    pub recent_activity: Vec<Transaction>,
}

impl InsightsReport {
    pub fn generate(
        transactions: &[Transaction],
        budgets: &[Budget],
        month: Month,
        symbol: &str,
    ) -> Self {
        let current = DashboardSummary::generate(transactions, budgets, month);
        let previous_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense() && month.prev().contains(t.date))
            .map(|t| t.amount)
            .sum();

        let mut insights = Vec::new();

        if previous_expenses.is_positive() {
            let change = (current.total_expenses - previous_expenses)
                .percent_of(previous_expenses)
                .unwrap_or(0.0);
            let direction = if change >= 0.0 { "increased" } else { "decreased" };
            insights.push(Insight::new(
                InsightKind::SpendingTrend,
                format!(
                    "Your expenses {} by {:.1}% compared to last month",
                    direction,
                    change.abs()
                ),
                format_signed_percent(change),
            ));
        }

        let breakdown = CategoryBreakdown::generate(transactions, month);
        if let Some(top) = breakdown.top() {
            insights.push(Insight::new(
                InsightKind::TopCategory,
                format!(
                    "{} accounts for {:.1}% of your monthly expenses",
                    top.category, top.percentage
                ),
                top.total.format_with_symbol(symbol),
            ));
        }

        let comparison = BudgetVsActual::generate(transactions, budgets, month);
        let over: Vec<&str> = comparison
            .over_budget()
            .map(|row| row.category.label())
            .collect();
        if !over.is_empty() {
            let noun = if over.len() > 1 { "categories" } else { "category" };
            insights.push(Insight::new(
                InsightKind::BudgetAlert,
                format!("You've exceeded budget in {} {}", over.len(), noun),
                over.join(", "),
            ));
        }

        let month_expenses: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
            .collect();
        if !month_expenses.is_empty() {
            let count = month_expenses.len() as i128;
            let total: Money = month_expenses.iter().map(|t| t.amount).sum();
            let doubled_total = 2 * i128::from(total.cents());
            // amount > 2 * total / count, in integer cents
            let large = month_expenses
                .iter()
                .filter(|t| i128::from(t.amount.cents()) * count > doubled_total)
                .count();
            if large > 0 {
                // Expenses are positive, so adding count / 2 rounds half up
                let threshold_cents = (doubled_total + count / 2) / count;
                let threshold =
                    Money::from_cents(i64::try_from(threshold_cents).unwrap_or(i64::MAX));
                let plural = if large > 1 { "s" } else { "" };
                insights.push(Insight::new(
                    InsightKind::LargeTransactions,
                    format!("{} transaction{} above average amount", large, plural),
                    threshold.format_with_symbol(symbol),
                ));
            }
        }

        if current.total_income.is_positive() {
            let rate = current
                .net_balance
                .percent_of(current.total_income)
                .unwrap_or(0.0);
            let description = if rate >= 0.0 {
                format!("You're saving {:.1}% of your income this month", rate)
            } else {
                format!("You're spending {:.1}% more than your income", rate.abs())
            };
            insights.push(Insight::new(
                InsightKind::SavingsRate,
                description,
                format_signed_percent(rate),
            ));
        }

        Self {
            month,
            insights,
            recent_activity: recent_activity(transactions, month),
        }
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Insights: {}\n", self.month.long_label()));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.insights.is_empty() {
            output.push_str("Not enough data for insights yet.\n");
        }

        for insight in &self.insights {
            output.push_str(&format!("\n{} [{}]\n", insight.title, insight.value));
            output.push_str(&format!("  {}\n", insight.description));
        }

        if !self.recent_activity.is_empty() {
            output.push_str("\nRecent Activity\n");
            output.push_str(&"-".repeat(64));
            output.push('\n');
            for txn in &self.recent_activity {
                output.push_str(&format!(
                    "{}  {:<28} {:<18} -{}\n",
                    txn.date.format("%Y-%m-%d"),
                    txn.description,
                    txn.category.label(),
                    txn.amount.format_with_symbol(symbol)
                ));
            }
        }

        output
    }
}

/// The most recent expenses of a month, newest date first
pub fn recent_activity(transactions: &[Transaction], month: Month) -> Vec<Transaction> {
    let mut expenses: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
        .cloned()
        .collect();
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    expenses.truncate(RECENT_ACTIVITY_LIMIT);
    expenses
}

/// Format a percentage with an explicit sign, e.g. `+12.3%`
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}
