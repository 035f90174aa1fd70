//! Category breakdown
//!
//! Expense totals per category for one month, largest first.

use std::collections::HashMap;

use crate::models::{Category, Money, Month, Transaction};

/// Slices below this share are left unlabeled in charts
pub const LABEL_THRESHOLD_PERCENT: f64 = 5.0;

/// Spending in a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    /// Share of the month's total expenses
    pub percentage: f64,
    pub show_label: bool,
}

/// Expense breakdown for a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub month: Month,
    pub categories: Vec<CategorySpending>,
    pub total: Money,
}

impl CategoryBreakdown {
    pub fn generate(transactions: &[Transaction], month: Month) -> Self {
        let mut totals: HashMap<Category, (Money, usize)> = HashMap::new();

        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
        {
            let entry = totals.entry(txn.category).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total: Money = totals.values().map(|(amount, _)| *amount).sum();

        let mut categories: Vec<CategorySpending> = totals
            .into_iter()
            .map(|(category, (amount, count))| {
                let percentage = amount.percent_of(total).unwrap_or(0.0);
                CategorySpending {
                    category,
                    total: amount,
                    count,
                    percentage,
                    show_label: percentage >= LABEL_THRESHOLD_PERCENT,
                }
            })
            .collect();

        // Ties fall back to the fixed category order so output is stable
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            month,
            categories,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The category with the highest spending
    pub fn top(&self) -> Option<&CategorySpending> {
        self.categories.first()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by Category: {}\n", self.month.long_label()));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<22} {:>14} {:>8} {:>8}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.categories {
            let bar = "#".repeat((row.percentage / 5.0).round() as usize);
            output.push_str(&format!(
                "{:<22} {:>14} {:>8} {:>7.1}%  {}\n",
                row.category.label(),
                row.total.format_with_symbol(symbol),
                row.count,
                row.percentage,
                bar
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn expense(day: u32, cents: i64, category: Category) -> Transaction {
        Transaction::create(NewTransaction {
            amount: Money::from_cents(cents),
            description: "test".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            category,
            kind: TransactionType::Expense,
        })
    }

    fn june() -> Month {
        Month::new(2024, 6).unwrap()
    }

    #[test]
    fn test_sorted_descending() {
        let transactions = vec![
            expense(1, 2000, Category::Travel),
            expense(2, 5000, Category::Groceries),
            expense(3, 1000, Category::Groceries),
            expense(4, 3000, Category::Shopping),
        ];

        let breakdown = CategoryBreakdown::generate(&transactions, june());
        let order: Vec<Category> = breakdown.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![Category::Groceries, Category::Shopping, Category::Travel]
        );
        assert_eq!(breakdown.categories[0].count, 2);
        assert_eq!(breakdown.total, Money::from_cents(11_000));
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let transactions = vec![
            expense(1, 333, Category::Travel),
            expense(2, 333, Category::Groceries),
            expense(3, 334, Category::Shopping),
            expense(4, 1, Category::Other),
        ];

        let breakdown = CategoryBreakdown::generate(&transactions, june());
        let sum: f64 = breakdown.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_small_slices_unlabeled() {
        let transactions = vec![
            expense(1, 9600, Category::Groceries),
            expense(2, 400, Category::Entertainment),
        ];

        let breakdown = CategoryBreakdown::generate(&transactions, june());
        assert!(breakdown.categories[0].show_label);
        assert!(!breakdown.categories[1].show_label);
        assert_eq!(breakdown.categories.len(), 2);
    }

    #[test]
    fn test_income_and_other_months_excluded() {
        let mut income = expense(1, 5000, Category::Other);
        income.kind = TransactionType::Income;
        let transactions = vec![
            income,
            Transaction::create(NewTransaction {
                amount: Money::from_cents(700),
                description: "may".into(),
                date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
                category: Category::Travel,
                kind: TransactionType::Expense,
            }),
        ];

        let breakdown = CategoryBreakdown::generate(&transactions, june());
        assert!(breakdown.is_empty());
        assert!(breakdown.top().is_none());
        assert!(breakdown.format_terminal("$").contains("No expenses"));
    }
}
