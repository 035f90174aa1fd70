//! Budget display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    amount: String,
}

/// Format budgets as a table
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            month: b.month.to_string(),
            category: b.category.label().to_string(),
            amount: b.amount.format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    format!("{}\n", table)
}
