//! Transaction display formatting
//!
//! Tables and detail views for transactions in the terminal.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Money, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.short(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: truncate(&txn.description, 32),
            category: txn.category.label().to_string(),
            amount: signed(txn, symbol),
        }
    }
}

fn signed(txn: &Transaction, symbol: &str) -> String {
    txn.signed_amount().format_with_symbol(symbol)
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    let income: Money = transactions.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expenses: Money = transactions.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();

    format!(
        "{}\n\n{} transaction(s)  income {}  expenses {}\n",
        table,
        transactions.len(),
        income.format_with_symbol(symbol),
        expenses.format_with_symbol(symbol)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Type:        {}\n", txn.kind));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
