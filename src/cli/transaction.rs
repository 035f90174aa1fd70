//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::Utc;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, TransactionForm, TransactionPatch, TransactionType};
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount in currency units (e.g. "12.50")
        amount: String,
        /// What the money was for
        description: String,
        /// Category (see `finviz categories`)
        #[arg(short, long, default_value = "")]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// expense or income
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },
    /// List transactions, most recently added first
    List {
        /// Case-insensitive text to look for in descriptions
        #[arg(short, long)]
        search: Option<String>,
        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// expense, income or "all"
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: String,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or unique prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or unique prefix)
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or unique prefix)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
            kind,
        } => {
            let form = TransactionForm {
                amount,
                description,
                date: date.unwrap_or_else(|| Utc::now().date_naive().format("%Y-%m-%d").to_string()),
                category,
                kind,
            };
            let txn = service.add_form(&form)?;

            println!("Added transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(category) = parse_category_filter(&category)? {
                filter = filter.category(category);
            }
            if let Some(kind) = parse_type_filter(&kind)? {
                filter = filter.kind(kind);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_list(&transactions, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(&id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
            kind,
        } => {
            let patch = TransactionPatch {
                amount,
                description,
                date,
                category,
                kind,
            };

            if patch.is_empty() {
                println!("Nothing to change. Pass at least one field to edit.");
                return Ok(());
            }

            let updated = match service.find(&id)? {
                Some(txn) => service.update(&txn.id, &patch)?,
                None => None,
            };
            match updated {
                Some(txn) => {
                    println!("Updated transaction:");
                    print!("{}", format_transaction_details(&txn, symbol));
                }
                None => println!("No transaction matches '{}'; nothing changed.", id),
            }
        }

        TransactionCommands::Delete { id } => {
            let removed = match service.find(&id)? {
                Some(txn) => service.delete(&txn.id)?,
                None => None,
            };
            match removed {
                Some(txn) => println!("Deleted transaction: {}", txn),
                None => println!("No transaction matches '{}'; nothing deleted.", id),
            }
        }
    }

    Ok(())
}

/// Parse a category filter, where "all" means no filter
pub fn parse_category_filter(value: &str) -> FinanceResult<Option<Category>> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value
        .parse::<Category>()
        .map(Some)
        .map_err(|e| FinanceError::Validation(e.to_string()))
}

/// Parse a type filter, where "all" means no filter
pub fn parse_type_filter(value: &str) -> FinanceResult<Option<TransactionType>> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value
        .parse::<TransactionType>()
        .map(Some)
        .map_err(FinanceError::Validation)
}
