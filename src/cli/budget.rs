//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_list;
use crate::error::FinanceResult;
use crate::models::BudgetForm;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::resolve_month;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    ///
    /// A category holds one budget at a time; setting it again replaces the
    /// previous budget, even when that one was for another month.
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "400" or "400.00")
        amount: String,
        /// Budget month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets
    List {
        /// Only show budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let form = BudgetForm {
                category,
                amount,
                month: match month {
                    Some(month) => month,
                    None => resolve_month(None)?.to_string(),
                },
            };
            let budget = service.set_form(&form)?;
            println!(
                "Budget set: {} {} for {}",
                budget.category,
                budget.amount.format_with_symbol(symbol),
                budget.month.long_label()
            );
        }

        BudgetCommands::List { month } => {
            let budgets = match month {
                Some(month) => service.for_month(resolve_month(Some(month))?)?,
                None => service.list()?,
            };
            print!("{}", format_budget_list(&budgets, symbol));
        }
    }

    Ok(())
}
