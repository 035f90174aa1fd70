//! CLI commands for reports

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::reports::{
    BudgetVsActual, CategoryBreakdown, DashboardSummary, InsightsReport, MonthlyTrend,
};
use crate::storage::Storage;

use super::resolve_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses, net balance and budget usage
    Dashboard {
        /// Reference month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Expenses by category
    #[command(alias = "breakdown")]
    Categories {
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Expense totals for recent months
    Trend {
        /// Number of months to show (defaults to the trend_months setting)
        #[arg(short = 'n', long)]
        months: Option<usize>,
    },

    /// Budgets compared with actual spending
    #[command(alias = "budget")]
    Budgets {
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Spending insights and recent activity
    Insights {
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Every report for a month
    Summary {
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let transactions = storage.transactions.get_all()?;
    let budgets = storage.budgets.get_all()?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Dashboard { month } => {
            let month = resolve_month(month)?;
            let report = DashboardSummary::generate(&transactions, &budgets, month);
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Categories { month } => {
            let report = CategoryBreakdown::generate(&transactions, resolve_month(month)?);
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Trend { months } => {
            let report =
                MonthlyTrend::generate(&transactions, months.unwrap_or(settings.trend_months));
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Budgets { month } => {
            let month = resolve_month(month)?;
            let report = BudgetVsActual::generate(&transactions, &budgets, month);
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Insights { month } => {
            let month = resolve_month(month)?;
            let report = InsightsReport::generate(&transactions, &budgets, month, symbol);
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Summary { month } => {
            let month = resolve_month(month)?;
            let sections = [
                DashboardSummary::generate(&transactions, &budgets, month).format_terminal(symbol),
                CategoryBreakdown::generate(&transactions, month).format_terminal(symbol),
                MonthlyTrend::generate(&transactions, settings.trend_months)
                    .format_terminal(symbol),
                BudgetVsActual::generate(&transactions, &budgets, month).format_terminal(symbol),
                InsightsReport::generate(&transactions, &budgets, month, symbol)
                    .format_terminal(symbol),
            ];
            print!("{}", sections.join("\n"));
        }
    }

    Ok(())
}
