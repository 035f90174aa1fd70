use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use finance_visualizer::cli::{
    handle_budget_command, handle_export_command, handle_history_command, handle_report_command,
    handle_transaction_command, BudgetCommands, ExportCommands, HistoryArgs, ReportCommands,
    TransactionCommands,
};
use finance_visualizer::config::paths::DATA_DIR_ENV;
use finance_visualizer::config::{FinancePaths, Settings};
use finance_visualizer::display::format_category_list;
use finance_visualizer::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finviz",
    version,
    about = "Track income, expenses and monthly budgets from the terminal",
    long_about = "Finance Visualizer records income and expense transactions, \
                  keeps a monthly budget per category, and summarises spending \
                  with dashboards, category breakdowns, trends and insights."
)]
struct Cli {
    /// Directory holding the data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports and summaries
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data as CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// List the available categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("finance_visualizer={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    debug!(data_dir = %paths.base_dir().display(), "resolved data directory");

    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Finance Visualizer - personal finance tracking");
        println!();
        println!("Run 'finviz --help' for usage information.");
        println!("Run 'finviz report summary' for an overview of this month.");
        return Ok(());
    };

    let storage = Storage::open(paths.clone(), &settings)?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&storage, &settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::History(args) => handle_history_command(&storage, &settings, args)?,
        Commands::Config => {
            println!("Finance Visualizer Configuration");
            println!("===============================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Trend months:    {}", settings.trend_months);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!();
            println!(
                "Stored: {} transactions, {} budgets",
                storage.transactions.count()?,
                storage.budgets.count()?
            );
        }
        Commands::Categories => print!("{}", format_category_list()),
    }

    Ok(())
}
