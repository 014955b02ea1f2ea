use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use pocketbook::cli::{
    handle_category_command, handle_expense_command, handle_history_command,
    handle_income_command, handle_person_command, handle_report_command, CategoryCommands,
    ExpenseCommands, HistoryCommands, IncomeCommands, PersonCommands, ReportCommands,
};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "pocketbook",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal monthly budget",
    long_about = "Pocketbook keeps one person's monthly income and categorized \
                  expenses and turns each month into a report: totals, balance \
                  and where the money went, category by category."
)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and starter categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Profile commands
    #[command(subcommand)]
    Person(PersonCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Monthly expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Monthly report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Month snapshots and audit log
    #[command(subcommand)]
    History(HistoryCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    });

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::with_settings(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Pocketbook at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            storage.categories.load()?;
            println!("Initialization complete!");
            println!();
            if created {
                println!("Starter categories created:");
            } else {
                println!("Existing categories kept:");
            }
            for category in storage.categories.get_all()? {
                println!("  - {} ({})", category.name, category.color);
            }
            println!();
            println!("Next: 'pocketbook person set <FIRST> <LAST> --birth-date YYYY-MM-DD'");
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("History directory: {}", paths.history_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Initialized:       {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Default category color: {}", settings.default_category_color);
            println!("  Date format:            {}", settings.date_format);
            println!("  Chart width:            {}", settings.chart_width);
            println!("  History snapshots:      {}", settings.history_enabled);
        }
        Some(Commands::Person(cmd)) => handle_person_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, &settings, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::History(cmd)) => handle_history_command(&storage, &settings, cmd)?,
        None => {
            println!("Pocketbook - personal monthly budget");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            println!("Run 'pocketbook init' to get started.");
        }
    }

    Ok(())
}

/// Installs the stderr tracing subscriber; `RUST_LOG` wins over `level`.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
