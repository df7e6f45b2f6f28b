use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashflow_cli::cli::{
    handle_alerts_command, handle_balance_command, handle_project_command, handle_report_command,
    handle_simulate_command,
};
use cashflow_cli::config::{CashflowPaths, Settings};

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Terminal cash-flow analytics for transaction ledgers",
    long_about = "cashflow-cli reads a transaction CSV (date, amount, kind, optional \
                  category) and derives monthly health metrics, linear income and \
                  expense projections, expense alerts by category, and what-if \
                  balance simulations."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current balance of a transaction file
    Balance {
        /// Path to the transaction CSV file
        file: PathBuf,
    },

    /// Generate the monthly cash flow report
    Report {
        /// Path to the transaction CSV file
        file: PathBuf,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project income and expenses for the coming months
    Project {
        /// Path to the transaction CSV file
        file: PathBuf,

        /// Number of future months to project
        #[arg(long)]
        horizon: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flag categories with outsized expense totals
    Alerts {
        /// Path to the transaction CSV file
        file: PathBuf,

        /// Alert threshold as a fraction of total expenses
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Simulate a hypothetical transaction against the current balance
    #[command(alias = "sim")]
    Simulate {
        /// Path to the transaction CSV file
        file: PathBuf,

        /// Amount of the hypothetical transaction
        #[arg(short, long)]
        amount: f64,

        /// Transaction kind (income or expense)
        #[arg(short, long)]
        kind: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    cashflow_cli::init_tracing();

    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    match cli.command {
        Some(Commands::Balance { file }) => {
            handle_balance_command(&file, &settings)?;
        }
        Some(Commands::Report { file, output }) => {
            handle_report_command(&file, output.as_deref(), &settings)?;
        }
        Some(Commands::Project {
            file,
            horizon,
            output,
        }) => {
            handle_project_command(&file, horizon, output.as_deref(), &settings)?;
        }
        Some(Commands::Alerts { file, threshold }) => {
            handle_alerts_command(&file, threshold, &settings)?;
        }
        Some(Commands::Simulate { file, amount, kind }) => {
            handle_simulate_command(&file, amount, &kind, &settings)?;
        }
        Some(Commands::Config) => {
            println!("cashflow-cli Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:           {} ({})",
                settings.currency_symbol, settings.currency_code
            );
            println!("  Alert threshold:    {}", settings.alert_threshold);
            println!(
                "  Projection horizon: {} months",
                settings.projection_horizon
            );
        }
        None => {
            println!("cashflow-cli - Terminal cash-flow analytics");
            println!();
            println!("Run 'cashflow --help' for usage information.");
        }
    }

    Ok(())
}
