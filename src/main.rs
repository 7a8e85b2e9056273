//! Trading journal - main entry point
//!
//! This binary provides three subcommands:
//! - add: Append one trade to the journal file
//! - list: Print the journal in insertion order
//! - report: Compute and print the full performance report

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "trade-journal")]
#[command(about = "Track your trades and analyze your performance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.json")]
    config: String,

    /// Journal file (overrides the configured data file)
    #[arg(short, long, global = true)]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append one trade to the journal
    Add {
        /// Trade date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        date: String,

        /// Stock or pair symbol, e.g. AAPL
        #[arg(long, default_value = "")]
        symbol: String,

        /// Buy price
        #[arg(long, default_value = "")]
        buy: String,

        /// Quantity
        #[arg(long, default_value = "")]
        qty: String,

        /// Sell price
        #[arg(long, default_value = "")]
        sell: String,

        /// Stop loss price
        #[arg(long, default_value = "")]
        stop: String,

        /// Explicit profit/loss, overrides the derived value
        #[arg(long = "pl", default_value = "")]
        profit_loss: String,

        /// Explicit percent return, overrides the derived value
        #[arg(long, default_value = "")]
        percent: String,

        /// Entry reasoning
        #[arg(long = "entry", default_value = "")]
        entry_logic: String,

        /// Exit reasoning
        #[arg(long = "exit", default_value = "")]
        exit_logic: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Print the journal in insertion order
    List,

    /// Compute and print the performance report
    Report {
        /// Force ANSI colors on
        #[arg(long, conflicts_with = "plain")]
        colored: bool,

        /// Force ANSI colors off
        #[arg(long)]
        plain: bool,
    },
}

fn setup_logging(verbose: bool, command_name: &str) -> Result<()> {
    std::fs::create_dir_all("logs")?;

    let log_filename = format!(
        "{}_{}.log",
        command_name,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    );
    let log_path = PathBuf::from("logs").join(&log_filename);

    let level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = tracing_appender::rolling::never("logs", &log_filename);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Log file: {}", log_path.display());

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command_name = match &cli.command {
        Commands::Add { .. } => "add",
        Commands::List => "list",
        Commands::Report { .. } => "report",
    };

    setup_logging(cli.verbose, command_name)?;

    match cli.command {
        Commands::Add {
            date,
            symbol,
            buy,
            qty,
            sell,
            stop,
            profit_loss,
            percent,
            entry_logic,
            exit_logic,
            notes,
        } => {
            let draft = trade_journal::TradeDraft {
                date,
                symbol,
                buy_price: buy,
                quantity: qty,
                sell_price: sell,
                stop_loss: stop,
                profit_loss,
                percent,
                entry_logic,
                exit_logic,
                notes,
            };
            commands::add::run(cli.config, cli.file, draft)
        }

        Commands::List => commands::list::run(cli.config, cli.file),

        Commands::Report { colored, plain } => {
            let colored = if colored {
                Some(true)
            } else if plain {
                Some(false)
            } else {
                None
            };
            commands::report::run(cli.config, cli.file, colored)
        }
    }
}
