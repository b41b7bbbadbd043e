use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use moneydeck::config::{DeckPaths, Settings};
use moneydeck::display::{format_account_details, format_account_list, format_transaction_list};
use moneydeck::seed;

#[derive(Parser)]
#[command(
    name = "moneydeck",
    version,
    about = "Terminal-based multi-currency account dashboard",
    long_about = "moneydeck is a terminal dashboard over a demo set of \
                  currency accounts and a transaction feed. Balances, feed \
                  amounts, and profile fields are editable in place; edits \
                  live for the session and reset on reload."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// List the demo accounts, or show one account's details
    Accounts {
        /// Account id to show in detail ("1".."4")
        id: Option<String>,
    },

    /// List the demo transaction feed, newest first
    #[command(alias = "txn")]
    Transactions {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Set and persist the accent color before showing the configuration
        #[arg(long)]
        accent: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DeckPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            moneydeck::logging::init(&paths)?;
            moneydeck::tui::run_tui(settings)?;
        }
        Some(Commands::Accounts { id: Some(id) }) => {
            let accounts = seed::accounts();
            match accounts.iter().find(|a| a.id.as_str() == id) {
                Some(account) => println!("{}", format_account_details(account)),
                None => bail!("No account with id '{}'", id),
            }
        }
        Some(Commands::Accounts { id: None }) => {
            println!("{}", format_account_list(&seed::accounts()));
        }
        Some(Commands::Transactions { limit }) => {
            let feed: Vec<_> = seed::transactions().into_iter().take(limit).collect();
            println!("{}", format_transaction_list(&feed));
        }
        Some(Commands::Config { accent }) => {
            if let Some(accent) = accent {
                settings.accent = accent;
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }
            println!("moneydeck Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Session log:    {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Grouped amounts: {}", settings.grouped_amounts);
            println!("  Accent color:    {}", settings.accent);
        }
        None => {
            println!("moneydeck - Terminal-based multi-currency account dashboard");
            println!();
            println!("Run 'moneydeck --help' for usage information.");
            println!("Run 'moneydeck tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
