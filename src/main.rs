//! Contact Book - command line entry point
//!
//! The book is read from `CONTACT_BOOK_PATH` (see [`Config`]).

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_book::{AddressBook, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Personal contact directory.
#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about)]
struct Cli {
    /// Defaults to `list`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// Print every contact, page by page
    List,
    /// Show one contact, with suggestions if the name is unknown
    Show {
        /// Exact contact name
        name: String,
    },
    /// Find contacts whose name, phone or email contains the query
    Search {
        query: String,
    },
    /// List birthdays coming up within the window
    Birthdays {
        /// Window in days (defaults to BIRTHDAY_WINDOW_DAYS)
        days: Option<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for command output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Opening address book");
    let book = AddressBook::open_or_default(&config.book_path).map_err(|e| {
        error!("Failed to open address book: {}", e);
        e
    })?;

    run(&book, &config, cli.command.unwrap_or(Command::List))
}

fn run(book: &AddressBook, config: &Config, command: Command) -> Result<()> {
    match command {
        Command::List => {
            for (number, page) in book.iterate(config.page_size)?.enumerate() {
                println!("--- page {} ---", number + 1);
                println!("{}", page);
            }
        }
        Command::Show { name } => match book.get(&name) {
            Some(record) => println!("{}", record),
            None => {
                println!("No contact named {:?}", name);
                for suggestion in book.suggest(&name, config.max_suggestions) {
                    println!("  did you mean {}?", suggestion.name);
                }
            }
        },
        Command::Search { query } => {
            for found in book.search_matches(&query) {
                println!("[{}] {}", found.field.display_name(), found.record);
            }
        }
        Command::Birthdays { days } => {
            let days = days.unwrap_or(config.birthday_window_days);
            for upcoming in book.upcoming_birthdays(days) {
                println!("{:>3} days  {}", upcoming.days, upcoming.record);
            }
        }
    }

    Ok(())
}
