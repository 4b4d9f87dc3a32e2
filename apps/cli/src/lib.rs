//! # Warung CLI Library
//!
//! Entry point for the `warung` binary: argument parsing, logging setup,
//! and dispatch into the per-command modules.
//!
//! ## Module Organization
//! ```text
//! warung_cli/
//! ├── lib.rs          ◄─── You are here (Cli definition & dispatch)
//! ├── config.rs       ◄─── Env-var configuration (paths, phone)
//! └── commands/
//!     ├── mod.rs      ◄─── CommandResult plumbing
//!     ├── list.rs     ◄─── Catalog browsing (search/sort/page)
//!     ├── cart.rs     ◄─── toggle / remove / show cart
//!     └── checkout.rs ◄─── Order message + WhatsApp link
//! ```

pub mod commands;
pub mod config;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::Config;
use warung_core::SortRule;

#[derive(Debug, Parser)]
#[command(
    name = "warung",
    about = "Warung Games storefront",
    long_about = "Browse the game catalog, keep a persistent cart, and export \
                  the order as a WhatsApp message.",
    after_help = "Examples:\n  warung list --search hades --sort price-asc\n  \
                  warung toggle \"Stardew Valley\"\n  warung checkout"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Browse the catalog page by page")]
    List {
        #[arg(long, default_value = "", help = "Case-insensitive name filter")]
        search: String,

        #[arg(
            long,
            help = "Sort rule: name-asc, name-desc, size-asc, size-desc, price-asc, price-desc"
        )]
        sort: Option<SortRule>,

        #[arg(long, default_value_t = 1, help = "Page to show")]
        page: usize,

        #[arg(
            long = "per-page",
            default_value_t = warung_core::DEFAULT_PER_PAGE,
            help = "Items per page"
        )]
        per_page: usize,
    },

    #[command(about = "Toggle an item in or out of the cart")]
    Toggle {
        #[arg(help = "Exact item name from the catalog")]
        name: String,
    },

    #[command(about = "Remove an item from the cart")]
    Remove {
        #[arg(help = "Exact item name")]
        name: String,
    },

    #[command(about = "Show cart contents and totals")]
    Cart,

    #[command(about = "Build the order message and the WhatsApp link")]
    Checkout,
}

/// Parses arguments and runs the selected command.
pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match cli.command {
        Command::List {
            search,
            sort,
            page,
            per_page,
        } => commands::list::run(&config, &search, sort, page, per_page),
        Command::Toggle { name } => commands::cart::toggle(&config, &name),
        Command::Remove { name } => commands::cart::remove(&config, &name),
        Command::Cart => commands::cart::show(&config),
        Command::Checkout => commands::checkout::run(&config),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default level is WARN so normal CLI output stays clean; raise with
/// `RUST_LOG=info` or `RUST_LOG=warung=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
