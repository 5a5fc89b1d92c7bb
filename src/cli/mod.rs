//! CLI interface module
//!
//! The CLI is the presentation collaborator: it supplies form submissions
//! and navigation paths, and renders what the services return. It holds no
//! authoritative copy of the data; the store is opened per invocation.

pub mod commands;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{LinkFilter, LinkSort};
use crate::store::LinkStore;
use crate::utils::clock::{Clock, SystemClock};

#[derive(Parser)]
#[command(
    name = "snaplink",
    about = "Local-first URL shortener with click analytics",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL
    Shorten {
        /// Absolute http/https URL to shorten
        url: String,
        /// Expiration in minutes, 1 to 10080 (default from config)
        #[arg(long)]
        expires: Option<i64>,
        /// Custom alias, 3-20 characters after normalization
        #[arg(long)]
        alias: Option<String>,
        /// Input-slot tag recorded on the link
        #[arg(long, default_value = "cli")]
        slot: String,
    },
    /// Resolve a short path, recording a click on success
    Resolve {
        /// Navigation path (leading slash optional)
        path: String,
        /// Client agent descriptor recorded with the click
        #[arg(long, default_value = "snaplink-cli")]
        agent: String,
        /// Incoming referrer; omitted means "direct"
        #[arg(long)]
        referrer: Option<String>,
    },
    /// List stored links with their click histories
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,
        #[arg(long, value_enum, default_value = "newest")]
        sort: SortArg,
    },
    /// Show summary statistics
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FilterArg {
    All,
    Active,
    Expired,
}

impl From<FilterArg> for LinkFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => LinkFilter::All,
            FilterArg::Active => LinkFilter::ActiveOnly,
            FilterArg::Expired => LinkFilter::ExpiredOnly,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortArg {
    Newest,
    Oldest,
    MostClicked,
}

impl From<SortArg> for LinkSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => LinkSort::Newest,
            SortArg::Oldest => LinkSort::Oldest,
            SortArg::MostClicked => LinkSort::MostClicked,
        }
    }
}

/// Run a CLI command from clap-parsed input.
pub fn run(command: Commands, config: &AppConfig) -> Result<()> {
    let mut store = LinkStore::open(&config.links_file)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match command {
        Commands::Shorten {
            url,
            expires,
            alias,
            slot,
        } => commands::shorten(
            &mut store,
            clock,
            url,
            expires.unwrap_or(config.default_expiry_minutes),
            alias,
            slot,
        ),

        Commands::Resolve {
            path,
            agent,
            referrer,
        } => commands::resolve(&mut store, clock, &path, agent, referrer),

        Commands::List { filter, sort } => {
            commands::list(&store, clock, filter.into(), sort.into())
        }

        Commands::Stats => commands::stats(&store, clock),
    }
}
