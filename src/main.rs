mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calstore_core::{CalStoreConfig, EventStore, FileStorage};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calstore")]
#[command(about = "Add, edit, delete and view your calendar events")]
struct Cli {
    /// Use this config file instead of ~/.config/calstore/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the directory events are stored in
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events as cards
    List {
        /// Only show events whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one event with its full description
    Show { id: String },
    /// Add a new event (missing fields are prompted for)
    Add {
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Work, Personal, Birthdays or Anniversary
        #[arg(short, long)]
        category: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Change fields of an existing event
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// Export all events as an .ics calendar
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = open_store(cli.config, cli.data_dir)?;

    match cli.command {
        Commands::List { search } => commands::list::run(&store, search.as_deref()).await,
        Commands::Show { id } => commands::show::run(&store, &id),
        Commands::Add {
            name,
            description,
            category,
            date,
        } => commands::add::run(&mut store, name, description, category, date),
        Commands::Update {
            id,
            name,
            description,
            category,
            date,
        } => commands::update::run(&mut store, &id, name, description, category, date),
        Commands::Delete { id } => commands::delete::run(&mut store, &id),
        Commands::Export { output } => commands::export::run(&store, output.as_deref()).await,
    }
}

fn open_store(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<EventStore<FileStorage>> {
    let mut config = match config_path {
        Some(path) => CalStoreConfig::load_from(&path),
        None => CalStoreConfig::load(),
    }
    .context("Failed to load calstore config")?;

    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    tracing::debug!(data_dir = %config.data_path().display(), "opening event store");

    let mut store = EventStore::from_config(&config);
    store.initialize();
    Ok(store)
}
