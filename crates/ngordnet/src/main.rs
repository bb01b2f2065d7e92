mod command;
mod data;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lib::config::Config;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Query hyponyms, ancestors and word histories")]
struct Args {
    /// Load configuration from the given path instead of the default
    /// location.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,
    /// Path to the synsets file. Overrides the configuration.
    #[arg(long, value_name = "path")]
    synsets: Option<PathBuf>,
    /// Path to the hyponyms file. Overrides the configuration.
    #[arg(long, value_name = "path")]
    hyponyms: Option<PathBuf>,
    /// Path to the word counts file. Overrides the configuration.
    #[arg(long, value_name = "path")]
    words: Option<PathBuf>,
    /// Path to the total counts file. Overrides the configuration.
    #[arg(long, value_name = "path")]
    counts: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List words below the given words.
    Hyponyms(command::query::QueryArgs),
    /// List words above the given words.
    Ancestors(command::query::QueryArgs),
    /// Print the relative frequency history of the given words.
    History(command::history::HistoryArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let mut config = match &args.config {
        Some(path) => Config::load_path(path)?,
        None => Config::load()?,
    };

    if let Some(path) = &args.synsets {
        config.wordnet.synsets = path.clone();
    }

    if let Some(path) = &args.hyponyms {
        config.wordnet.hyponyms = path.clone();
    }

    if let Some(path) = &args.words {
        config.ngrams.words = path.clone();
    }

    if let Some(path) = &args.counts {
        config.ngrams.counts = path.clone();
    }

    match &args.command {
        Command::Hyponyms(query_args) => {
            command::query::run(&config, lib::QueryKind::Hyponyms, query_args)?;
        }
        Command::Ancestors(query_args) => {
            command::query::run(&config, lib::QueryKind::Ancestors, query_args)?;
        }
        Command::History(history_args) => {
            command::history::run(&config, history_args)?;
        }
    }

    Ok(())
}
