use anyhow::Result;
use clap::Parser;
use lib::config::Config;
use lib::{Database, Query, QueryKind, WordNet, Year};

use super::OutputFormat;

#[derive(Parser)]
pub(crate) struct HistoryArgs {
    /// First year to include. Defaults to the configured start year.
    #[arg(long, value_name = "year")]
    start_year: Option<Year>,
    /// Last year to include. Defaults to the configured end year.
    #[arg(long, value_name = "year")]
    end_year: Option<Year>,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    output_format: Option<String>,
    /// Words to print histories for.
    #[arg(name = "words", required = true)]
    words: Vec<String>,
}

pub(crate) fn run(config: &Config, args: &HistoryArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;

    // Histories only consult the corpus.
    let corpus = crate::data::corpus(config)?;
    let db = Database::new(WordNet::default(), corpus);

    let query = Query::new(QueryKind::History, args.words.iter().cloned()).with_years(
        args.start_year.unwrap_or(config.start_year),
        args.end_year.unwrap_or(config.end_year),
    );

    let answer = db.handle(&query)?;

    let o = std::io::stdout();
    let mut o = o.lock();
    super::print_answer(&mut o, format, &answer)
}
