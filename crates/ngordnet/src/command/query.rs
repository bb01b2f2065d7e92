use anyhow::{Context, Result};
use clap::Parser;
use lib::config::Config;
use lib::{Query, QueryKind, Year};

use super::OutputFormat;

#[derive(Parser)]
pub(crate) struct QueryArgs {
    /// Only keep the `k` most frequent words. Zero keeps every word.
    #[arg(short, default_value_t = 0)]
    k: usize,
    /// First year to count frequencies from. Defaults to the configured
    /// start year.
    #[arg(long, value_name = "year")]
    start_year: Option<Year>,
    /// Last year to count frequencies from. Defaults to the configured end
    /// year.
    #[arg(long, value_name = "year")]
    end_year: Option<Year>,
    /// Output format to use, defaults to `rich`. Available options are: rich,
    /// json, json-pretty.
    #[arg(long)]
    output_format: Option<String>,
    /// Words to query. With more than one word only the words shared by all
    /// of them are listed.
    #[arg(name = "words", required = true)]
    words: Vec<String>,
}

pub(crate) fn run(config: &Config, kind: QueryKind, args: &QueryArgs) -> Result<()> {
    let format = OutputFormat::parse(args.output_format.as_deref())?;
    let db = crate::data::database(config)?;

    let query = Query::new(kind, args.words.iter().cloned())
        .with_k(args.k)
        .with_years(
            args.start_year.unwrap_or(config.start_year),
            args.end_year.unwrap_or(config.end_year),
        );

    let answer = db
        .handle(&query)
        .with_context(|| format!("Querying {kind:?} of {}", args.words.join(", ")))?;

    let o = std::io::stdout();
    let mut o = o.lock();
    super::print_answer(&mut o, format, &answer)
}
