pub(crate) mod history;
pub(crate) mod query;

use std::io::Write;

use anyhow::{bail, Result};
use lib::Answer;

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Rich,
    Json,
    JsonPretty,
}

impl OutputFormat {
    fn parse(name: Option<&str>) -> Result<Self> {
        Ok(match name {
            Some("rich") | None => OutputFormat::Rich,
            Some("json") => OutputFormat::Json,
            Some("json-pretty") => OutputFormat::JsonPretty,
            Some(name) => bail!("Unsupported output format: {}", name),
        })
    }
}

fn print_answer<O>(o: &mut O, format: OutputFormat, answer: &Answer) -> Result<()>
where
    O: ?Sized + Write,
{
    match format {
        OutputFormat::Rich => match answer {
            Answer::Words(..) => writeln!(o, "{answer}")?,
            Answer::History(..) => write!(o, "{answer}")?,
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *o, answer)?;
            writeln!(o)?;
        }
        OutputFormat::JsonPretty => {
            serde_json::to_writer_pretty(&mut *o, answer)?;
            writeln!(o)?;
        }
    }

    o.flush()?;
    Ok(())
}
