use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use lib::config::Config;
use lib::{Corpus, Database, WordNet};

/// Open a data file, decompressing it if it is gzipped.
fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| path.display().to_string())?;

    if path.extension() == Some("gz".as_ref()) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Load the ontology named by the configuration.
pub(crate) fn wordnet(config: &Config) -> Result<WordNet> {
    let files = &config.wordnet;

    tracing::info!(
        synsets = %files.synsets.display(),
        hyponyms = %files.hyponyms.display(),
        "Loading wordnet"
    );

    let wordnet = WordNet::from_readers(open(&files.synsets)?, open(&files.hyponyms)?)
        .with_context(|| {
            format!(
                "Loading {} and {}",
                files.synsets.display(),
                files.hyponyms.display()
            )
        })?;

    Ok(wordnet)
}

/// Load the corpus named by the configuration.
pub(crate) fn corpus(config: &Config) -> Result<Corpus> {
    let files = &config.ngrams;

    tracing::info!(
        words = %files.words.display(),
        counts = %files.counts.display(),
        "Loading corpus"
    );

    let corpus = Corpus::from_readers(open(&files.words)?, open(&files.counts)?)
        .with_context(|| {
            format!(
                "Loading {} and {}",
                files.words.display(),
                files.counts.display()
            )
        })?;

    Ok(corpus)
}

/// Load everything needed to answer queries.
pub(crate) fn database(config: &Config) -> Result<Database> {
    let wordnet = wordnet(config)?;
    let corpus = corpus(config)?;
    Ok(Database::new(wordnet, corpus).with_ranking(config.ranking))
}
