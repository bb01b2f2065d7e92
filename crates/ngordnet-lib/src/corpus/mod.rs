//! Yearly word frequencies.

pub mod parser;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::io::BufRead;
use std::time::Instant;

use crate::error::Result;
use crate::time_series::{is_valid_year, TimeSeries, Year, MAX_YEAR, MIN_YEAR};

/// Word frequency histories and the per-year total over all words.
///
/// Every accessor returns an owned series, so callers are free to modify what
/// they get back without affecting the corpus.
#[derive(Debug, Default)]
pub struct Corpus {
    words: HashMap<Box<str>, TimeSeries>,
    total: TimeSeries,
}

impl Corpus {
    /// Start building a new corpus.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Build a corpus from a word count stream and a total count stream.
    ///
    /// The first line of each stream is a header. Lines which cannot be used
    /// are dropped.
    pub fn from_readers<W, C>(words: W, counts: C) -> Result<Self>
    where
        W: BufRead,
        C: BufRead,
    {
        let start = Instant::now();
        let mut builder = Self::builder();

        let mut dropped = 0usize;

        for line in counts.lines().skip(1) {
            let line = line?;

            match parser::total_count(&line) {
                Some(record) => builder.add_total(record.year, record.count),
                None => {
                    tracing::trace!(?line, "Dropping total count");
                    dropped += 1;
                }
            }
        }

        tracing::debug!(dropped, "Ingested total counts");

        let mut dropped = 0usize;

        for line in words.lines().skip(1) {
            let line = line?;

            match parser::word_count(&line) {
                Some(record) => builder.add_count(record.word, record.year, record.count),
                None => {
                    tracing::trace!(?line, "Dropping word count");
                    dropped += 1;
                }
            }
        }

        tracing::debug!(dropped, "Ingested word counts");

        let corpus = builder.build();

        tracing::info!(
            words = corpus.words.len(),
            years = corpus.total.len(),
            duration = ?start.elapsed(),
            "Loaded corpus"
        );

        Ok(corpus)
    }

    /// Test if the corpus has any counts for the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Raw counts of `word` within `[start, end]`.
    ///
    /// Unknown words produce an empty series.
    pub fn count_history(&self, word: &str, start: Year, end: Year) -> TimeSeries {
        match self.words.get(word) {
            Some(series) => series.slice(start, end),
            None => TimeSeries::new(),
        }
    }

    /// Raw counts of `word` over every valid year.
    pub fn count_history_all(&self, word: &str) -> TimeSeries {
        self.count_history(word, MIN_YEAR, MAX_YEAR)
    }

    /// Total number of recorded words per year.
    pub fn total_count_history(&self) -> TimeSeries {
        self.total.clone()
    }

    /// Counts of `word` relative to the yearly total within `[start, end]`.
    ///
    /// Unknown words produce an empty series. Fails if the word has a count
    /// for a year the totals do not cover.
    pub fn weight_history(&self, word: &str, start: Year, end: Year) -> Result<TimeSeries> {
        let Some(series) = self.words.get(word) else {
            return Ok(TimeSeries::new());
        };

        series
            .slice(start, end)
            .divided_by(&self.total.slice(start, end))
    }

    /// Relative counts of `word` over every valid year.
    pub fn weight_history_all(&self, word: &str) -> Result<TimeSeries> {
        self.weight_history(word, MIN_YEAR, MAX_YEAR)
    }

    /// Year-wise sum of the relative counts of every word in `words`.
    ///
    /// Unknown words contribute nothing.
    pub fn summed_weight_history<'w, I>(
        &self,
        words: I,
        start: Year,
        end: Year,
    ) -> Result<TimeSeries>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut output = TimeSeries::new();

        for word in words {
            output = output.plus(&self.weight_history(word, start, end)?);
        }

        Ok(output)
    }

    /// Summed relative counts of `words` over every valid year.
    pub fn summed_weight_history_all<'w, I>(&self, words: I) -> Result<TimeSeries>
    where
        I: IntoIterator<Item = &'w str>,
    {
        self.summed_weight_history(words, MIN_YEAR, MAX_YEAR)
    }
}

/// Builder for a [`Corpus`].
#[derive(Default)]
pub struct Builder {
    words: HashMap<Box<str>, TimeSeries>,
    total: TimeSeries,
}

impl Builder {
    /// Record the count of `word` in `year`, replacing any earlier count.
    ///
    /// Years outside of the valid range are ignored.
    pub fn add_count(&mut self, word: &str, year: Year, count: f64) {
        if !is_valid_year(year) {
            return;
        }

        match self.words.get_mut(word) {
            Some(series) => {
                series.insert(year, count);
            }
            None => {
                let mut series = TimeSeries::new();
                series.insert(year, count);
                self.words.insert(word.into(), series);
            }
        }
    }

    /// Record the total count of all words in `year`.
    ///
    /// Years outside of the valid range and totals which are not positive are
    /// ignored.
    pub fn add_total(&mut self, year: Year, count: f64) {
        if !is_valid_year(year) || !(count.is_finite() && count > 0.0) {
            return;
        }

        self.total.insert(year, count);
    }

    /// Finish building.
    pub fn build(self) -> Corpus {
        Corpus {
            words: self.words,
            total: self.total,
        }
    }
}
