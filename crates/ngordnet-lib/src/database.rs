//! Answering queries against a loaded ontology and corpus.

use std::collections::BTreeSet;

use crate::corpus::Corpus;
use crate::error::{Error, ErrorKind, Result};
use crate::graph::Direction;
use crate::query::{self, Answer, Query, QueryKind, Ranking, WordHistory};
use crate::wordnet::WordNet;

/// A read-only ontology and corpus which queries are answered against.
///
/// Answering a query never mutates the database, so a single instance can be
/// shared between any number of threads.
#[derive(Debug)]
pub struct Database {
    wordnet: WordNet,
    corpus: Corpus,
    ranking: Ranking,
}

impl Database {
    /// Construct a database ranking by raw counts.
    pub fn new(wordnet: WordNet, corpus: Corpus) -> Self {
        Self {
            wordnet,
            corpus,
            ranking: Ranking::default(),
        }
    }

    /// Change how candidates are scored for top `k` queries.
    pub fn with_ranking(self, ranking: Ranking) -> Self {
        Self { ranking, ..self }
    }

    /// Access the ontology.
    pub fn wordnet(&self) -> &WordNet {
        &self.wordnet
    }

    /// Access the corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Answer a query.
    pub fn handle(&self, query: &Query) -> Result<Answer> {
        tracing::debug!(?query);

        if query.words.is_empty() {
            return Err(Error::new(ErrorKind::EmptyQuery));
        }

        let direction = match query.kind {
            QueryKind::Hyponyms => Direction::Forward,
            QueryKind::Ancestors => Direction::Reverse,
            QueryKind::History => return self.history(query),
        };

        let candidates = self.closure(&query.words, direction)?;

        if query.k == 0 {
            return Ok(Answer::Words(
                candidates.into_iter().map(String::from).collect(),
            ));
        }

        let mut scored = Vec::with_capacity(candidates.len());

        for word in candidates {
            scored.push((word, self.score(word, query)?));
        }

        let words = query::top_k(scored, query.k);
        Ok(Answer::Words(words.into_iter().map(String::from).collect()))
    }

    fn closure(&self, words: &[String], direction: Direction) -> Result<BTreeSet<&str>> {
        match words {
            [word] => self.wordnet.closure(word, direction),
            words => self
                .wordnet
                .common_closure(words.iter().map(String::as_str), direction),
        }
    }

    /// Aggregate frequency of `word` over the years of `query`.
    fn score(&self, word: &str, query: &Query) -> Result<f64> {
        let series = match self.ranking {
            Ranking::Count => self
                .corpus
                .count_history(word, query.start_year, query.end_year),
            Ranking::Weight => {
                self.corpus
                    .weight_history(word, query.start_year, query.end_year)?
            }
        };

        Ok(series.sum())
    }

    fn history(&self, query: &Query) -> Result<Answer> {
        let mut histories = Vec::with_capacity(query.words.len());

        for word in &query.words {
            let history = self
                .corpus
                .weight_history(word, query.start_year, query.end_year)?;

            histories.push(WordHistory {
                word: word.clone(),
                history,
            });
        }

        Ok(Answer::History(histories))
    }
}
