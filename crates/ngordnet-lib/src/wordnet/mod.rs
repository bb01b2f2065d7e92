//! Word to sense resolution and closures over the hyponym graph.

pub mod parser;


use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;
use std::time::Instant;

use crate::error::{Error, ErrorKind, Result};
use crate::graph::{Direction, Graph, SenseId};

/// An immutable index of senses, the words belonging to them, and the
/// hypernym to hyponym graph connecting them.
#[derive(Debug, Default)]
pub struct WordNet {
    senses: HashMap<Box<str>, BTreeSet<SenseId>>,
    words: HashMap<SenseId, BTreeSet<Box<str>>>,
    graph: Graph,
}

impl WordNet {
    /// Start building a new index.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Build an index from a synset stream and a hyponym stream.
    ///
    /// Every synset is added before any hyponym line is considered.
    pub fn from_readers<S, H>(synsets: S, hyponyms: H) -> Result<Self>
    where
        S: BufRead,
        H: BufRead,
    {
        let start = Instant::now();
        let mut builder = Self::builder();

        for (index, line) in synsets.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            let synset = parser::synset(&line).map_err(|e| Error::parse(index + 1, e))?;
            builder.add_synset(synset.id, synset.synonyms);
        }

        for (index, line) in hyponyms.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            let h = parser::hyponyms(&line).map_err(|e| Error::parse(index + 1, e))?;
            builder.add_hyponyms(h.hypernym, h.hyponyms)?;
        }

        let wordnet = builder.build();

        tracing::info!(
            senses = wordnet.words.len(),
            words = wordnet.senses.len(),
            duration = ?start.elapsed(),
            "Loaded wordnet"
        );

        Ok(wordnet)
    }

    /// Test if the word belongs to any sense.
    pub fn contains(&self, word: &str) -> bool {
        self.senses.contains_key(word)
    }

    /// Number of senses in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Test if the index has no senses.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Access the underlying sense graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every sense containing the given word.
    pub fn senses_of(&self, word: &str) -> Result<&BTreeSet<SenseId>> {
        self.senses
            .get(word)
            .ok_or_else(|| Error::new(ErrorKind::UnknownWord(word.into())))
    }

    /// The synonyms making up the given sense.
    pub fn words_of(&self, id: SenseId) -> Option<impl Iterator<Item = &str> + '_> {
        let words = self.words.get(&id)?;
        Some(words.iter().map(|w| w.as_ref()))
    }

    /// Words in every sense strictly below any sense of `word`.
    pub fn hyponyms(&self, word: &str) -> Result<BTreeSet<&str>> {
        self.closure(word, Direction::Forward)
    }

    /// Words in every sense strictly above any sense of `word`.
    pub fn ancestors(&self, word: &str) -> Result<BTreeSet<&str>> {
        self.closure(word, Direction::Reverse)
    }

    /// Hyponyms shared by every word in `words`.
    pub fn common_hyponyms<'w, I>(&self, words: I) -> Result<BTreeSet<&str>>
    where
        I: IntoIterator<Item = &'w str>,
    {
        self.common_closure(words, Direction::Forward)
    }

    /// Ancestors shared by every word in `words`.
    pub fn common_ancestors<'w, I>(&self, words: I) -> Result<BTreeSet<&str>>
    where
        I: IntoIterator<Item = &'w str>,
    {
        self.common_closure(words, Direction::Reverse)
    }

    /// Words reachable from the senses of `word` in the given direction.
    pub fn closure(&self, word: &str, direction: Direction) -> Result<BTreeSet<&str>> {
        let start = self.senses_of(word)?;
        let reached = self.graph.reachable(start.iter().copied(), direction)?;

        let mut output = BTreeSet::new();

        for id in reached {
            if let Some(words) = self.words_of(id) {
                output.extend(words);
            }
        }

        Ok(output)
    }

    /// Intersection of the closures of every word in `words`.
    ///
    /// Every word is resolved before any traversal happens, so an unknown
    /// word anywhere in the input fails the whole query.
    pub fn common_closure<'w, I>(&self, words: I, direction: Direction) -> Result<BTreeSet<&str>>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let words = words.into_iter().collect::<Vec<_>>();

        for word in &words {
            self.senses_of(word)?;
        }

        let Some((first, rest)) = words.split_first() else {
            return Err(Error::new(ErrorKind::EmptyQuery));
        };

        let mut output = self.closure(first, direction)?;

        for word in rest {
            if output.is_empty() {
                break;
            }

            let other = self.closure(word, direction)?;
            output.retain(|w| other.contains(w));
        }

        Ok(output)
    }
}

/// Builder for a [`WordNet`].
#[derive(Default)]
pub struct Builder {
    senses: HashMap<Box<str>, BTreeSet<SenseId>>,
    words: HashMap<SenseId, BTreeSet<Box<str>>>,
    graph: Graph,
}

impl Builder {
    /// Add a synset. Adding the same id twice merges the synonyms.
    pub fn add_synset<'a, I>(&mut self, id: SenseId, synonyms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = self.words.entry(id).or_default();

        for word in synonyms {
            self.senses.entry(word.into()).or_default().insert(id);
            words.insert(word.into());
        }

        self.graph.add_node(id);
    }

    /// Add edges from a hypernym to each of its hyponyms.
    pub fn add_hyponyms<I>(&mut self, hypernym: SenseId, hyponyms: I) -> Result<()>
    where
        I: IntoIterator<Item = SenseId>,
    {
        for hyponym in hyponyms {
            self.graph.add_edge(hypernym, hyponym)?;
        }

        Ok(())
    }

    /// Finish building.
    pub fn build(self) -> WordNet {
        WordNet {
            senses: self.senses,
            words: self.words,
            graph: self.graph,
        }
    }
}
