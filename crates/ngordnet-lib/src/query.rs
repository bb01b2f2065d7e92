//! Query descriptions and their rendered answers.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time_series::{TimeSeries, Year, MAX_YEAR, MIN_YEAR};

/// The relation or report a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryKind {
    /// Words below the query words.
    Hyponyms,
    /// Words above the query words.
    Ancestors,
    /// Relative frequency history of each query word.
    History,
}

/// How candidates are scored when only the top `k` are requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ranking {
    /// Sum of raw yearly counts in the requested range.
    #[default]
    Count,
    /// Sum of yearly counts relative to the yearly total.
    Weight,
}

/// A single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub kind: QueryKind,
    pub words: Vec<String>,
    /// Number of most frequent words to keep. Zero keeps every word.
    #[serde(default)]
    pub k: usize,
    #[serde(default = "default_start_year")]
    pub start_year: Year,
    #[serde(default = "default_end_year")]
    pub end_year: Year,
}

fn default_start_year() -> Year {
    MIN_YEAR
}

fn default_end_year() -> Year {
    MAX_YEAR
}

impl Query {
    /// Construct a query over every valid year which keeps every word.
    pub fn new<I>(kind: QueryKind, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            kind,
            words: words.into_iter().map(Into::into).collect(),
            k: 0,
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
        }
    }

    /// Only keep the `k` most frequent words.
    pub fn with_k(self, k: usize) -> Self {
        Self { k, ..self }
    }

    /// Restrict frequencies to `[start_year, end_year]`.
    pub fn with_years(self, start_year: Year, end_year: Year) -> Self {
        Self {
            start_year,
            end_year,
            ..self
        }
    }
}

/// The history of a single word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordHistory {
    pub word: String,
    pub history: TimeSeries,
}

/// The answer to a [`Query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    /// Words in ascending lexicographic order.
    Words(Vec<String>),
    /// One history per query word, in query order.
    History(Vec<WordHistory>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Words(words) => {
                write!(f, "[")?;

                for (index, word) in words.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{word}")?;
                }

                write!(f, "]")
            }
            Answer::History(histories) => {
                for h in histories {
                    writeln!(f, "{}: {}", h.word, h.history)?;
                }

                Ok(())
            }
        }
    }
}

/// Pick the `k` highest scoring words and return them in lexicographic order.
///
/// Words scoring zero are never picked. Equal scores are broken by preferring
/// the lexicographically smaller word.
pub(crate) fn top_k<'a, I>(scored: I, k: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut scored = scored
        .into_iter()
        .filter(|&(_, score)| score > 0.0)
        .collect::<Vec<_>>();

    scored.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(b.0),
        ordering => ordering,
    });

    scored.truncate(k);

    let mut words = scored.into_iter().map(|(word, _)| word).collect::<Vec<_>>();
    words.sort_unstable();
    words
}

#[test]
fn test_top_k_ties_and_order() {
    let picked = top_k([("c", 1.0), ("b", 5.0), ("a", 5.0)], 2);
    assert_eq!(picked, ["a", "b"]);

    let picked = top_k([("zebra", 9.0), ("apple", 1.0), ("mango", 4.0)], 2);
    assert_eq!(picked, ["mango", "zebra"]);
}

#[test]
fn test_top_k_drops_zero() {
    let picked = top_k([("a", 0.0), ("b", 2.0)], 5);
    assert_eq!(picked, ["b"]);

    assert!(top_k([("a", 0.0)], 1).is_empty());
}

#[test]
fn test_answer_display() {
    assert_eq!(Answer::Words(Vec::new()).to_string(), "[]");
    assert_eq!(
        Answer::Words(vec!["a".into(), "b".into()]).to_string(),
        "[a, b]"
    );

    let history = [(2000, 0.5)].into_iter().collect();

    let answer = Answer::History(vec![WordHistory {
        word: "cat".into(),
        history,
    }]);

    assert_eq!(answer.to_string(), "cat: {2000=0.5}\n");
}
