use std::io;

use crate::graph::SenseId;
use crate::time_series::Year;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Construct a parse error for the given 1-based line.
    pub(crate) fn parse<M>(line: usize, message: M) -> Self
    where
        M: Into<Box<str>>,
    {
        Self::new(ErrorKind::Parse {
            line,
            message: message.into(),
        })
    }

    /// Test if the error was caused by a word missing from the ontology.
    pub fn is_unknown_word(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownWord(..))
    }

    /// Test if the error was caused by an edge referencing a missing node.
    pub fn is_unknown_node(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownNode(..))
    }

    /// Test if the error was caused by dividing by a series lacking a year.
    pub fn is_missing_divisor_year(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingDivisorYear(..))
    }

    /// Test if the error was caused by a query without words.
    pub fn is_empty_query(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyQuery)
    }

    /// Test if the error was caused by malformed ontology input.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse { .. })
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ErrorKind {
    #[error("Word `{0}` is not in the ontology")]
    UnknownWord(Box<str>),
    #[error("Sense `{0}` has not been added to the graph")]
    UnknownNode(SenseId),
    #[error("Divisor is missing year {0}")]
    MissingDivisorYear(Year),
    #[error("Query does not name any words")]
    EmptyQuery,
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: Box<str> },
    #[error("Failed to read input")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}
