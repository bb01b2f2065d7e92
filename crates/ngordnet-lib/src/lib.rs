//! Hyponym and ancestor queries over a lexical ontology, ranked by yearly
//! word frequencies.

pub mod config;

pub mod corpus;
pub use self::corpus::Corpus;

pub mod database;
pub use self::database::Database;

mod error;
pub use self::error::{Error, Result};

pub mod graph;
pub use self::graph::{Direction, Graph, SenseId};

pub mod query;
pub use self::query::{Answer, Query, QueryKind, Ranking};

pub mod time_series;
pub use self::time_series::{TimeSeries, Year, MAX_YEAR, MIN_YEAR};

pub mod wordnet;
pub use self::wordnet::WordNet;
