use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::query::Ranking;
use crate::time_series::{Year, MAX_YEAR, MIN_YEAR};

/// Paths to the ontology files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WordNetFiles {
    /// Synset file, one `id,synonyms,gloss` line per sense.
    pub synsets: PathBuf,
    /// Hyponym file, one `hypernym,hyponym,...` line per hypernym.
    pub hyponyms: PathBuf,
}

impl Default for WordNetFiles {
    fn default() -> Self {
        Self {
            synsets: PathBuf::from("data/wordnet/synsets.txt"),
            hyponyms: PathBuf::from("data/wordnet/hyponyms.txt"),
        }
    }
}

/// Paths to the corpus files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NgramFiles {
    /// Tab-separated word counts.
    pub words: PathBuf,
    /// Comma-separated yearly totals.
    pub counts: PathBuf,
}

impl Default for NgramFiles {
    fn default() -> Self {
        Self {
            words: PathBuf::from("data/ngrams/top_14377_words.csv"),
            counts: PathBuf::from("data/ngrams/total_counts.csv"),
        }
    }
}

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub wordnet: WordNetFiles,
    pub ngrams: NgramFiles,
    /// How top `k` queries score candidates.
    pub ranking: Ranking,
    /// First year considered when a query doesn't specify one.
    pub start_year: Year,
    /// Last year considered when a query doesn't specify one.
    pub end_year: Year,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordnet: WordNetFiles::default(),
            ngrams: NgramFiles::default(),
            ranking: Ranking::default(),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
        }
    }
}

impl Config {
    /// The per-user configuration file, such as
    /// `~/.config/ngordnet/config.toml` on Linux.
    pub fn user_path() -> Result<PathBuf> {
        let project = ProjectDirs::from("org", "ngordnet", "ngordnet")
            .context("No home directory to look for a configuration in")?;
        Ok(project.config_dir().join("config.toml"))
    }

    /// Load the per-user configuration, falling back to the default
    /// configuration if there is none.
    pub fn load() -> Result<Self> {
        Self::load_path(&Self::user_path()?)
    }

    /// Load configuration from the given path, falling back to the default
    /// configuration if it doesn't exist.
    pub fn load_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        Self::parse(&data).with_context(|| path.display().to_string())
    }

    /// Parse a TOML configuration.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}

#[test]
fn test_parse_partial() {
    let config = Config::parse(
        r#"
        ranking = "weight"
        start-year = 1900

        [wordnet]
        synsets = "small/synsets.txt"
        hyponyms = "small/hyponyms.txt"
        "#,
    )
    .unwrap();

    assert_eq!(config.ranking, Ranking::Weight);
    assert_eq!(config.start_year, 1900);
    assert_eq!(config.end_year, MAX_YEAR);
    assert_eq!(config.wordnet.synsets, PathBuf::from("small/synsets.txt"));
    assert_eq!(config.ngrams, NgramFiles::default());
}

#[test]
fn test_load_missing_path() {
    let path = Path::new("this/configuration/does/not/exist.toml");
    assert_eq!(Config::load_path(path).unwrap(), Config::default());
}

#[test]
fn test_parse_empty() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
    assert!(Config::parse("ranking = \"loudest\"").is_err());
}
