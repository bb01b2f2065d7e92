//! Line parsers for synset and hyponym files.

use crate::graph::SenseId;

/// A parsed synset line.
#[derive(Debug, PartialEq, Eq)]
pub struct Synset<'a> {
    pub id: SenseId,
    pub synonyms: Vec<&'a str>,
}

/// A parsed hyponym line.
#[derive(Debug, PartialEq, Eq)]
pub struct Hyponyms {
    pub hypernym: SenseId,
    pub hyponyms: Vec<SenseId>,
}

/// Parse a line of the form `id,word word,gloss`.
///
/// The gloss may itself contain commas and is discarded.
pub fn synset(line: &str) -> Result<Synset<'_>, String> {
    let mut parts = line.splitn(3, ',');

    let id = parse_id(parts.next().unwrap_or_default())?;

    let Some(synonyms) = parts.next() else {
        return Err(format!("Synset {id} is missing its synonyms"));
    };

    let synonyms = synonyms.split_whitespace().collect::<Vec<_>>();

    if synonyms.is_empty() {
        return Err(format!("Synset {id} has no synonyms"));
    }

    Ok(Synset { id, synonyms })
}

/// Parse a line of the form `hypernym,hyponym,hyponym`.
///
/// Trailing empty fields are ignored.
pub fn hyponyms(line: &str) -> Result<Hyponyms, String> {
    let mut parts = line.trim_end().trim_end_matches(',').split(',');
    let hypernym = parse_id(parts.next().unwrap_or_default())?;
    let hyponyms = parts.map(parse_id).collect::<Result<Vec<_>, _>>()?;
    Ok(Hyponyms { hypernym, hyponyms })
}

fn parse_id(string: &str) -> Result<SenseId, String> {
    let string = string.trim();

    string
        .parse()
        .map_err(|_| format!("Invalid sense identifier `{string}`"))
}

#[test]
fn test_synset() {
    let s = synset("11,cat true_cat,feline mammal, usually having thick soft fur").unwrap();
    assert_eq!(s.id, 11);
    assert_eq!(s.synonyms, ["cat", "true_cat"]);

    let s = synset("3,animal").unwrap();
    assert_eq!(s.synonyms, ["animal"]);

    assert!(synset("x,cat,gloss").is_err());
    assert!(synset("3").is_err());
    assert!(synset("3, ,gloss").is_err());
}

#[test]
fn test_hyponyms() {
    let h = hyponyms("3,2,5, 7").unwrap();
    assert_eq!(h.hypernym, 3);
    assert_eq!(h.hyponyms, [2, 5, 7]);

    let h = hyponyms("9").unwrap();
    assert!(h.hyponyms.is_empty());

    let h = hyponyms("0,1,").unwrap();
    assert_eq!(h.hypernym, 0);
    assert_eq!(h.hyponyms, [1]);

    let h = hyponyms("0,1,2,,\r").unwrap();
    assert_eq!(h.hyponyms, [1, 2]);

    assert!(hyponyms("3,two").is_err());
    assert!(hyponyms("3,,4").is_err());
}
