//! Line parsers for word count and total count files.
//!
//! Both parsers return `None` for any line that should be dropped: malformed
//! fields, counts that are negative or not finite, and years outside of
//! `[MIN_YEAR, MAX_YEAR]`.

use crate::time_series::{is_valid_year, Year};

/// A parsed `word\tyear\tcount\t...` line.
#[derive(Debug, PartialEq)]
pub struct WordCount<'a> {
    pub word: &'a str,
    pub year: Year,
    pub count: f64,
}

/// A parsed `year,total,...` line.
#[derive(Debug, PartialEq)]
pub struct TotalCount {
    pub year: Year,
    pub count: f64,
}

pub fn word_count(line: &str) -> Option<WordCount<'_>> {
    let mut parts = line.split('\t');
    let word = parts.next().filter(|w| !w.is_empty())?;
    let year = year(parts.next()?)?;
    let count = count(parts.next()?)?;
    Some(WordCount { word, year, count })
}

pub fn total_count(line: &str) -> Option<TotalCount> {
    let mut parts = line.split(',');
    let year = year(parts.next()?)?;
    // Totals divide word counts and must be positive.
    let count = count(parts.next()?).filter(|&count| count > 0.0)?;
    Some(TotalCount { year, count })
}

fn year(string: &str) -> Option<Year> {
    let year = string.trim().parse().ok()?;
    is_valid_year(year).then_some(year)
}

fn count(string: &str) -> Option<f64> {
    let count = string.trim().parse::<f64>().ok()?;
    (count.is_finite() && count >= 0.0).then_some(count)
}

#[test]
fn test_word_count() {
    assert_eq!(
        word_count("airport\t2007\t175702\t32788"),
        Some(WordCount {
            word: "airport",
            year: 2007,
            count: 175702.0
        })
    );

    assert_eq!(word_count("airport\t2007"), None);
    assert_eq!(word_count("airport\tnope\t10"), None);
    assert_eq!(word_count("airport\t1399\t10"), None);
    assert_eq!(word_count("airport\t2101\t10"), None);
    assert_eq!(word_count("airport\t2000\t-1"), None);
    assert_eq!(word_count("airport\t2000\tNaN"), None);
    assert_eq!(word_count("\t2000\t1"), None);
    assert_eq!(word_count("airport,2000,1"), None);
}

#[test]
fn test_total_count() {
    assert_eq!(
        total_count("1470,984,10,1"),
        Some(TotalCount {
            year: 1470,
            count: 984.0
        })
    );

    assert_eq!(total_count("1470"), None);
    assert_eq!(total_count("2000,0"), None);
    assert_eq!(total_count("2000,0.0,1,1"), None);
    assert_eq!(total_count("year,count"), None);
    assert_eq!(total_count("1470\t984"), None);
}
