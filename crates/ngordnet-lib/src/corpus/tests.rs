use std::io::Cursor;

use super::Corpus;
use crate::time_series::{MAX_YEAR, MIN_YEAR};

const WORDS: &str = "\
word\tyear\tcount\tsources
airport\t2005\t100\t10
airport\t2006\t200\t10
airport\t2007\t300\t10
request\t2005\t50\t5
request\t2007\t150\t5
broken line
request\tlater\t1\t1
ancient\t1200\t9\t1
";

const COUNTS: &str = "\
year,total,pages,sources
2005,1000,1,1
2006,2000,1,1
2007,3000,1,1
1200,50,1,1
oops
";

fn load() -> Corpus {
    Corpus::from_readers(Cursor::new(WORDS), Cursor::new(COUNTS)).unwrap()
}

#[test]
fn count_history() {
    let corpus = load();

    let ts = corpus.count_history("airport", 2006, 2007);
    assert_eq!(ts.years(), [2006, 2007]);
    assert_eq!(ts.values(), [200.0, 300.0]);

    assert_eq!(corpus.count_history_all("airport").years(), [2005, 2006, 2007]);
    assert!(corpus.count_history("unknown", MIN_YEAR, MAX_YEAR).is_empty());
    assert!(corpus.count_history("airport", 2007, 2005).is_empty());
}

#[test]
fn malformed_records_are_dropped() {
    let corpus = load();

    assert!(!corpus.contains("broken line"));
    assert!(!corpus.contains("ancient"));
    assert_eq!(corpus.count_history_all("request").years(), [2005, 2007]);
    assert_eq!(corpus.total_count_history().years(), [2005, 2006, 2007]);
}

#[test]
fn header_is_skipped() {
    let corpus = Corpus::from_readers(
        Cursor::new("airport\t2000\t1\t1\n"),
        Cursor::new("2000,10,1,1\n"),
    )
    .unwrap();

    assert!(!corpus.contains("airport"));
    assert!(corpus.total_count_history().is_empty());
}

#[test]
fn defensive_copies() {
    let corpus = load();

    let mut ts = corpus.count_history("airport", MIN_YEAR, MAX_YEAR);
    ts.insert(2005, 0.0);
    ts.insert(1999, 42.0);
    assert_eq!(
        corpus.count_history("airport", MIN_YEAR, MAX_YEAR).values(),
        [100.0, 200.0, 300.0]
    );

    let mut total = corpus.total_count_history();
    total.insert(2005, 1.0);
    assert_eq!(corpus.total_count_history().get(2005), Some(1000.0));
}

#[test]
fn weight_history() {
    let corpus = load();

    let ts = corpus.weight_history("airport", 2005, 2006).unwrap();
    assert_eq!(ts.years(), [2005, 2006]);
    assert_eq!(ts.values(), [0.1, 0.1]);

    assert!(corpus.weight_history("unknown", 2005, 2007).unwrap().is_empty());
    assert_eq!(corpus.weight_history_all("request").unwrap().values(), [0.05, 0.05]);
}

#[test]
fn weight_history_missing_total() {
    let mut builder = Corpus::builder();
    builder.add_count("orphan", 2000, 1.0);
    builder.add_total(2001, 10.0);
    let corpus = builder.build();

    let error = corpus.weight_history_all("orphan").unwrap_err();
    assert!(error.is_missing_divisor_year());
}

#[test]
fn summed_weight_history() {
    let corpus = load();

    let ts = corpus
        .summed_weight_history(["airport", "request", "unknown"], 2005, 2007)
        .unwrap();

    assert_eq!(ts.years(), [2005, 2006, 2007]);
    assert_eq!(ts.values(), [0.1 + 0.05, 0.1, 0.1 + 0.05]);

    assert!(corpus.summed_weight_history_all(["unknown"]).unwrap().is_empty());
}

#[test]
fn builder_ignores_invalid_years() {
    let mut builder = Corpus::builder();
    builder.add_count("word", MIN_YEAR - 1, 1.0);
    builder.add_count("word", MAX_YEAR, 1.0);
    builder.add_total(MAX_YEAR + 1, 1.0);
    let corpus = builder.build();

    assert_eq!(corpus.count_history_all("word").years(), [MAX_YEAR]);
    assert!(corpus.total_count_history().is_empty());
}

#[test]
fn zero_totals_are_dropped() {
    let corpus = Corpus::from_readers(
        Cursor::new("word\tyear\tcount\tsources\na\t2000\t5\t1\nb\t2001\t1\t1\n"),
        Cursor::new("year,total,pages,sources\n2000,0,1,1\n2001,10,1,1\n"),
    )
    .unwrap();

    assert_eq!(corpus.total_count_history().years(), [2001]);

    let error = corpus.weight_history_all("a").unwrap_err();
    assert!(error.is_missing_divisor_year());

    let ts = corpus.weight_history_all("b").unwrap();
    assert_eq!(ts.values(), [0.1]);

    let mut builder = Corpus::builder();
    builder.add_total(2000, 0.0);
    builder.add_total(2001, f64::INFINITY);
    builder.add_total(2002, -1.0);
    assert!(builder.build().total_count_history().is_empty());
}
