use std::io::Cursor;

use ngordnet_lib::{Answer, Corpus, Database, Query, QueryKind, Ranking, WordNet};

const SYNSETS: &str = "\
0,letter,a written symbol
1,a,the first letter
2,b,the second letter
3,c,the third letter
4,cat,a small carnivore
5,feline,a cat-like mammal
6,animal,a living organism
";

const HYPONYMS: &str = "\
0,1,2,3
6,5
5,4
";

const WORDS: &str = "\
word\tyear\tcount\tsources
a\t2000\t2\t1
a\t2001\t3\t1
b\t2000\t5\t1
c\t2000\t1\t1
c\t1990\t100\t1
cat\t2000\t40\t1
feline\t2000\t10\t1
";

const COUNTS: &str = "\
year,total,pages,sources
1990,100000,1,1
2000,100,1,1
2001,100,1,1
";

fn database() -> Database {
    let wordnet = WordNet::from_readers(Cursor::new(SYNSETS), Cursor::new(HYPONYMS)).unwrap();
    let corpus = Corpus::from_readers(Cursor::new(WORDS), Cursor::new(COUNTS)).unwrap();
    Database::new(wordnet, corpus)
}

fn words(answer: &Answer) -> Vec<&str> {
    match answer {
        Answer::Words(words) => words.iter().map(String::as_str).collect(),
        Answer::History(..) => panic!("expected words, got {answer:?}"),
    }
}

#[test]
fn hyponyms_and_ancestors() {
    let db = database();

    let answer = db
        .handle(&Query::new(QueryKind::Ancestors, ["cat"]))
        .unwrap();
    assert_eq!(words(&answer), ["animal", "feline"]);
    assert_eq!(answer.to_string(), "[animal, feline]");

    let answer = db
        .handle(&Query::new(QueryKind::Hyponyms, ["animal"]))
        .unwrap();
    assert_eq!(answer.to_string(), "[cat, feline]");

    let answer = db.handle(&Query::new(QueryKind::Hyponyms, ["cat"])).unwrap();
    assert_eq!(answer.to_string(), "[]");
}

#[test]
fn top_k_orders_alphabetically() {
    let db = database();

    let query = Query::new(QueryKind::Hyponyms, ["letter"])
        .with_k(2)
        .with_years(2000, 2001);

    // a=5, b=5, c=1 within the range.
    let answer = db.handle(&query).unwrap();
    assert_eq!(answer.to_string(), "[a, b]");

    // Over every year c dominates.
    let query = Query::new(QueryKind::Hyponyms, ["letter"]).with_k(1);
    assert_eq!(db.handle(&query).unwrap().to_string(), "[c]");

    let query = Query::new(QueryKind::Hyponyms, ["letter"])
        .with_k(10)
        .with_years(2000, 2000);
    assert_eq!(db.handle(&query).unwrap().to_string(), "[a, b, c]");
}

#[test]
fn top_k_drops_words_without_counts() {
    let db = database();

    let query = Query::new(QueryKind::Hyponyms, ["letter"])
        .with_k(3)
        .with_years(2001, 2001);
    assert_eq!(db.handle(&query).unwrap().to_string(), "[a]");

    let query = Query::new(QueryKind::Hyponyms, ["letter"])
        .with_k(3)
        .with_years(1400, 1500);
    assert_eq!(db.handle(&query).unwrap().to_string(), "[]");
}

#[test]
fn weight_ranking() {
    let query = Query::new(QueryKind::Hyponyms, ["letter"]).with_k(2);

    // Raw counts favor c through its 1990 count.
    let db = database();
    assert_eq!(db.handle(&query).unwrap().to_string(), "[a, c]");

    // Relative to the 1990 total that count is insignificant.
    let db = database().with_ranking(Ranking::Weight);
    assert_eq!(db.handle(&query).unwrap().to_string(), "[a, b]");
}

#[test]
fn weight_ranking_with_zero_total() {
    let wordnet = WordNet::from_readers(
        Cursor::new("0,root,x\n1,a,x\n2,b,x\n"),
        Cursor::new("0,1,2\n"),
    )
    .unwrap();

    let corpus = Corpus::from_readers(
        Cursor::new("word\tyear\tcount\tsources\na\t2000\t5\t1\nb\t2001\t1\t1\n"),
        Cursor::new("year,total,pages,sources\n2000,0,1,1\n2001,10,1,1\n"),
    )
    .unwrap();

    let db = Database::new(wordnet, corpus).with_ranking(Ranking::Weight);

    // Without a usable total for 2000, a cannot be weighted at all.
    let query = Query::new(QueryKind::Hyponyms, ["root"]).with_k(1);
    let error = db.handle(&query).unwrap_err();
    assert!(error.is_missing_divisor_year());

    let query = query.with_years(2001, 2001);
    assert_eq!(db.handle(&query).unwrap().to_string(), "[b]");
}

#[test]
fn common_queries() {
    let db = database();

    let answer = db
        .handle(&Query::new(QueryKind::Ancestors, ["cat", "feline"]))
        .unwrap();
    assert_eq!(answer.to_string(), "[animal]");

    let answer = db
        .handle(&Query::new(QueryKind::Hyponyms, ["letter", "animal"]))
        .unwrap();
    assert_eq!(answer.to_string(), "[]");
}

#[test]
fn errors_are_surfaced() {
    let db = database();

    let error = db
        .handle(&Query::new(QueryKind::Hyponyms, ["unicorn"]))
        .unwrap_err();
    assert!(error.is_unknown_word());

    let error = db
        .handle(&Query::new(QueryKind::Ancestors, ["cat", "unicorn"]).with_k(3))
        .unwrap_err();
    assert!(error.is_unknown_word());

    let error = db
        .handle(&Query::new(QueryKind::Hyponyms, Vec::<String>::new()))
        .unwrap_err();
    assert!(error.is_empty_query());
}

#[test]
fn history() {
    let db = database();

    let query = Query::new(QueryKind::History, ["cat", "unknown"]).with_years(2000, 2000);
    let answer = db.handle(&query).unwrap();
    assert_eq!(answer.to_string(), "cat: {2000=0.4}\nunknown: {}\n");
}

#[test]
fn json_answer() {
    let answer = Answer::Words(vec!["a".into(), "b".into()]);
    let json = serde_json::to_string(&answer).unwrap();
    assert_eq!(json, r#"{"words":["a","b"]}"#);
}

#[test]
fn concurrent_queries() {
    let db = database();

    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let query = Query::new(QueryKind::Hyponyms, ["letter"])
                        .with_k(2)
                        .with_years(2000, 2001);
                    db.handle(&query).unwrap().to_string()
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "[a, b]");
        }
    });
}
