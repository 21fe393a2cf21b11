use std::fs;
use std::path::PathBuf;

use chaintab::{ChainedHashTable, Error};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chaintab-it-{}-{}", std::process::id(), name))
}

#[test]
fn load_file_then_dump_file() {
    let input = scratch_path("words.txt");
    let output = scratch_path("table.txt");
    fs::write(&input, "to be or not\nto be\n\nthat is the question\n").unwrap();

    let mut table = ChainedHashTable::with_buckets(5).unwrap();
    assert_eq!(table.load_file(&input).unwrap(), 10);
    assert!(table.contains("question"));
    assert_eq!(table.iter().filter(|k| *k == "to").count(), 2);

    table.dump_to_file(&output).unwrap();
    let dumped = fs::read_to_string(&output).unwrap();
    fs::remove_file(&input).unwrap();
    fs::remove_file(&output).unwrap();

    let lines: Vec<&str> = dumped.lines().collect();
    assert_eq!(lines.len(), 5);
    for (index, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{index}:\t")));
    }
    // Every stored key appears in the dump.
    let items: usize = lines
        .iter()
        .map(|line| {
            let (_, rest) = line.split_once('\t').unwrap();
            rest.split(", ").filter(|s| !s.is_empty()).count()
        })
        .sum();
    assert_eq!(items, 10);
}

#[test]
fn load_file_missing_reports_path() {
    let path = scratch_path("does-not-exist.txt");
    let mut table = ChainedHashTable::with_buckets(5).unwrap();
    match table.load_file(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(table.is_empty());
}

#[test]
fn empty_file_leaves_table_unchanged() {
    let path = scratch_path("empty.txt");
    fs::write(&path, "").unwrap();
    let mut table = ChainedHashTable::with_buckets(5).unwrap();
    assert_eq!(table.load_file(&path).unwrap(), 0);
    fs::remove_file(&path).unwrap();
    assert_eq!(table.stats(), ChainedHashTable::with_buckets(5).unwrap().stats());
}

#[test]
fn partial_load_keeps_tokens_before_failure() {
    let mut table = ChainedHashTable::with_buckets(3).unwrap();
    let bytes: &[u8] = b"kept also\n\xff\nlost\n";
    assert!(matches!(table.load_reader(bytes), Err(Error::Stream(_))));
    assert_eq!(table.len(), 2);
    assert!(table.contains("kept"));
    assert!(!table.contains("lost"));
    let max = table.buckets().map(<[String]>::len).max().unwrap();
    assert_eq!(table.longest_chain(), max);
}
