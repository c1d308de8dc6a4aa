use std::collections::HashMap;

use sqlvocab_core::vocab::{Word, is_word_shaped, synapse, tsql};

fn tables() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("tsql::RESERVED_KEYWORDS", tsql::RESERVED_KEYWORDS),
        ("tsql::DOCUMENTED_ONLY_RESERVED_KEYWORDS", tsql::DOCUMENTED_ONLY_RESERVED_KEYWORDS),
        ("tsql::FUTURE_RESERVED_KEYWORDS", tsql::FUTURE_RESERVED_KEYWORDS),
        ("tsql::UNRESERVED_KEYWORDS", tsql::UNRESERVED_KEYWORDS),
        ("synapse::RESERVED_KEYWORDS", synapse::RESERVED_KEYWORDS),
    ]
}

#[test]
fn table_spellings_are_word_shaped_and_canonical() {
    for (name, table) in tables() {
        for &spelling in table {
            assert!(is_word_shaped(spelling), "{name}: {spelling:?} is not word-shaped");
            let word = Word::new(spelling).unwrap_or_else(|| panic!("{name}: {spelling:?} rejected"));
            assert_eq!(word.as_str(), spelling, "{name}: {spelling:?} is not uppercase");
        }
    }
}

#[test]
fn tables_are_not_empty() {
    for (name, table) in tables() {
        assert!(!table.is_empty(), "{name} is empty");
    }
}

/// Duplicates inside one table are tolerated (they collapse during resolution) but must stay rare; a burst of
/// duplicates usually means a table was pasted twice.
#[test]
fn table_duplicates_are_known() {
    let known = ["TRAN", "FILESTREAM"];
    for (name, table) in tables() {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &spelling in table {
            *counts.entry(spelling).or_default() += 1;
        }
        for (spelling, count) in counts {
            if count > 1 {
                assert!(known.contains(&spelling), "{name}: unexpected duplicate {spelling:?} ({count}x)");
            }
        }
    }
}

#[test]
fn reserved_and_unreserved_overlap_is_known() {
    let mut overlap: Vec<&str> = tsql::RESERVED_KEYWORDS
        .iter()
        .copied()
        .filter(|w| tsql::UNRESERVED_KEYWORDS.contains(w))
        .collect();
    overlap.sort_unstable();
    assert_eq!(overlap, vec!["BREAK", "CONTINUE", "ROWGUIDCOL", "WAITFOR", "WHILE"]);
}
