//! The walkthrough from the README-style example: one collection, two
//! documents, every kind of query.

use pocketdex::query::{index_dump, search};
use pocketdex::{CollectionStore, DocId, Document, PocketdexErrorKind, Query};

fn ids(documents: &[&Document]) -> Vec<DocId> {
    documents.iter().map(|d| d.id).collect()
}

fn docs_store() -> CollectionStore {
    let mut store = CollectionStore::new();
    store.create_collection("docs").unwrap();
    assert_eq!(store.insert_document("docs", "The quick brown fox").unwrap(), 1);
    assert_eq!(store.insert_document("docs", "A quick fox jumps").unwrap(), 2);
    store
}

#[test]
fn creating_twice_fails() {
    let mut store = CollectionStore::new();
    store.create_collection("docs").unwrap();
    let err = store.create_collection("docs").unwrap_err();
    assert!(matches!(
        err.into_inner(),
        PocketdexErrorKind::CollectionAlreadyExists(name) if name == "docs"
    ));
}

#[test]
fn first_insert_builds_the_index() {
    let mut store = CollectionStore::new();
    store.create_collection("docs").unwrap();
    assert_eq!(store.insert_document("docs", "The quick brown fox").unwrap(), 1);

    let dump = index_dump(&store, "docs").unwrap();
    let entries: Vec<_> = dump.entries().collect();
    assert_eq!(
        entries,
        vec![
            ("brown", vec![(1, &[3][..])]),
            ("fox", vec![(1, &[4][..])]),
            ("quick", vec![(1, &[2][..])]),
            ("the", vec![(1, &[1][..])]),
        ]
    );
}

#[test]
fn keyword_finds_both_documents() {
    let store = docs_store();
    let found = search(&store, "docs", &Query::Keyword("quick".into())).unwrap();
    assert_eq!(ids(&found), vec![1, 2]);
    assert_eq!(found[0].text, "The quick brown fox");
}

#[test]
fn range_unions_every_word_between_the_bounds() {
    let store = docs_store();
    let found = search(
        &store,
        "docs",
        &Query::Range {
            low: "brown".into(),
            high: "fox".into(),
        },
    )
    .unwrap();
    assert_eq!(ids(&found), vec![1, 2]);
}

#[test]
fn proximity_measures_in_words() {
    let store = docs_store();
    let found = search(
        &store,
        "docs",
        &Query::Proximity {
            first: "quick".into(),
            distance: 1,
            second: "fox".into(),
        },
    )
    .unwrap();
    assert_eq!(ids(&found), vec![2]);
}

#[test]
fn unknown_word_is_an_empty_answer() {
    let store = docs_store();
    let found = search(&store, "docs", &Query::Keyword("zebra".into())).unwrap();
    assert!(found.is_empty());
}

#[test]
fn search_all_in_insertion_order() {
    let store = docs_store();
    let found = search(&store, "docs", &Query::All).unwrap();
    assert_eq!(ids(&found), vec![1, 2]);
}
