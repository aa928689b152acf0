//! Reading a collection: the four search shapes and the index dump.
//!
//! Every query here is a pure read. Results are documents in ascending id
//! order; an empty result means "no documents found" and is not an error.

use std::collections::BTreeSet;

use tracing::trace;

use crate::error::PocketdexResult;
use crate::index::{DocId, InvertedIndex, Postings};
use crate::normalize::normalize_term;
use crate::store::{Collection, CollectionStore, Document};

/// What to search a collection for.
///
/// Terms are raw, as the user typed them; they are normalized with
/// [`normalize_term`] before being looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Every document.
    All,
    /// Documents containing one word.
    Keyword(String),
    /// Documents containing any word that sorts between two bounds, inclusive.
    /// The bounds may be given in either order.
    Range {
        /// One bound.
        low: String,
        /// The other bound.
        high: String,
    },
    /// Documents where `first` occurs within `distance` words of `second`.
    Proximity {
        /// One of the two words.
        first: String,
        /// Largest allowed difference between the two words' positions.
        distance: u32,
        /// The other word.
        second: String,
    },
}

/// A document matched by a keyword search, with the positions of the word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit<'a> {
    /// The matching document.
    pub document: &'a Document,
    /// Where the word occurs in it, ascending.
    pub positions: &'a [u32],
}

/// Run `query` against the collection `name`.
pub fn search<'a>(
    store: &'a CollectionStore,
    name: &str,
    query: &Query,
) -> PocketdexResult<Vec<&'a Document>> {
    let collection = store.collection(name)?;
    let results = collection.search(query);
    trace!(collection = name, ?query, hits = results.len(), "search");
    Ok(results)
}

/// The whole index of the collection `name`, in ascending word order.
pub fn index_dump<'a>(store: &'a CollectionStore, name: &str) -> PocketdexResult<IndexDump<'a>> {
    Ok(IndexDump {
        index: store.collection(name)?.index(),
    })
}

/// A read-only view over an index for printing it.
#[derive(Clone, Copy, Debug)]
pub struct IndexDump<'a> {
    index: &'a InvertedIndex,
}

impl<'a> IndexDump<'a> {
    /// True if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Each word, then each document containing it with the word's positions.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, Vec<(DocId, &'a [u32])>)> + 'a {
        let index = self.index;
        index.iter().map(|(word, postings)| {
            let docs = postings
                .iter()
                .map(|(&id, positions)| (id, positions.as_slice()))
                .collect();
            (word, docs)
        })
    }
}

impl Collection {
    /// Run `query` against this collection.
    pub fn search(&self, query: &Query) -> Vec<&Document> {
        match query {
            Query::All => self.documents().iter().collect(),
            Query::Keyword(word) => self
                .keyword(word)
                .into_iter()
                .map(|hit| hit.document)
                .collect(),
            Query::Range { low, high } => self.resolve(self.range(low, high)),
            Query::Proximity {
                first,
                distance,
                second,
            } => self.resolve(self.proximity(first, *distance, second)),
        }
    }

    /// Documents containing `word`, with the positions where it occurs.
    pub fn keyword(&self, word: &str) -> Vec<Hit<'_>> {
        let word = normalize_term(word);
        let Some(postings) = self.lookup(&word) else {
            return vec![];
        };
        postings
            .iter()
            .filter_map(|(&id, positions)| {
                Some(Hit {
                    document: self.document(id)?,
                    positions,
                })
            })
            .collect()
    }

    /// Ids of documents containing any word between `a` and `b` inclusive.
    pub fn range(&self, a: &str, b: &str) -> BTreeSet<DocId> {
        let mut low = normalize_term(a);
        let mut high = normalize_term(b);
        if low.is_empty() || high.is_empty() {
            return BTreeSet::new();
        }
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }

        self.index()
            .range(&low, &high)
            .flat_map(|(_, postings)| postings.keys().copied())
            .collect()
    }

    /// Ids of documents where `a` and `b` occur at most `distance` words apart.
    ///
    /// A word is at distance 0 from itself, so `w` within 0 of `w` matches
    /// every document containing `w`.
    pub fn proximity(&self, a: &str, distance: u32, b: &str) -> BTreeSet<DocId> {
        let (Some(first), Some(second)) = (
            self.lookup(&normalize_term(a)),
            self.lookup(&normalize_term(b)),
        ) else {
            return BTreeSet::new();
        };

        first
            .iter()
            .filter_map(|(id, xs)| {
                let ys = second.get(id)?;
                within(xs, ys, distance).then_some(*id)
            })
            .collect()
    }

    fn lookup(&self, word: &str) -> Option<&Postings> {
        if word.is_empty() {
            return None;
        }
        self.index().postings(word)
    }

    fn resolve(&self, ids: BTreeSet<DocId>) -> Vec<&Document> {
        ids.into_iter().filter_map(|id| self.document(id)).collect()
    }
}

/// True if some element of `xs` is within `distance` of some element of `ys`.
/// Both slices must be sorted ascending.
///
/// Linear in `xs.len() + ys.len()`.
fn within(xs: &[u32], ys: &[u32], distance: u32) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < xs.len() && j < ys.len() {
        let (x, y) = (xs[i], ys[j]);
        if x.abs_diff(y) <= distance {
            return true;
        }
        if x < y {
            i += 1;
        } else {
            j += 1;
        }
    }
    false
}
