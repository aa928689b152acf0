//! The inverted index: word → document → positions.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::tokenize::Tokens;

/// Document identifier, unique within one collection. The first document is 1.
pub type DocId = u32;

/// For one word: the documents containing it, each with the ascending list of
/// positions at which the word occurs.
pub type Postings = BTreeMap<DocId, Vec<u32>>;

/// Maps each word to every document and position where it appears.
///
/// Words are kept in byte order so that range queries can scan a contiguous
/// slice of the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    /// Total number of tokens indexed, across all documents.
    pub word_count: usize,
    map: BTreeMap<String, Postings>,
}

impl InvertedIndex {
    /// An index with no entries.
    pub fn new() -> InvertedIndex {
        InvertedIndex::default()
    }

    /// Index one document on its own.
    ///
    /// Positions are appended in the order the tokenizer produces them, which
    /// is left to right, so every position list comes out strictly ascending.
    pub fn from_single_document(document_id: DocId, text: &str) -> InvertedIndex {
        let mut index = InvertedIndex::new();

        for token in Tokens::new(text) {
            index
                .map
                .entry(token.word)
                .or_default()
                .entry(document_id)
                .or_default()
                .push(token.position);
            index.word_count += 1;
        }

        index
    }

    /// Rebuild an index from scratch out of `(id, text)` pairs in insertion order.
    pub fn from_documents<'a, I>(documents: I) -> InvertedIndex
    where
        I: IntoIterator<Item = (DocId, &'a str)>,
    {
        let mut index = InvertedIndex::new();
        for (id, text) in documents {
            index.merge(InvertedIndex::from_single_document(id, text));
        }
        index
    }

    /// Fold `other` into this index.
    ///
    /// `other` must only mention documents that are not in `self` yet; the
    /// position lists are concatenated, not re-sorted.
    pub fn merge(&mut self, other: InvertedIndex) {
        for (word, postings) in other.map {
            let entry = self.map.entry(word).or_default();
            for (document_id, positions) in postings {
                entry.entry(document_id).or_default().extend(positions);
            }
        }
        self.word_count += other.word_count;
    }

    /// True if no word has been indexed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// The postings for a normalized word, if it occurs anywhere.
    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.map.get(word)
    }

    /// Positions of `word` in one document.
    pub fn positions(&self, word: &str, document_id: DocId) -> Option<&[u32]> {
        self.map
            .get(word)
            .and_then(|postings| postings.get(&document_id))
            .map(Vec::as_slice)
    }

    /// Every word `w` with `low <= w <= high`, in ascending order.
    ///
    /// The caller must ensure `low <= high`; `BTreeMap::range` panics otherwise.
    pub fn range(&self, low: &str, high: &str) -> impl Iterator<Item = (&str, &Postings)> + '_ {
        self.map
            .range::<str, _>((Bound::Included(low), Bound::Included(high)))
            .map(|(word, postings)| (word.as_str(), postings))
    }

    /// Every entry in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Postings)> + '_ {
        self.map
            .iter()
            .map(|(word, postings)| (word.as_str(), postings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_document_positions() {
        let index = InvertedIndex::from_single_document(1, "the cat saw the other cat");
        assert_eq!(index.word_count, 6);
        assert_eq!(index.len(), 4);
        assert_eq!(index.positions("the", 1), Some(&[1, 4][..]));
        assert_eq!(index.positions("cat", 1), Some(&[2, 6][..]));
        assert_eq!(index.positions("dog", 1), None);
        assert_eq!(index.positions("the", 2), None);
    }

    #[test]
    fn merge_keeps_documents_apart() {
        let mut index = InvertedIndex::from_single_document(1, "red fish");
        index.merge(InvertedIndex::from_single_document(2, "blue fish red"));

        let fish = index.postings("fish").map(|p| p.keys().copied().collect::<Vec<_>>());
        assert_eq!(fish, Some(vec![1, 2]));
        assert_eq!(index.positions("red", 2), Some(&[3][..]));
        assert_eq!(index.word_count, 5);
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let index = InvertedIndex::from_single_document(1, "delta alpha charlie bravo echo");
        let words: Vec<&str> = index.range("bravo", "delta").map(|(w, _)| w).collect();
        assert_eq!(words, vec!["bravo", "charlie", "delta"]);

        let words: Vec<&str> = index.range("b", "c").map(|(w, _)| w).collect();
        assert_eq!(words, vec!["bravo"]);
    }

    #[test]
    fn empty_text_produces_empty_index() {
        let index = InvertedIndex::from_single_document(1, " ... ");
        assert!(index.is_empty());
        assert_eq!(index, InvertedIndex::new());
    }

    #[test]
    fn rebuild_equals_incremental() {
        let docs = [(1, "one two"), (2, "two three two"), (3, "")];
        let mut incremental = InvertedIndex::new();
        for (id, text) in docs {
            incremental.merge(InvertedIndex::from_single_document(id, text));
        }
        assert_eq!(InvertedIndex::from_documents(docs), incremental);
    }
}
