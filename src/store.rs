//! Named collections of documents, each with its own inverted index.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{PocketdexErrorKind, PocketdexResult};
use crate::index::{DocId, InvertedIndex};
use crate::normalize::check_identifier;

/// One inserted piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Sequential identifier, starting from 1 in each collection.
    pub id: DocId,
    /// The text exactly as it was inserted.
    pub text: String,
}

/// An append-only sequence of documents plus the index over them.
#[derive(Debug, Default)]
pub struct Collection {
    documents: Vec<Document>,
    index: InvertedIndex,
}

impl Collection {
    /// Documents in insertion order, which is also id order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by id.
    pub fn document(&self, id: DocId) -> Option<&Document> {
        // Ids are dense and start at 1.
        let slot = usize::try_from(id).ok()?.checked_sub(1)?;
        self.documents.get(slot)
    }

    /// The index over this collection's documents.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    fn insert(&mut self, text: String) -> Option<DocId> {
        let id = next_id(self.documents.len())?;
        let index = InvertedIndex::from_single_document(id, &text);
        debug!(id, words = index.word_count, "indexed document");
        self.index.merge(index);
        self.documents.push(Document { id, text });
        Some(id)
    }
}

/// The id for the document after `count` existing ones, if it fits in a [`DocId`].
fn next_id(count: usize) -> Option<DocId> {
    count.checked_add(1).and_then(|id| DocId::try_from(id).ok())
}

/// Owns every collection in the process.
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: HashMap<String, Collection>,
}

impl CollectionStore {
    /// A store with no collections.
    pub fn new() -> CollectionStore {
        CollectionStore::default()
    }

    /// Create an empty collection called `name`.
    pub fn create_collection(&mut self, name: &str) -> PocketdexResult<()> {
        check_identifier(name)?;
        if self.collections.contains_key(name) {
            return Err(PocketdexErrorKind::CollectionAlreadyExists(name.to_string()).into());
        }
        let _ = self
            .collections
            .insert(name.to_string(), Collection::default());
        info!(collection = name, "created collection");
        Ok(())
    }

    /// Append `text` to the collection `name` and index it. Returns the new
    /// document's id.
    pub fn insert_document(&mut self, name: &str, text: impl Into<String>) -> PocketdexResult<DocId> {
        check_identifier(name)?;
        let collection = self
            .collections
            .get_mut(name)
            .ok_or_else(|| PocketdexErrorKind::CollectionNotFound(name.to_string()))?;
        let id = collection
            .insert(text.into())
            .ok_or_else(|| PocketdexErrorKind::CollectionFull(name.to_string()))?;
        info!(collection = name, id, "inserted document");
        Ok(id)
    }

    /// Read-only access to the collection `name`.
    pub fn collection(&self, name: &str) -> PocketdexResult<&Collection> {
        check_identifier(name)?;
        self.collections
            .get(name)
            .ok_or_else(|| PocketdexErrorKind::CollectionNotFound(name.to_string()).into())
    }

    /// Names of all collections, sorted.
    pub fn collection_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
