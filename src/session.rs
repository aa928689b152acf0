//! Running statements against a store and rendering what they return.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::command::{Command, StatementBuffer};
use crate::error::{PocketdexErrorKind, PocketdexResult};
use crate::index::DocId;
use crate::query::{index_dump, search, IndexDump};
use crate::store::{CollectionStore, Document};

/// The result of one successful statement.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// A collection was created.
    Created(String),
    /// A document was inserted and got this id.
    Inserted {
        /// Collection the document went into.
        collection: String,
        /// Id assigned to the document.
        id: DocId,
    },
    /// Search results, ascending by id. Empty means nothing matched.
    Documents(Vec<&'a Document>),
    /// The index of a collection.
    Index {
        /// Collection the index belongs to.
        collection: String,
        /// The index contents.
        dump: IndexDump<'a>,
    },
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created(name) => write!(f, "Collection {name} has been created"),
            Outcome::Inserted { collection, id } => {
                write!(f, "Document {id} added to {collection}")
            }
            Outcome::Documents(documents) if documents.is_empty() => {
                write!(f, "No documents found")
            }
            Outcome::Documents(documents) => {
                for (i, document) in documents.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, " - [{}] {}", document.id, document.text)?;
                }
                Ok(())
            }
            Outcome::Index { collection, dump } => {
                write!(f, "Index of {collection}:")?;
                if dump.is_empty() {
                    return write!(f, "\n (empty index)");
                }
                for (word, documents) in dump.entries() {
                    write!(f, "\n  {word}")?;
                    for (id, positions) in documents {
                        write!(f, "\n    {id}: {positions:?}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// One user's view of a store: executes statements one at a time.
#[derive(Debug, Default)]
pub struct Session {
    store: CollectionStore,
}

impl Session {
    /// A session over an empty store.
    pub fn new() -> Session {
        Session::default()
    }

    /// The store this session works on.
    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    /// Execute one command.
    pub fn execute(&mut self, command: Command) -> PocketdexResult<Outcome<'_>> {
        debug!(?command, "executing");
        Ok(match command {
            Command::CreateCollection { name } => {
                self.store.create_collection(&name)?;
                Outcome::Created(name)
            }
            Command::InsertDocument { collection, text } => {
                let id = self.store.insert_document(&collection, text)?;
                Outcome::Inserted { collection, id }
            }
            Command::PrintIndex { collection } => Outcome::Index {
                dump: index_dump(&self.store, &collection)?,
                collection,
            },
            Command::Search { collection, query } => {
                Outcome::Documents(search(&self.store, &collection, &query)?)
            }
        })
    }

    /// Parse and execute one statement, writing its outcome or error to `output`.
    ///
    /// Only failures to write are returned; a statement that fails is reported
    /// and the session carries on.
    pub fn run_statement<W: Write>(&mut self, statement: &str, output: &mut W) -> PocketdexResult<()> {
        match Command::parse(statement).and_then(|command| self.execute(command)) {
            Ok(outcome) => writeln!(output, "{outcome}")?,
            Err(err) => {
                debug!(%err, statement, "statement failed");
                writeln!(output, "Error: {err}")?;
            }
        }
        Ok(())
    }

    /// Read statements from `input` until it ends or a line says `exit`, and
    /// run each one in turn.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> PocketdexResult<()> {
        let mut buffer = StatementBuffer::new();
        for line in input.lines() {
            let line = line?;
            if buffer.is_empty() && line.trim().eq_ignore_ascii_case("exit") {
                return Ok(());
            }
            for statement in buffer.push_line(&line) {
                self.run_statement(&statement, output)?;
            }
        }

        if let Some(rest) = buffer.finish() {
            let err = PocketdexErrorKind::MissingTerminator(rest);
            writeln!(output, "Error: {err}")?;
        }
        output.flush()?;
        Ok(())
    }
}
