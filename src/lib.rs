//! `pocketdex` keeps named collections of text documents in memory and
//! answers word queries against them.
//!
//! The work is split across a few modules:
//!
//! *   `tokenize` turns text into lowercased words with their positions.
//!
//! *   `index` maps each word to the documents and positions where it occurs,
//!     and `store` owns the collections, each with its own index.
//!
//! *   `query` answers the four kinds of search (everything, one word, a
//!     range of words, two words near each other) and dumps an index.
//!
//! *   `command` and `session` parse statements such as
//!     `SEARCH docs WHERE "quick" <1 "fox";` and print what they return.
//!
//! The `run` function at the end puts the session together with the
//! process's input and output; the `pocketdex` binary calls it.

mod error;
mod normalize;

pub mod command;
pub mod index;
pub mod query;
pub mod session;
pub mod store;
pub mod tokenize;

use std::fs::File;
use std::io::{self, BufReader, Write};

use tracing::info;

pub use crate::command::{Command, StatementBuffer};
pub use crate::error::{PocketdexError, PocketdexErrorKind, PocketdexResult};
pub use crate::index::{DocId, InvertedIndex};
pub use crate::normalize::{is_valid_identifier, normalize_term};
pub use crate::query::Query;
pub use crate::session::{Outcome, Session};
pub use crate::store::{Collection, CollectionStore, Document};
pub use crate::tokenize::{tokenize, Token};

/// Run statements against a fresh store.
///
/// With no `scripts`, statements are read from standard input until it ends
/// or a line says `exit`; unless `quiet` is set a short banner is printed
/// first. Otherwise each script file is executed in order, all against the
/// same store.
pub fn run(scripts: Vec<String>, quiet: bool) -> PocketdexResult<()> {
    let mut session = Session::new();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if scripts.is_empty() {
        if !quiet {
            writeln!(output, "Enter commands:")?;
        }
        return session.run(io::stdin().lock(), &mut output);
    }

    for script in scripts {
        info!(script = %script, "running script");
        let file = File::open(&script)?;
        session.run(BufReader::new(file), &mut output)?;
    }
    Ok(())
}
