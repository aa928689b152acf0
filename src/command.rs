//! Parsing statements like `SEARCH docs WHERE "quick" <2 "fox"` into [`Command`]s.
//!
//! The parser only splits a statement into its parts. Collection names are
//! validated and search terms normalized by the store and the query engine.

use crate::error::{PocketdexErrorKind, PocketdexResult};
use crate::query::Query;

/// A fully parsed statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `CREATE name`
    CreateCollection {
        /// Name of the new collection.
        name: String,
    },
    /// `INSERT name "text"`
    InsertDocument {
        /// Collection to add to.
        collection: String,
        /// Document text, without the surrounding quotes.
        text: String,
    },
    /// `PRINT_INDEX name`
    PrintIndex {
        /// Collection whose index to print.
        collection: String,
    },
    /// `SEARCH name [WHERE query]`
    Search {
        /// Collection to search.
        collection: String,
        /// What to look for; [`Query::All`] when there is no `WHERE` clause.
        query: Query,
    },
}

fn malformed(reason: impl Into<String>) -> PocketdexErrorKind {
    PocketdexErrorKind::MalformedCommand(reason.into())
}

/// Split off the first whitespace-delimited word of `s`.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

impl Command {
    /// Parse one statement, without its terminating `;`.
    pub fn parse(statement: &str) -> PocketdexResult<Command> {
        let (keyword, rest) = split_word(statement.trim());
        let rest = rest.trim_end();

        let command = match keyword.to_ascii_uppercase().as_str() {
            "CREATE" => Command::CreateCollection {
                name: single_name(rest, "CREATE")?,
            },
            "PRINT_INDEX" => Command::PrintIndex {
                collection: single_name(rest, "PRINT_INDEX")?,
            },
            "INSERT" => {
                let (collection, text) = split_word(rest);
                if collection.is_empty() {
                    return Err(malformed("INSERT needs a collection name").into());
                }
                let text = text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .ok_or_else(|| malformed("INSERT needs the document text in double quotes"))?;
                Command::InsertDocument {
                    collection: collection.to_string(),
                    text: text.to_string(),
                }
            }
            "SEARCH" => {
                let (collection, clause) = split_word(rest);
                if collection.is_empty() {
                    return Err(malformed("SEARCH needs a collection name").into());
                }
                let query = if clause.is_empty() {
                    Query::All
                } else {
                    let (where_kw, condition) = split_word(clause);
                    if !where_kw.eq_ignore_ascii_case("WHERE") {
                        return Err(malformed(format!("expected WHERE, found `{where_kw}`")).into());
                    }
                    parse_condition(condition)?
                };
                Command::Search {
                    collection: collection.to_string(),
                    query,
                }
            }
            _ => return Err(PocketdexErrorKind::UnknownCommand(keyword.to_string()).into()),
        };
        Ok(command)
    }
}

fn single_name(rest: &str, keyword: &str) -> PocketdexResult<String> {
    match split_word(rest) {
        ("", _) => Err(malformed(format!("{keyword} needs a collection name")).into()),
        (name, "") => Ok(name.to_string()),
        (_, extra) => Err(malformed(format!("unexpected `{extra}` after {keyword}")).into()),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Part {
    Term(String),
    Dash,
    Within(u32),
}

/// Break a `WHERE` condition into terms and operators. Terms keep their
/// quotes; the query engine strips them.
fn lex_condition(condition: &str) -> PocketdexResult<Vec<Part>> {
    let mut parts = vec![];
    let mut rest = condition.trim_start();
    while let Some(c) = rest.chars().next() {
        match c {
            '"' => {
                let end = rest[1..]
                    .find('"')
                    .ok_or_else(|| malformed("unterminated quoted term"))?;
                parts.push(Part::Term(rest[..end + 2].to_string()));
                rest = &rest[end + 2..];
            }
            '-' => {
                parts.push(Part::Dash);
                rest = &rest[1..];
            }
            '<' => {
                let after = rest[1..].trim_start();
                let digits = after.find(|c: char| !c.is_ascii_digit()).unwrap_or(after.len());
                let distance = after[..digits]
                    .parse()
                    .map_err(|_| malformed("`<` must be followed by a non-negative distance"))?;
                parts.push(Part::Within(distance));
                rest = &after[digits..];
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || matches!(c, '"' | '-' | '<'))
                    .unwrap_or(rest.len());
                parts.push(Part::Term(rest[..end].to_string()));
                rest = &rest[end..];
            }
        }
        rest = rest.trim_start();
    }
    Ok(parts)
}

fn parse_condition(condition: &str) -> PocketdexResult<Query> {
    let mut parts = lex_condition(condition)?;
    let query = match parts.as_mut_slice() {
        [Part::Term(word)] => Query::Keyword(std::mem::take(word)),
        [Part::Term(low), Part::Dash, Part::Term(high)] => Query::Range {
            low: std::mem::take(low),
            high: std::mem::take(high),
        },
        [Part::Term(first), Part::Within(distance), Part::Term(second)] => Query::Proximity {
            first: std::mem::take(first),
            distance: *distance,
            second: std::mem::take(second),
        },
        [] => return Err(malformed("empty WHERE condition").into()),
        _ => {
            return Err(malformed(format!(
                "cannot understand condition `{}`",
                condition.trim()
            ))
            .into())
        }
    };
    Ok(query)
}

/// Assembles statements out of lines of input.
///
/// Text accumulates until a `;` outside double quotes. A statement may span
/// several lines, and one line may hold several statements. A line that ends
/// in `;` always ends the pending statement, even with a quote left open, so
/// one stray `"` can't swallow the statements that follow it.
#[derive(Debug, Default)]
pub struct StatementBuffer {
    pending: String,
    in_quotes: bool,
}

impl StatementBuffer {
    /// An empty buffer.
    pub fn new() -> StatementBuffer {
        StatementBuffer::default()
    }

    /// Feed one line of input and get back every statement it completes,
    /// with the `;` removed. Blank statements are dropped.
    pub fn push_line(&mut self, line: &str) -> Vec<String> {
        let mut complete = vec![];
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        for c in line.chars() {
            match c {
                ';' if !self.in_quotes => {
                    let statement = std::mem::take(&mut self.pending);
                    if !statement.trim().is_empty() {
                        complete.push(statement.trim().to_string());
                    }
                }
                _ => {
                    if c == '"' {
                        self.in_quotes = !self.in_quotes;
                    }
                    self.pending.push(c);
                }
            }
        }

        if self.in_quotes && line.trim_end().ends_with(';') {
            self.in_quotes = false;
            let statement = std::mem::take(&mut self.pending);
            let statement = statement.trim_end();
            let statement = statement.strip_suffix(';').unwrap_or(statement).trim();
            if !statement.is_empty() {
                complete.push(statement.to_string());
            }
        }
        complete
    }

    /// True if no partial statement is waiting for its `;`.
    pub fn is_empty(&self) -> bool {
        self.pending.trim().is_empty()
    }

    /// Take whatever partial statement is left, if any.
    pub fn finish(&mut self) -> Option<String> {
        self.in_quotes = false;
        let rest = std::mem::take(&mut self.pending);
        let rest = rest.trim();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}
