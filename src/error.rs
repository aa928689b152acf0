use std::error::Error;

/// Result type that is being returned from methods that can fail and thus have [`PocketdexError`]s.
pub type PocketdexResult<T> = Result<T, PocketdexError>;

/// Errors that can result from Pocketdex.
// [`Error`] is public, but opaque and easy to keep compatible.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct PocketdexError(#[from] PocketdexErrorKind);

// Accessors for anything we do want to expose publicly.
impl PocketdexError {
    /// Expose the inner error kind.
    ///
    /// This is useful for matching on the error kind.
    pub fn into_inner(self) -> PocketdexErrorKind {
        self.0
    }

    /// Borrow the inner error kind.
    pub fn kind(&self) -> &PocketdexErrorKind {
        &self.0
    }
}

/// [`PocketdexErrorKind`] describes the errors that can happen while executing a statement.
///
/// None of these leave the store partially modified: an operation that fails
/// does so before it touches any collection.
///
/// This is a non-exhaustive enum, so additional variants may be added in future. It is
/// recommended to match against the wildcard `_` instead of listing all possible variants,
/// to avoid problems when new variants are added.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, displaydoc::Display)]
pub enum PocketdexErrorKind {
    /// `{0}` is not a valid collection name
    InvalidIdentifier(String),
    /// collection `{0}` already exists
    CollectionAlreadyExists(String),
    /// collection `{0}` does not exist
    CollectionNotFound(String),
    /// collection `{0}` has run out of document ids
    CollectionFull(String),
    /// unknown or invalid command `{0}`
    UnknownCommand(String),
    /// malformed command: {0}
    MalformedCommand(String),
    /// statement `{0}` is missing its terminating `;`
    MissingTerminator(String),
    /// an error occurred while reading or writing statements: {0}
    Io(#[from] std::io::Error),
}

trait PocketdexErrorMarker: Error {}

impl PocketdexErrorMarker for std::io::Error {}

impl<E> From<E> for PocketdexError
where
    E: PocketdexErrorMarker,
    PocketdexErrorKind: From<E>,
{
    fn from(value: E) -> Self {
        Self(PocketdexErrorKind::from(value))
    }
}
