use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An element the board is wired to is not in the document.
    #[error("element `{0}` not found in the document")]
    MissingElement(String),

    #[error("template `{0}` has no element content")]
    EmptyTemplate(String),

    /// A card sits in a list whose identifier is not the status it was recorded with.
    #[error("invalid task status `{0}`")]
    InvalidStatus(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
