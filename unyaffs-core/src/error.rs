use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YaffsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("broken image file: chunk #{chunk} is {got} bytes, expected {expected}")]
    BrokenImage {
        chunk: u64,
        got: usize,
        expected: usize,
    },

    #[error("object id {id} ({name}) out of range")]
    OutOfRangeObjectId { id: u32, name: String },

    #[error("invalid parent object id {parent} in object {id} ({name})")]
    InvalidParentId { parent: u32, id: u32, name: String },

    #[error("invalid equivalent object id {equivalent} in object {id} ({name})")]
    InvalidEquivalentId {
        equivalent: u32,
        id: u32,
        name: String,
    },

    #[error("giving up after {warnings} invalid header chunks")]
    TooManyWarnings { warnings: u32 },

    #[error("image ended with {remaining} bytes of {} still unread", .path.display())]
    UnexpectedEnd { path: PathBuf, remaining: u64 },

    #[error("header chunk #{chunk} found inside the data of {}", .path.display())]
    UnexpectedHeader { chunk: u64, path: PathBuf },

    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, YaffsError>;
