use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds surfaced while acquiring or translating inspect output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0:?} does not exist or is a directory")]
    InputNotFound(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid inspect json: {0}")]
    ParseFailure(String),

    #[error("inspect document is missing required field {0}")]
    MissingField(&'static str),
}
