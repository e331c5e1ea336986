use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid integer {token:?}: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("no target value in input")]
    MissingTarget,
    #[error("no `nums` list in input")]
    MissingNums,
    /// A bracketed list that never closes or doesn't open
    #[error("malformed list: {0}")]
    MalformedList(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a single integer token, keeping the offending token around on failure.
pub fn parse_number(token: &str) -> Result<i32> {
    token.parse().map_err(|source| Error::InvalidNumber {
        token: token.to_string(),
        source,
    })
}
