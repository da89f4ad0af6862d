use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The path could not be opened as a file, including when it names a directory.
    #[error("cannot open {path:?}: {source}")]
    ResourceNotFound { path: PathBuf, source: io::Error },
    #[error("malformed row at line {line}: {source}")]
    MalformedRow { line: u64, source: RowError },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Failure reading an already opened resource, such as I/O or an undecodable header.
    #[error("failed to read delimited data: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single row could not be turned into a record.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("missing column `{0}`")]
    MissingColumn(String),
    #[error("row has fewer fields than the header")]
    TooFewFields,
    #[error("{0}")]
    InvalidValue(String),
    #[error("column `{0}` is not valid UTF-8")]
    InvalidUtf8(String),
}
