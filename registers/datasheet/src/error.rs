// Licensed under the Apache-2.0 license

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a datasheet extraction run.
#[derive(Error, Debug)]
pub enum DatasheetError {
    /// The datasheet file could not be opened.
    #[error("cannot open datasheet {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the document or talking to the operator failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A register row matched but its offset is not a usable integer.
    #[error("line {line}: invalid register offset `{text}`: {source}")]
    InvalidOffset {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A register row went backwards inside a single table fragment.
    #[error(
        "line {line}: register `{name}` at word offset {offset:#x} follows word offset {previous:#x}"
    )]
    OutOfOrderOffset {
        line: usize,
        name: String,
        offset: usize,
        previous: usize,
    },
}

/// Result type for datasheet operations
pub type DatasheetResult<T> = std::result::Result<T, DatasheetError>;
