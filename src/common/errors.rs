use std::io;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid test range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: u32, upper: u32 },

    #[error("failed to read {path}: {io_error}")]
    Read {
        path: String,
        #[source]
        io_error: io::Error,
    },

    #[error("{path}: malformed aag header {line:?}")]
    MalformedHeader { path: String, line: String },

    #[error("random probe levels need a nonzero max level")]
    InvalidMaxLevel,

    #[error("random aag needs at least 2 variables, got {0}")]
    InvalidVarCount(u32),

    #[error("failed to write {}", .failed.join(", "))]
    Write { failed: Vec<String> },

    #[error("failed to write {path}: {io_error}")]
    WriteFile {
        path: String,
        #[source]
        io_error: io::Error,
    },

    #[error("{count} patterns of {inputs} inputs exceed the {limit} byte pattern file limit")]
    PatternTooLarge { inputs: u64, count: u32, limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
