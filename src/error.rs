use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarstockError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record {record} (line {line}): {reason}")]
    MalformedRecord {
        record: usize,
        line: usize,
        reason: String,
    },

    #[error("inventory is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    #[error("invalid price range: minimum {min:.2} is greater than maximum {max:.2}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, CarstockError>;
