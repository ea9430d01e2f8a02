//! Error types for divination and catalog loading.

use std::path::PathBuf;

use crate::line::Signature;

/// Alias for `Result<T, IchingError>`.
pub type IchingResult<T> = Result<T, IchingError>;

/// Errors that can occur while loading the catalog or conducting a reading.
#[derive(Debug, thiserror::Error)]
pub enum IchingError {
    /// A line value outside 6..=9.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLine(u32),

    /// A line sequence that does not hold exactly six lines.
    #[error("expected 6 lines, got {0}")]
    InvalidLineCount(usize),

    /// Line input that is not a list of digits.
    #[error("cannot parse lines from \"{0}\"")]
    UnparsableLines(String),

    /// No hexagram in the catalog carries this signature.
    #[error("no hexagram with signature {0}")]
    SignatureNotFound(Signature),

    /// A hexagram number outside 1..=64.
    #[error("hexagram number {0} out of range (1-64)")]
    NumberOutOfRange(u32),

    /// The reference data file could not be read.
    #[error("cannot read hexagram data from {}: {source}", path.display())]
    CatalogIo {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A row of reference data is malformed.
    #[error("hexagram data row {row}: {message}")]
    MalformedRow {
        /// One-based row number.
        row: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// The reference data does not contain exactly 64 records.
    #[error("hexagram data has {0} records, expected 64")]
    CatalogSize(usize),

    /// Two records share a signature.
    #[error("hexagrams {first} and {second} share signature {signature}")]
    DuplicateSignature {
        /// The repeated signature.
        signature: Signature,
        /// The earlier hexagram number.
        first: u8,
        /// The later hexagram number.
        second: u8,
    },

    /// A reading produced a signature the catalog cannot resolve.
    #[error("catalog is inconsistent: signature {0} is not covered")]
    CatalogInconsistent(Signature),
}
