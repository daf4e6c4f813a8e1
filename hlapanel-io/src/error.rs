use std::io;
use thiserror::Error;

/// Error type for hlapanel-io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The file could not be opened or decompressed.
    #[error("Can't read file: {0}")]
    FileRead(String),

    /// Malformed delimited text.
    #[error("Failed to parse delimited file: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required columns are absent from the header row.
    #[error("Table must contain columns: {expected} (missing: {missing})")]
    MissingColumns { expected: String, missing: String },

    /// A population filter was requested but the table has no population column.
    #[error("A population filter was given but the 'population' column is missing in the frequency table")]
    PopulationColumnMissing,

    /// The population filter removed every row.
    #[error("No rows matching populations: {0:?}")]
    NoPopulationMatch(Vec<String>),

    /// The field separator is not a single byte.
    #[error("Invalid field separator {0:?}: it must be a single character")]
    InvalidSeparator(String),
}

/// Result type alias for hlapanel-io operations.
pub type Result<T> = std::result::Result<T, IoError>;
