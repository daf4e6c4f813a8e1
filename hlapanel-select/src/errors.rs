use thiserror::Error;

use hlapanel_io::IoError;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Coverage target must be a finite number, got {0}")]
    InvalidCoverage(f64),

    #[error("The population filter is empty; omit it to keep every population")]
    EmptyPopulations,

    #[error(transparent)]
    Table(#[from] IoError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SelectError>;
