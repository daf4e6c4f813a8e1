use thiserror::Error;

#[derive(Error, Debug)]
pub enum HlaPanelError {
    #[error("Unknown HLA locus: {0}")]
    UnknownLocus(String),
}

pub type Result<T> = std::result::Result<T, HlaPanelError>;
