use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WlError {
    #[error("invalid status '{status}', must be one of: unwatched, watching, watched, on hold, dropped")]
    InvalidStatusError { status: String },

    #[error("no item named '{name}'")]
    ItemNotFoundError { name: String },

    #[error("watchlist file not found: {}", .path.display())]
    FileNotFoundError { path: PathBuf },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WlError>;
