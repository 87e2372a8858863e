use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParadoxError {
    #[error("Dataset unavailable: {}", .0.display())]
    DatasetUnavailable(PathBuf),

    #[error("Correlation not computable: {0}")]
    NotComputable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ParadoxError>;
