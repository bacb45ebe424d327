//! Error types for blob names

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlobError {
    #[error("Invalid blob name length: {0} bytes")]
    InvalidLength(usize),

    #[error("Invalid blob name format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, BlobError>;
