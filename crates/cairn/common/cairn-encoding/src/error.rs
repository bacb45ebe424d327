//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid base58 character '{character}' at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Decoding error: {0}")]
    Decoding(String),
}

pub type Result<T> = std::result::Result<T, EncodingError>;
