//! Base58 encoding utilities for Cairn identifiers
//!
//! This crate provides the text form used for identifiers across Cairn:
//! - Base58 encoding/decoding that preserves leading zero bytes
//! - Configurable symbol tables (Bitcoin by default, Flickr, or custom)

pub mod base58;

pub use base58::{Alphabet, Base58Codec, decode, encode, validate};

mod error;
pub use error::{EncodingError, Result};
