//! Base58 encoding/decoding
//!
//! Bytes are read as one big-endian unsigned integer and rewritten as base58
//! digits. Leading zero bytes carry no magnitude, so each one is written as a
//! leading zero-symbol (`'1'` in the Bitcoin alphabet) to keep the byte length.
//! There is no checksum and no version byte.

use std::fmt;

pub use bs58::Alphabet;

use crate::error::{EncodingError, Result};

/// Base58 codec bound to an [`Alphabet`].
#[derive(Clone, Copy)]
pub struct Base58Codec {
    alphabet: &'static Alphabet,
}

impl Base58Codec {
    /// Use `Alphabet::BITCOIN`, `Alphabet::FLICKR` or a `static` built with
    /// `Alphabet::new`.
    pub const fn new(alphabet: &'static Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    /// Encode bytes as a base58 string. Empty input gives an empty string.
    pub fn encode(&self, input: &[u8]) -> String {
        bs58::encode(input)
            .with_alphabet(self.alphabet)
            .into_string()
    }

    /// Decode a base58 string back into the exact bytes it was encoded from.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>> {
        bs58::decode(input)
            .with_alphabet(self.alphabet)
            .into_vec()
            .map_err(|e| decode_error(input, e))
    }

    /// Check that `input` decodes without keeping the result.
    pub fn validate(&self, input: &str) -> Result<()> {
        self.decode(input)?;
        Ok(())
    }
}

impl Default for Base58Codec {
    fn default() -> Self {
        Self::new(Alphabet::BITCOIN)
    }
}

impl fmt::Debug for Base58Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base58Codec").finish_non_exhaustive()
    }
}

/// Encode bytes as base58 using the Bitcoin alphabet.
pub fn encode(input: &[u8]) -> String {
    Base58Codec::default().encode(input)
}

/// Decode a base58 string using the Bitcoin alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    Base58Codec::default().decode(input)
}

/// Validate a base58 string against the Bitcoin alphabet.
pub fn validate(input: &str) -> Result<()> {
    Base58Codec::default().validate(input)
}

/// bs58 reports byte offsets; callers get the offending character and its
/// character position.
fn decode_error(input: &str, error: bs58::decode::Error) -> EncodingError {
    let byte_index = match &error {
        bs58::decode::Error::InvalidCharacter { index, .. }
        | bs58::decode::Error::NonAsciiCharacter { index } => *index,
        other => return EncodingError::Decoding(other.to_string()),
    };

    let Some(character) = input.get(byte_index..).and_then(|rest| rest.chars().next()) else {
        return EncodingError::Decoding(error.to_string());
    };
    let index = input[..byte_index].chars().count();

    tracing::trace!(%character, index, "rejected base58 input");
    EncodingError::InvalidCharacter { character, index }
}
