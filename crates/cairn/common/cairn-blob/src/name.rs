//! Blob names
//!
//! A blob name identifies a blob by its content hash and its [`BlobType`].
//! Both are packed into one byte string, `tag || hash`, where
//! `tag = type ^ fold_xor(hash)`. The type is therefore not stored at a fixed
//! position: every byte of a name is as evenly distributed as the hash itself,
//! yet XOR-ing all bytes of the name gives the type back.
//!
//! The text form is the base58 encoding of those bytes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use subtle::ConstantTimeEq;

use crate::blob_type::BlobType;
use crate::error::{BlobError, Result};

/// Longest hash that fits in a blob name.
pub const MAX_HASH_LEN: usize = 0x7E;

/// Longest blob name in bytes: the tag byte plus [`MAX_HASH_LEN`].
pub const MAX_NAME_LEN: usize = 0x7F;

/// XOR of all bytes; 0 for an empty slice.
fn fold_xor(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b)
}

/// Identifier of a blob: a type-tagged content hash.
///
/// Always holds between 1 and [`MAX_NAME_LEN`] bytes. Equality is checked in
/// constant time.
#[derive(Clone)]
pub struct BlobName {
    bytes: Vec<u8>,
}

impl BlobName {
    /// Build the name of a blob from its hash (e.g. SHA-256 of the content)
    /// and its type.
    ///
    /// The hash must be 1 to [`MAX_HASH_LEN`] bytes long.
    ///
    /// ```
    /// use cairn_blob::{BlobName, BlobType};
    ///
    /// let name = BlobName::from_hash_and_type(&[1, 2, 3], BlobType::new(0x02)).unwrap();
    /// assert_eq!(name.as_bytes(), [0x02 ^ 1 ^ 2 ^ 3, 1, 2, 3]);
    /// assert_eq!(name.hash(), [1, 2, 3]);
    /// assert_eq!(name.blob_type(), BlobType::new(0x02));
    /// ```
    pub fn from_hash_and_type(hash: &[u8], blob_type: BlobType) -> Result<Self> {
        if hash.is_empty() || hash.len() > MAX_HASH_LEN {
            return Err(BlobError::InvalidLength(hash.len()));
        }

        let mut bytes = Vec::with_capacity(hash.len() + 1);
        bytes.push(blob_type.to_u8() ^ fold_xor(hash));
        bytes.extend_from_slice(hash);

        Ok(Self { bytes })
    }

    /// Restore a name from the bytes returned by [`BlobName::bytes`].
    ///
    /// Only the length is checked (1 to [`MAX_NAME_LEN`] bytes). A single byte
    /// is accepted and yields an empty [`hash`](Self::hash), even though
    /// [`from_hash_and_type`](Self::from_hash_and_type) never produces one.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        check_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Parse the base58 text form produced by `to_string()`.
    pub fn from_string(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Hash part of the name: every byte after the tag.
    pub fn hash(&self) -> &[u8] {
        &self.bytes[1..]
    }

    /// Type of the blob, recovered from the name bytes.
    pub fn blob_type(&self) -> BlobType {
        BlobType::new(fold_xor(&self.bytes))
    }

    /// Copy of the raw name bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Constant-time comparison of two names.
    pub fn equal(&self, other: &BlobName) -> bool {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice()).into()
    }
}

fn check_len(len: usize) -> Result<()> {
    if len == 0 || len > MAX_NAME_LEN {
        tracing::debug!(len, "rejected blob name bytes");
        return Err(BlobError::InvalidLength(len));
    }
    Ok(())
}

impl FromStr for BlobName {
    type Err = BlobError;

    fn from_str(s: &str) -> Result<Self> {
        let decoded = cairn_encoding::decode(s).map_err(|e| {
            tracing::debug!(error = %e, "rejected blob name string");
            BlobError::InvalidFormat(e.to_string())
        })?;

        Self::try_from(decoded).map_err(|e| BlobError::InvalidFormat(e.to_string()))
    }
}

impl TryFrom<&[u8]> for BlobName {
    type Error = BlobError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for BlobName {
    type Error = BlobError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        check_len(bytes.len())?;
        Ok(Self { bytes })
    }
}

impl AsRef<[u8]> for BlobName {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq for BlobName {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for BlobName {}

impl Hash for BlobName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cairn_encoding::encode(&self.bytes))
    }
}

impl fmt::Debug for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlobName({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BlobName {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BlobName {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
