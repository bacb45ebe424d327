//! Blob type tag

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a blob, as one opaque byte.
///
/// Meaning is assigned by the application; no value is reserved here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlobType(u8);

impl BlobType {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for BlobType {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<BlobType> for u8 {
    fn from(value: BlobType) -> Self {
        value.0
    }
}

impl fmt::Display for BlobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}
