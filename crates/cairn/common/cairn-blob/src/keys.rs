//! Key material attached to blobs
//!
//! Plain byte holders: no length or cipher checks happen here. Contents are
//! wiped on drop and never printed.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Symmetric key of a blob.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key(Vec<u8>);

impl Key {
    pub fn from_bytes(key: &[u8]) -> Self {
        Self(key.to_vec())
    }

    /// Copy of the key bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Constant-time comparison of two keys.
    pub fn equal(&self, other: &Key) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key([REDACTED; {}])", self.0.len())
    }
}

/// Initialization vector used with a blob [`Key`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Iv(Vec<u8>);

impl Iv {
    pub fn from_bytes(iv: &[u8]) -> Self {
        Self(iv.to_vec())
    }

    /// Copy of the IV bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Constant-time comparison of two IVs.
    pub fn equal(&self, other: &Iv) -> bool {
        self.0.as_slice().ct_eq(other.0.as_slice()).into()
    }
}

impl PartialEq for Iv {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Iv {}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv([REDACTED; {}])", self.0.len())
    }
}
