//! Blob identifiers for Cairn
//!
//! This crate provides:
//! - [`BlobName`]: a content hash with its [`BlobType`] folded into the first
//!   byte, printable as base58
//! - [`Key`] and [`Iv`]: opaque key material with constant-time equality
//!
//! Hashing is left to the caller.

mod blob_type;
mod error;
mod keys;
pub mod name;

pub use blob_type::BlobType;
pub use error::{BlobError, Result};
pub use keys::{Iv, Key};
pub use name::{BlobName, MAX_HASH_LEN, MAX_NAME_LEN};
