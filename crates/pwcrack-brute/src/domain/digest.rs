//! SHA-256 digest handling
//!
//! This module provides the hashing primitive used by the search and the
//! parsed form of the target digest.

use crate::constants::{DIGEST_BYTES, DIGEST_HEX_LEN};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Digest parse errors
#[derive(Debug, Error, PartialEq)]
pub enum DigestError {
    /// Input is not 64 characters long
    #[error("Invalid SHA256 hash format: expected 64 hex characters, found {found}")]
    InvalidLength { found: usize },
    /// Input contains a non-hex character
    #[error("Invalid SHA256 hash format: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// SHA-256 digest of a string, as 64 lowercase hex characters
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Target digest of a search
///
/// Parsing accepts upper or lower case hex; the value always renders as
/// lowercase. Comparison works on the raw bytes, so no per-candidate
/// normalization is needed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDigest([u8; DIGEST_BYTES]);

impl TargetDigest {
    /// Digest of the given string
    pub fn of(input: &str) -> Self {
        let mut bytes = [0u8; DIGEST_BYTES];
        bytes.copy_from_slice(&Sha256::digest(input.as_bytes()));
        Self(bytes)
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check whether `candidate` hashes to this digest
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        Sha256::digest(candidate.as_bytes()).as_slice() == self.0.as_slice()
    }
}

impl FromStr for TargetDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(DigestError::InvalidLength { found: s.len() });
        }
        let mut bytes = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for TargetDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TargetDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetDigest({})", self.to_hex())
    }
}
