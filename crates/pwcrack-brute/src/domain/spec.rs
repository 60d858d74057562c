//! Search input definition

use crate::constants::MAX_LENGTH;
use crate::domain::candidate::search_space_size;
use crate::domain::digest::{DigestError, TargetDigest};
use thiserror::Error;

/// Search input validation errors
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("Password length must be a positive number")]
    ZeroLength,
    #[error("Password length {found} is too large (maximum {max})")]
    LengthTooLarge { max: usize, found: usize },
    #[error(transparent)]
    Digest(#[from] DigestError),
}

/// Immutable input of one search run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSpec {
    length: usize,
    target: TargetDigest,
}

impl SearchSpec {
    /// Create a search spec
    ///
    /// Length must be in `1..=MAX_LENGTH`.
    pub fn new(length: usize, target: TargetDigest) -> Result<Self, SpecError> {
        validate_length(length)?;
        Ok(Self { length, target })
    }

    /// Create a search spec from a hex digest (any case)
    pub fn parse(length: usize, target_hex: &str) -> Result<Self, SpecError> {
        Self::new(length, target_hex.parse()?)
    }

    /// Candidate length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Target digest
    pub fn target(&self) -> &TargetDigest {
        &self.target
    }

    /// Number of candidates in the search space (26^length)
    pub fn space_size(&self) -> u64 {
        // validated length always fits
        search_space_size(self.length).unwrap_or(u64::MAX)
    }
}

/// Check that a candidate length is searchable
pub fn validate_length(length: usize) -> Result<(), SpecError> {
    if length == 0 {
        return Err(SpecError::ZeroLength);
    }
    if length > MAX_LENGTH {
        return Err(SpecError::LengthTooLarge {
            max: MAX_LENGTH,
            found: length,
        });
    }
    Ok(())
}
