//! Search related constants

// =============================================================================
// Candidate alphabet
// =============================================================================

/// Symbols used to build candidates, in enumeration order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet (radix of the odometer)
pub const ALPHABET_SIZE: u8 = 26;

/// Maximum candidate length (26^13 is the largest search space that fits in u64)
pub const MAX_LENGTH: usize = 13;

// =============================================================================
// Digest parameters
// =============================================================================

/// Byte size of a SHA-256 digest
pub const DIGEST_BYTES: usize = 32;

/// Length of a SHA-256 digest rendered as hex
pub const DIGEST_HEX_LEN: usize = DIGEST_BYTES * 2;

// =============================================================================
// Progress reporting
// =============================================================================

/// Attempts between progress events
pub const PROGRESS_INTERVAL: u64 = 100_000;
