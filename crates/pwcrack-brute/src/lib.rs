//! pwcrack-brute - Brute-force SHA-256 preimage search
//!
//! This crate provides functionality to:
//! - Enumerate every lowercase candidate of a given length in odometer order
//! - Hash each candidate with SHA-256 and compare it against a target digest
//! - Report the first match (or exhaustion) together with attempts and timing

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::searcher::{run, run_up_to, run_with_progress};
pub use constants::*;
pub use domain::candidate::{Candidates, Odometer, generate, search_space_size};
pub use domain::digest::{DigestError, TargetDigest, sha256_hex};
pub use domain::report::{Outcome, Progress, Report};
pub use domain::spec::{SearchSpec, SpecError};
