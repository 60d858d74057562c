//! Search workflow implementation
//!
//! This module drives the candidate generator, hashes each candidate and
//! compares it against the target digest.
//!
//! Candidates are tried strictly in odometer order and the search stops at the
//! first match, so the reported candidate is always the lexicographically
//! smallest preimage of its length.

use crate::constants::PROGRESS_INTERVAL;
use crate::domain::candidate::Odometer;
use crate::domain::digest::TargetDigest;
use crate::domain::report::{Outcome, Progress, Report};
use crate::domain::spec::{SearchSpec, SpecError, validate_length};
use std::time::Instant;
use tracing::debug;

/// Search all candidates of `spec.length()` for the target digest
pub fn run(spec: &SearchSpec) -> Report {
    run_with_progress(spec, |_| {})
}

/// Search with progress callback
///
/// `on_progress` is called after every `PROGRESS_INTERVAL` attempts, and
/// never at any other attempt count.
///
/// # Arguments
/// * `spec` - Validated search input
/// * `on_progress` - Observer receiving attempts, elapsed time and current candidate
///
/// # Returns
/// `Found` with the 1-based position of the match as attempt count, or
/// `NotFound` with attempts equal to 26^length
pub fn run_with_progress<F>(spec: &SearchSpec, mut on_progress: F) -> Report
where
    F: FnMut(&Progress<'_>),
{
    debug!(
        length = spec.length(),
        space = spec.space_size(),
        "starting search"
    );

    let start = Instant::now();
    let mut attempts = 0u64;
    let found = search_length(
        spec.length(),
        spec.target(),
        start,
        &mut attempts,
        &mut on_progress,
    );

    finish(found, spec.target(), attempts, start)
}

/// Search every length from 1 to `max_length`, shortest first
///
/// Attempts accumulate across lengths and progress events follow the
/// cumulative count. A `NotFound` report carries the sum of 26^k for
/// k in 1..=max_length.
pub fn run_up_to<F>(
    target: TargetDigest,
    max_length: usize,
    mut on_progress: F,
) -> Result<Report, SpecError>
where
    F: FnMut(&Progress<'_>),
{
    validate_length(max_length)?;

    debug!(max_length, "starting search over all lengths");

    let start = Instant::now();
    let mut attempts = 0u64;
    for length in 1..=max_length {
        debug!(length, attempts, "searching length");
        let found = search_length(length, &target, start, &mut attempts, &mut on_progress);
        if found.is_some() {
            return Ok(finish(found, &target, attempts, start));
        }
    }

    Ok(finish(None, &target, attempts, start))
}

/// Enumerate one length, stopping at the first match
fn search_length<F>(
    length: usize,
    target: &TargetDigest,
    start: Instant,
    attempts: &mut u64,
    on_progress: &mut F,
) -> Option<String>
where
    F: FnMut(&Progress<'_>),
{
    let mut odometer = Odometer::new(length);

    while let Some(candidate) = odometer.advance() {
        *attempts += 1;
        let matched = target.matches(candidate);

        if attempts.is_multiple_of(PROGRESS_INTERVAL) {
            on_progress(&Progress {
                attempts: *attempts,
                elapsed: start.elapsed(),
                candidate,
            });
        }

        if matched {
            return Some(candidate.to_owned());
        }
    }

    None
}

fn finish(found: Option<String>, target: &TargetDigest, attempts: u64, start: Instant) -> Report {
    let elapsed = start.elapsed();
    let outcome = match found {
        Some(candidate) => Outcome::Found {
            candidate,
            digest: *target,
        },
        None => Outcome::NotFound,
    };

    debug!(
        found = matches!(outcome, Outcome::Found { .. }),
        attempts,
        ?elapsed,
        "search finished"
    );

    Report {
        outcome,
        attempts,
        elapsed,
    }
}
