//! Search results and progress snapshots

use crate::domain::digest::TargetDigest;
use std::time::Duration;

/// Terminal outcome of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A candidate hashed to the target
    Found {
        candidate: String,
        digest: TargetDigest,
    },
    /// The search space was exhausted without a match
    NotFound,
}

/// Final record of one search run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    /// Number of candidates hashed
    pub attempts: u64,
    pub elapsed: Duration,
}

impl Report {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }

    /// Matching candidate, if any
    pub fn candidate(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Found { candidate, .. } => Some(candidate),
            Outcome::NotFound => None,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Snapshot handed to progress observers
#[derive(Clone, Copy, Debug)]
pub struct Progress<'a> {
    /// Candidates hashed so far, including the current one
    pub attempts: u64,
    pub elapsed: Duration,
    /// Candidate just hashed
    pub candidate: &'a str,
}

impl Progress<'_> {
    /// Attempts per second
    ///
    /// Elapsed time is clamped to at least 1ms, so the rate is always finite.
    pub fn rate(&self) -> f64 {
        let millis = self.elapsed.as_millis().max(1);
        self.attempts as f64 / millis as f64 * 1000.0
    }
}

/// Format an integer with `,` thousands separators (1234567 -> "1,234,567")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
