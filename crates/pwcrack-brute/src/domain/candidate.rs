//! Candidate generation
//!
//! This module enumerates every fixed-length string over the lowercase alphabet
//! in odometer order (`aa`, `ab`, ..., `az`, `ba`, ..., `zz`).
//!
//! Ordering: base-26 counter where `a`=0 and `z`=25, most-significant symbol first.

use crate::constants::{ALPHABET, ALPHABET_SIZE};
use std::iter::FusedIterator;

/// Number of candidates of the given length (26^length)
///
/// Returns `None` when the count does not fit in u64.
pub fn search_space_size(length: usize) -> Option<u64> {
    let exp = u32::try_from(length).ok()?;
    u64::from(ALPHABET_SIZE).checked_pow(exp)
}

/// Create a lazy generator over all candidates of the given length
///
/// Each call returns an independent sequence in the same order.
/// Length 0 yields exactly one empty candidate.
pub fn generate(length: usize) -> Candidates {
    Candidates {
        odometer: Odometer::new(length),
    }
}

/// Candidate at a 0-based position in enumeration order
///
/// Returns `None` if `index` is past the end of the search space.
pub fn candidate_at(length: usize, index: u64) -> Option<String> {
    if let Some(size) = search_space_size(length)
        && index >= size
    {
        return None;
    }

    let radix = u64::from(ALPHABET_SIZE);
    let mut bytes = vec![ALPHABET[0]; length];
    let mut rest = index;
    for slot in bytes.iter_mut().rev() {
        *slot = ALPHABET[(rest % radix) as usize];
        rest /= radix;
    }

    String::from_utf8(bytes).ok()
}

/// 0-based position of a candidate in enumeration order
///
/// Returns `None` if the candidate contains a symbol outside the alphabet
/// or its position does not fit in u64.
pub fn index_of(candidate: &str) -> Option<u64> {
    candidate.bytes().try_fold(0u64, |acc, b| {
        let digit = digit_of(b)?;
        acc.checked_mul(u64::from(ALPHABET_SIZE))?
            .checked_add(u64::from(digit))
    })
}

#[inline]
fn digit_of(symbol: u8) -> Option<u8> {
    symbol
        .is_ascii_lowercase()
        .then(|| symbol - ALPHABET[0])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

/// Mixed-radix counter over candidate positions
///
/// Holds one digit index (0-25) per position plus the rendered text.
/// Advancing rewrites only the suffix that changed, so the text is never
/// rebuilt from scratch and no allocation happens after construction.
#[derive(Clone, Debug)]
pub struct Odometer {
    digits: Vec<u8>,
    text: String,
    state: State,
}

impl Odometer {
    /// Create an odometer positioned before the first candidate
    pub fn new(length: usize) -> Self {
        Self {
            digits: vec![0; length],
            text: std::iter::repeat_n(char::from(ALPHABET[0]), length).collect(),
            state: State::Fresh,
        }
    }

    /// Move to the next candidate and borrow it
    ///
    /// Returns `None` once the search space is exhausted, and keeps returning
    /// `None` afterwards.
    pub fn advance(&mut self) -> Option<&str> {
        match self.state {
            State::Fresh => self.state = State::Running,
            State::Running => {
                if !self.step() {
                    self.state = State::Exhausted;
                    return None;
                }
            }
            State::Exhausted => return None,
        }
        Some(&self.text)
    }

    /// Increment the counter by one; false on carry out of the top position
    fn step(&mut self) -> bool {
        let mut pos = self.digits.len();
        while pos > 0 {
            pos -= 1;
            if self.digits[pos] + 1 < ALPHABET_SIZE {
                self.digits[pos] += 1;
                // digits after `pos` were reset to 0 by the carry
                self.text.truncate(pos);
                self.text.extend(
                    self.digits[pos..]
                        .iter()
                        .map(|&d| char::from(ALPHABET[d as usize])),
                );
                return true;
            }
            self.digits[pos] = 0;
        }
        false
    }
}

/// Lazy sequence of owned candidates
///
/// Thin wrapper over [`Odometer`] for callers that need `Iterator`.
#[derive(Clone, Debug)]
pub struct Candidates {
    odometer: Odometer,
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.odometer.advance().map(str::to_owned)
    }
}

impl FusedIterator for Candidates {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_zero_yields_empty_string() {
        let all: Vec<String> = generate(0).collect();
        assert_eq!(all, vec![String::new()]);
    }

    #[test]
    fn test_generate_length_one_is_alphabet() {
        let all: String = generate(1).collect();
        assert_eq!(all, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_generate_length_two_carry() {
        let all: Vec<String> = generate(2).collect();
        assert_eq!(all.len(), 676);
        assert_eq!(all[0], "aa");
        assert_eq!(all[25], "az");
        assert_eq!(all[26], "ba");
        assert_eq!(all[675], "zz");
    }

    #[test]
    fn test_generate_length_three_bounds() {
        let mut count = 0u64;
        let mut last = String::new();
        for (i, candidate) in generate(3).enumerate() {
            if i == 0 {
                assert_eq!(candidate, "aaa");
            }
            count += 1;
            last = candidate;
        }
        assert_eq!(count, 17_576);
        assert_eq!(last, "zzz");
    }

    #[test]
    fn test_generate_is_fused() {
        let mut candidates = generate(1);
        for _ in 0..26 {
            assert!(candidates.next().is_some());
        }
        assert_eq!(candidates.next(), None);
        assert_eq!(candidates.next(), None);
    }

    #[test]
    fn test_odometer_advance_after_exhaustion() {
        let mut odometer = Odometer::new(1);
        let mut seen = 0;
        while odometer.advance().is_some() {
            seen += 1;
        }
        assert_eq!(seen, 26);
        assert_eq!(odometer.advance(), None);
    }

    #[test]
    fn test_odometer_multi_position_carry() {
        let mut odometer = Odometer::new(3);
        // "azz" is index 675, the next one carries across two positions
        for _ in 0..676 {
            odometer.advance();
        }
        assert_eq!(odometer.advance(), Some("baa"));
    }

    #[test]
    fn test_search_space_size() {
        assert_eq!(search_space_size(0), Some(1));
        assert_eq!(search_space_size(1), Some(26));
        assert_eq!(search_space_size(4), Some(456_976));
        assert_eq!(search_space_size(13), Some(26u64.pow(13)));
        assert_eq!(search_space_size(14), None);
    }

    #[test]
    fn test_candidate_at() {
        assert_eq!(candidate_at(2, 0).as_deref(), Some("aa"));
        assert_eq!(candidate_at(2, 26).as_deref(), Some("ba"));
        assert_eq!(candidate_at(2, 675).as_deref(), Some("zz"));
        assert_eq!(candidate_at(2, 676), None);
        assert_eq!(candidate_at(0, 0).as_deref(), Some(""));
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("a"), Some(0));
        assert_eq!(index_of("ba"), Some(26));
        assert_eq!(index_of("zzz"), Some(17_575));
        assert_eq!(index_of(""), Some(0));
        assert_eq!(index_of("aB"), None);
        assert_eq!(index_of("a1"), None);
    }

    #[test]
    fn test_candidate_at_matches_generate() {
        for (i, candidate) in generate(2).enumerate() {
            assert_eq!(candidate_at(2, i as u64).as_deref(), Some(candidate.as_str()));
            assert_eq!(index_of(&candidate), Some(i as u64));
        }
    }
}
