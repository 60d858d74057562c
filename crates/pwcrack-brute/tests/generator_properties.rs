use pwcrack_brute::constants::ALPHABET_SIZE;
use pwcrack_brute::domain::candidate::{candidate_at, index_of};
use pwcrack_brute::{generate, search_space_size};
use std::collections::HashSet;

#[test]
fn test_generate_counts_match_search_space() {
    for length in 1..=4 {
        let count = generate(length).count() as u64;
        assert_eq!(count, u64::from(ALPHABET_SIZE).pow(length as u32));
        assert_eq!(Some(count), search_space_size(length));
    }
}

#[test]
fn test_generate_candidates_are_well_formed() {
    for length in 1..=3 {
        for candidate in generate(length) {
            assert_eq!(candidate.len(), length);
            assert!(candidate.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }
}

#[test]
fn test_generate_strictly_increasing() {
    let candidates: Vec<String> = generate(3).collect();
    for pair in candidates.windows(2) {
        assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
    }
}

#[test]
fn test_generate_distinct() {
    let candidates: HashSet<String> = generate(3).collect();
    assert_eq!(candidates.len(), 17_576);
}

#[test]
fn test_generate_deterministic() {
    let first = generate(3);
    let second = generate(3);
    assert!(first.eq(second));
}

#[test]
fn test_generate_recursive_construction() {
    // generate(n) == for c in a..=z: c + generate(n - 1)
    let expected: Vec<String> = generate(1)
        .flat_map(|head| generate(2).map(move |tail| format!("{head}{tail}")))
        .collect();
    let actual: Vec<String> = generate(3).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_generate_independent_sequences() {
    let mut first = generate(2);
    first.nth(100);
    let second: Vec<String> = generate(2).take(3).collect();
    assert_eq!(second, vec!["aa", "ab", "ac"]);
    assert_eq!(first.next().as_deref(), Some("dx"));
}

#[test]
fn test_position_helpers_agree_with_generate() {
    for (i, candidate) in generate(3).enumerate().step_by(97) {
        assert_eq!(index_of(&candidate), Some(i as u64));
        assert_eq!(candidate_at(3, i as u64), Some(candidate));
    }
}

#[test]
fn test_generate_longest_length_starts_at_first_symbol() {
    let mut candidates = generate(13);
    assert_eq!(candidates.next().as_deref(), Some("aaaaaaaaaaaaa"));
    assert_eq!(candidates.next().as_deref(), Some("aaaaaaaaaaaab"));
}
