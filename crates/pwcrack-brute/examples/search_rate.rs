//! Search rate evaluation script
//!
//! Cracks randomly chosen candidates of a fixed length and reports the average
//! attempts and time per query, plus the overall hashing rate.
//!
//! ## Usage
//!
//! ```powershell
//! cargo run --example search_rate -p pwcrack-brute --release
//! ```
//!
//! ## Sample output
//!
//! ```text
//! [Search Rate Evaluation]
//! Length: 4
//! Search space: 456,976
//! Sample count: 20
//!
//! Found: 20/20
//! Average attempts per query: 231,544
//! Total time: 1.23s
//! Hash rate: 3,765,432/s
//! ```

use std::time::Instant;

use pwcrack_brute::domain::candidate::candidate_at;
use pwcrack_brute::domain::report::group_thousands;
use pwcrack_brute::{SearchSpec, TargetDigest, run, search_space_size};
use rand::Rng;

const LENGTH: usize = 4;
const SAMPLE_COUNT: usize = 20;

fn main() {
    let space = search_space_size(LENGTH).expect("length 4 fits in u64");

    println!("[Search Rate Evaluation]");
    println!("Length: {}", LENGTH);
    println!("Search space: {}", group_thousands(space));
    println!("Sample count: {}", SAMPLE_COUNT);
    println!();

    let mut rng = rand::thread_rng();
    let samples: Vec<String> = (0..SAMPLE_COUNT)
        .filter_map(|_| candidate_at(LENGTH, rng.gen_range(0..space)))
        .collect();

    let mut found = 0;
    let mut total_attempts = 0u64;
    let start = Instant::now();

    for (i, candidate) in samples.iter().enumerate() {
        let spec = SearchSpec::new(LENGTH, TargetDigest::of(candidate)).expect("valid length");
        let report = run(&spec);

        if report.candidate() == Some(candidate.as_str()) {
            found += 1;
        }
        total_attempts += report.attempts;

        if (i + 1) % 5 == 0 {
            eprint!("\rProgress: {}/{}", i + 1, samples.len());
        }
    }
    eprintln!();

    let total_time = start.elapsed();
    let rate = total_attempts as f64 / total_time.as_secs_f64().max(1e-3);

    println!("Found: {}/{}", found, samples.len());
    println!(
        "Average attempts per query: {}",
        group_thousands(total_attempts / samples.len().max(1) as u64)
    );
    println!("Total time: {:.2}s", total_time.as_secs_f64());
    println!("Hash rate: {}/s", group_thousands(rate as u64));
}
