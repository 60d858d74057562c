//! Brute-force password search CLI
//!
//! Usage: pwcrack_search <LENGTH> <TARGET_HASH> [--up-to] [--quiet] [--verbose]
//!
//! Tries every lowercase password of LENGTH characters in order (aaaa, aaab, ...)
//! until one hashes to TARGET_HASH with SHA-256.
//!
//! Example:
//!   pwcrack_search 4 88d4266fd4e6338d13b845fcf289579d209c897823b9217da3e161936f031589
//!   pwcrack_search 5 <hash> --up-to

use anyhow::{Context, Result};
use clap::Parser;
use pwcrack_brute::domain::report::group_thousands;
use pwcrack_brute::domain::spec::validate_length;
use pwcrack_brute::{
    Outcome, Progress, Report, SearchSpec, run_up_to, run_with_progress, search_space_size,
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Search spaces above this size get a "long time" notice
const LONG_SEARCH_THRESHOLD: u64 = 100_000_000;

#[derive(Parser, Debug)]
#[command(name = "pwcrack_search", version)]
#[command(about = "Brute-force a SHA-256 digest over lowercase passwords", long_about = None)]
struct Args {
    /// Password length (1-13)
    #[arg(value_parser = parse_length)]
    length: usize,

    /// Target SHA-256 digest (64 hex characters, any case)
    target_hash: String,

    /// Try every length from 1 up to LENGTH
    #[arg(long)]
    up_to: bool,

    /// Do not print the progress line
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| "Password length must be a positive number".to_string())?;
    validate_length(length).map_err(|e| e.to_string())?;
    Ok(length)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn format_progress(progress: &Progress<'_>) -> String {
    format!(
        "\rAttempts: {} | Rate: {:.0}/s | Current: {}",
        group_thousands(progress.attempts),
        progress.rate(),
        progress.candidate
    )
}

fn format_report(report: &Report) -> String {
    let mut lines = Vec::with_capacity(5);
    match &report.outcome {
        Outcome::Found { candidate, digest } => {
            lines.push("✓ PASSWORD FOUND!".to_string());
            lines.push(format!("Password: {}", candidate));
            lines.push(format!("Hash: {}", digest));
            lines.push(format!("Attempts: {}", group_thousands(report.attempts)));
        }
        Outcome::NotFound => {
            lines.push("✗ Password not found".to_string());
            lines.push(format!(
                "Total attempts: {}",
                group_thousands(report.attempts)
            ));
        }
    }
    lines.push(format!("Time: {:.2} seconds", report.elapsed_secs()));
    lines.join("\n")
}

fn print_progress(progress: &Progress<'_>) {
    print!("{}", format_progress(progress));
    let _ = io::stdout().flush();
}

fn total_combinations(args: &Args) -> u64 {
    let first = if args.up_to { 1 } else { args.length };
    (first..=args.length)
        .filter_map(search_space_size)
        .fold(0u64, u64::saturating_add)
}

fn build_spec(args: &Args) -> Result<SearchSpec> {
    SearchSpec::parse(args.length, &args.target_hash).context("Invalid search input")
}

fn execute(args: &Args) -> Result<()> {
    let spec = build_spec(args)?;
    debug!(
        length = spec.length(),
        digest = %spec.target(),
        up_to = args.up_to,
        "parsed arguments"
    );

    let total = total_combinations(args);

    println!("Starting brute-force attack...");
    if args.up_to {
        println!("Password length: 1-{}", spec.length());
    } else {
        println!("Password length: {}", spec.length());
    }
    println!("Target hash: {}", spec.target());
    println!("Total combinations to try: {}", group_thousands(total));
    if total > LONG_SEARCH_THRESHOLD {
        println!("This may take a long time. Press Ctrl+C to cancel.");
    }
    println!();

    let quiet = args.quiet;
    let on_progress = |progress: &Progress<'_>| {
        if !quiet {
            print_progress(progress);
        }
    };

    let report = if args.up_to {
        run_up_to(*spec.target(), spec.length(), on_progress)
            .context("Invalid search input")?
    } else {
        run_with_progress(&spec, on_progress)
    };

    println!();
    println!();
    println!("{}", format_report(&report));
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.verbose);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
