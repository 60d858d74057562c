//! SHA-256 helper CLI
//!
//! Usage: pwcrack_hash <TEXT>...
//!
//! Prints the digest of each argument, ready to pass to pwcrack_search.
//!
//! Example:
//!   pwcrack_hash abcd
//!   88d4266fd4e6338d13b845fcf289579d209c897823b9217da3e161936f031589  abcd

use clap::Parser;
use pwcrack_brute::sha256_hex;

#[derive(Parser, Debug)]
#[command(name = "pwcrack_hash", version)]
#[command(about = "Print the SHA-256 digest of each argument", long_about = None)]
struct Args {
    /// Strings to hash
    #[arg(required = true)]
    inputs: Vec<String>,
}

fn main() {
    let args = Args::parse();

    for input in &args.inputs {
        println!("{}  {}", sha256_hex(input), input);
    }
}
