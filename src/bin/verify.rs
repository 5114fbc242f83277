//! File verification command line tool
//!
//! Compares two files of equal size block by block in a randomly shuffled
//! order and prints a single read-throughput summary line on success.

use std::env;
use std::process;

use blockfile::config::VerifierConfig;
use blockfile::verifier::verify_files;

/// Command line arguments structure
struct Args {
    reference: String,
    candidate: String,
}

impl Args {
    /// Parse command line arguments (two positionals, no flags)
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();

        if args.len() != 3 {
            return Err("".to_string()); // Empty error triggers usage display
        }

        Ok(Args {
            reference: args[1].clone(),
            candidate: args[2].clone(),
        })
    }
}

/// Print usage information
fn print_usage() {
    println!("Usage: verify <reference-path> <candidate-path>");
}

fn main() {
    // Initialize logger with minimal output (only errors by default)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            if err.is_empty() {
                print_usage();
            } else {
                eprintln!("Error: {}", err);
            }
            process::exit(1);
        }
    };

    let config = VerifierConfig::default();
    let mut rng = rand::rng();

    match verify_files(&args.reference, &args.candidate, &config, &mut rng) {
        Ok(report) => println!("{}", report),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
