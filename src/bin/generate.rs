//! Random test file generator command line tool
//!
//! Writes a file of the requested size filled with fixed-width lines of
//! random uppercase letters. Produces no output on success beyond the
//! exit code.

use std::env;
use std::process;

use blockfile::config::GeneratorConfig;
use blockfile::generator::generate_file;

/// Command line arguments structure
struct Args {
    destination: String,
    size: u64,
}

impl Args {
    /// Parse command line arguments (two positionals, no flags)
    fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();

        if args.len() != 3 {
            return Err("".to_string()); // Empty error triggers usage display
        }

        let destination = args[1].clone();
        let size = args[2]
            .parse::<u64>()
            .map_err(|_| format!("Invalid size: {}", args[2]))?;

        Ok(Args { destination, size })
    }
}

/// Print usage information
fn print_usage() {
    println!("Usage: generate <destination-path> <size-in-bytes>");
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

    let config = GeneratorConfig::default();
    let mut rng = rand::rng();

    if let Err(err) = generate_file(&args.destination, args.size, &config, &mut rng) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
