//! gcscan library crate
//!
//! This crate provides the core functionality for the `gcscan` CLI. It is
//! organized into small modules: `gc` (GC-content calculation and alphabet
//! validation), `repl` (the interactive loop) and `error` (the shared error
//! type). The binary `src/main.rs` calls `gcscan_lib::run()` to execute the
//! CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `gc::gc_content()` — the calculator, usable without the loop.
//! - `repl::run_session()` — the loop over any reader/writer pair.

pub mod error;
pub mod gc;
pub mod repl;

use std::io::{self, IsTerminal};

use clap::{ArgAction, Parser};
use log::LevelFilter;

pub use crate::error::{Error, Result};
pub use crate::gc::gc_content;

/// Top-level CLI type. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Set up `env_logger` on stderr. `RUST_LOG`, when set, wins over `-v`.
fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stderr);
    // already initialized is fine
    let _ = builder.try_init();
}

/// Run the gcscan CLI.
///
/// Parses the command line, sets up logging, and runs the interactive loop on
/// locked stdin/stdout until the user types `exit` or input runs out. An I/O
/// failure on either stream is printed to stderr and exits with code 1.
///
/// Example:
///
/// ```no_run
/// gcscan_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        log::info!("stdin is not a terminal, reading piped input");
    }

    let stdout = io::stdout();
    if let Err(e) = repl::run_session(stdin.lock(), stdout.lock()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_is_quiet() {
        let cli = Cli::try_parse_from(["gcscan"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(level_for(cli.verbose), LevelFilter::Warn);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["gcscan", "-vv"]).unwrap();
        assert_eq!(level_for(cli.verbose), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["gcscan", "ACGT"]).is_err());
    }
}
