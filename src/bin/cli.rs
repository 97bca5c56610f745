//! typegraph CLI - type hierarchy and module dependency graphs.
//!
//! Usage:
//!   typegraph -m program.json hierarchy                # every type
//!   typegraph -m program.json hierarchy -t app.Widget  # one type + ancestors
//!   typegraph -m program.json -x '^std\.' deps         # module imports
//!   typegraph -m program.json deps --ranked            # rows by importer count
//!   typegraph -m program.json stats                    # graph statistics

use clap::Parser;
use tracing_subscriber::EnvFilter;
use typegraph::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    // stdout carries the graph, logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
