//! Tracing subscriber for the `wakflo` binary.
//!
//! `wakflo-core` and `wakflo-adapters` only emit events; this is the one
//! place a subscriber is installed. Everything goes to stderr so generated
//! file listings on stdout stay clean.
//!
//! | Flags     | Level |
//! |-----------|-------|
//! | `--quiet` | ERROR |
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//!
//! A set `RUST_LOG` wins over the flags.

use std::io::IsTerminal as _;

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the chosen level.
const TARGETS: [&str; 3] = ["wakflo", "wakflo_core", "wakflo_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    // Module paths and spans only help once someone is debugging.
    let detailed = level >= Level::DEBUG;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(detailed)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
