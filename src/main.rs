//! Track Resolver - resolve music share links from the command line.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use track_resolver::cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (stderr, so stdout stays clean for --json)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("track_resolver=info".parse()?))
        .init();

    cli::run_command(&args)
}
