//! configure-myst - MyST site configuration generator
//!
//! Reads an article's `article.yml` and writes the `myst.yml` the MyST
//! publishing tool needs, filling in fixed organizational metadata and a
//! fresh project id.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod common;
mod error;
mod manifest;

use cli::Cli;

/// Initialize tracing with output to stderr so stdout only carries results
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "configure_myst=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::configure::run(cli.configure) {
        tracing::debug!(kind = ?e.kind(), error = ?e, "configure failed");
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
