//! hcpub CLI - Markdown to Zendesk Help Center publisher.
//!
//! Uploads a document's images, rewrites their references, renders the
//! document to HTML and creates a draft article from it.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::PublishArgs;
use output::Output;

fn main() {
    let args = PublishArgs::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = args.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
