//! TwoLight - derive a light tmTheme from a dark one
//!
//! Reads `TwoDark.tmTheme` and the palette conditional of `one.vim`, then
//! writes `TwoLight.tmTheme` and prints a summary of the remapped colors.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twolight::cli::ConvertArgs;

/// TwoLight - convert TwoDark.tmTheme to TwoLight.tmTheme
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    if let Err(e) = cli.convert.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
