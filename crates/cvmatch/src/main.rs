//! cvmatch: résumé ↔ job description keyword gap analysis.
//!
//! Extracts normalized terms from a résumé and a job description, finds the job terms the
//! résumé never mentions, ranks them by frequency and phrase bonus, and reports the result
//! as console tables, JSON and a self-contained HTML page.

mod cli;

use std::{io, process::ExitCode};

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, registry, util::SubscriberInitExt,
};

use crate::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands,
};

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = parse_cli();

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
