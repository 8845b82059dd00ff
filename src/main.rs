//! Contact Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never interleave with command output.

use anyhow::Result;
use contact_assistant::{repl, CommandContext, Config};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let (config, rejected) = Config::load();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match rejected {
        Some(e) => warn!("Invalid configuration, using defaults: {}", e),
        None => info!("Configuration loaded successfully"),
    }

    let mut ctx = CommandContext::with_system_clock();

    info!("Starting contact assistant");
    let stdin = io::stdin();
    repl::run(&mut ctx, stdin.lock(), io::stdout(), &config.prompt)?;

    info!(
        "Contact assistant shutdown complete ({} contact(s) discarded)",
        ctx.book().len()
    );
    Ok(())
}
