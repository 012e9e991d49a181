//! Mould CLI Application
//!
//! Command-line shell for the injection-moulding maintenance tracker.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{info, warn};
use mould_core::TrackerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(tracker, renderer);

    info!("Mould started");

    let outcome = match command {
        Some(Machine { command }) => cli.handle_machine_command(command),
        Some(Task { command }) => cli.handle_task_command(command),
        Some(Schedule { command }) => cli.handle_schedule_command(command),
        Some(Report(args)) => cli.handle_report_command(args),
        Some(Totals) | None => cli.totals(),
    };

    finish(outcome, cli.close())
}

/// Combines the command outcome with the result of closing the tracker.
///
/// A failed command wins over a failed close, so the user sees the error
/// that actually stopped the command.
fn finish(outcome: Result<()>, closed: Result<()>) -> Result<()> {
    match (outcome, closed) {
        (Err(err), Err(close_err)) => {
            warn!("{close_err:#}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), closed) => closed,
    }
}
