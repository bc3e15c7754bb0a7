//! ASD profile tool entry point.
//!
//! Parses the single command argument, resolves where the profile store
//! lives, and runs the interactive add flow against the real terminal.
//!
//! # Usage
//!
//! ```text
//! asd-profile add
//! ```
//!
//! # Environment
//!
//! | Variable          | Default               | Description                         |
//! |-------------------|-----------------------|-------------------------------------|
//! | `ASD_CONFIG_PATH` | current directory     | Directory holding `.asd_config.json` |
//! | `RUST_LOG`        | `warn`                | Diagnostic log filter (stderr)      |
//!
//! # Exit codes
//!
//! - `0` – profile added, or overwrite declined.
//! - `1` – the store could not be read or written, or input closed.
//! - `2` – missing or invalid command (printed by clap with the usage text).
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ store_config_from_env()     -- ASD_CONFIG_PATH + cwd, resolved once
//!  └─ AddProfileUseCase::run()
//!       ├─ JsonFileRepository     (load / atomic save)
//!       └─ Terminal::stdio()      (prompts on stdout, answers on stdin)
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use asd_profile::application::add_profile::{AddOutcome, AddProfileUseCase};
use asd_profile::infrastructure::storage::{store_config_from_env, JsonFileRepository};
use asd_profile::infrastructure::terminal::Terminal;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Adds profiles to the ASD profile store (`.asd_config.json`).
///
/// The store is looked up in `$ASD_CONFIG_PATH` if set, otherwise in the
/// current directory.
#[derive(Debug, Parser)]
#[command(name = "asd-profile", version)]
struct Cli {
    /// Command to run.
    #[arg(value_enum, ignore_case = true)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Interactively add a profile to the store.
    Add,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli.command);
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// Process exit status for a finished command.
///
/// A declined overwrite is a normal outcome; only errors fail the process.
fn exit_status(result: &anyhow::Result<AddOutcome>) -> u8 {
    match result {
        Ok(AddOutcome::Added { .. } | AddOutcome::Declined { .. }) => 0,
        Err(_) => 1,
    }
}

fn run(command: Command) -> anyhow::Result<AddOutcome> {
    match command {
        Command::Add => add_profile(),
    }
}

fn add_profile() -> anyhow::Result<AddOutcome> {
    let config = store_config_from_env().context("could not determine the current directory")?;
    let repository = JsonFileRepository::from_config(&config);
    debug!(path = %repository.path().display(), "using profile store");

    let outcome = AddProfileUseCase::new(repository, Terminal::stdio()).run()?;
    debug!(?outcome, "add finished");
    Ok(outcome)
}
