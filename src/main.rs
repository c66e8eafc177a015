//! Jotter - a tiny positional text editor with undo and redo.
//!
//! # Usage
//!
//! ```bash
//! jotter
//! jotter --quiet --redo-policy keep
//! jotter --debug-log jotter.log
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jotter::app::App;
use jotter::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use jotter::editor::RedoPolicy;

/// A tiny positional text editor with undo and redo
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
struct Cli {
    /// What a new edit does to the redo history
    #[arg(long, value_enum)]
    redo_policy: Option<RedoPolicy>,

    /// Hide the numbered menu (prompts are still shown)
    #[arg(short, long)]
    quiet: bool,

    /// Write debug logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(debug_log: Option<&Path>) -> Result<()> {
    match debug_log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create debug log {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        quiet: cli.quiet,
        redo_policy: cli.redo_policy,
        debug_log: cli.debug_log.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.debug_log.as_deref())?;
    tracing::debug!(?effective, "effective configuration");

    App::new()
        .with_redo_policy(effective.redo_policy.unwrap_or_default())
        .with_quiet(effective.quiet)
        .run()
        .context("Editor error")
}
