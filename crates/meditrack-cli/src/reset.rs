//! # Reset Subcommand
//!
//! Forget stored hospitals and records so the seed data comes back.

use anyhow::{Context, Result};
use clap::Args;
use meditrack_core::db::reset_collections;
use meditrack_core::Prompt;

use crate::config::Config;

/// Arguments for the `meditrack reset` subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {}

const CONFIRM_RESET: &str = "Restore seed data? All stored hospitals and records will be lost.";

/// Execute the reset subcommand.
pub fn run_reset(_args: &ResetArgs, config: &Config) -> Result<u8> {
    if !config.prompt().confirm(CONFIRM_RESET) {
        println!("Cancelled");
        return Ok(0);
    }

    let store = config.open_store()?;
    reset_collections(store.store()).context("clearing stored collections")?;
    tracing::info!(db = %config.db_path.display(), "stored collections cleared");
    println!("Seed data restored");
    Ok(0)
}
