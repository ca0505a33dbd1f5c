//! Runtime configuration.
//!
//! The database path is taken from `--db`, then `MEDITRACK_DB`, then
//! `meditrack.db` in the working directory.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use meditrack_core::{Database, RecordStore};

use crate::prompt::TerminalPrompt;

/// Environment variable naming the database file.
pub const DB_ENV_VAR: &str = "MEDITRACK_DB";

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "meditrack.db";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Answer yes to every confirmation
    pub assume_yes: bool,
}

impl Config {
    /// Resolve from the command line and process environment.
    pub fn resolve(db_flag: Option<PathBuf>, assume_yes: bool) -> Self {
        Self::from_sources(db_flag, std::env::var_os(DB_ENV_VAR), assume_yes)
    }

    fn from_sources(db_flag: Option<PathBuf>, db_env: Option<OsString>, assume_yes: bool) -> Self {
        let db_path = db_flag
            .or_else(|| db_env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
        Self { db_path, assume_yes }
    }

    /// Open the database and load the controller.
    pub fn open_store(&self) -> Result<RecordStore<Database>> {
        let db = Database::open(&self.db_path)
            .with_context(|| format!("opening database {}", self.db_path.display()))?;
        tracing::debug!(db = %self.db_path.display(), "database opened");
        RecordStore::load(db).context("loading stored collections")
    }

    pub fn prompt(&self) -> TerminalPrompt {
        TerminalPrompt::new(self.assume_yes)
    }
}
