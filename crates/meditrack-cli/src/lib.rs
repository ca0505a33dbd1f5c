//! # meditrack-cli — terminal front end
//!
//! Forwards user intents to the [`meditrack_core::RecordStore`] controller and
//! prints the resulting view.
//!
//! ## Subcommands
//!
//! - `hospital` — list, add, and delete hospitals
//! - `record` — list (filter/sort), add, edit, inline edits, delete
//! - `reset` — restore the built-in seed data
//!
//! Handlers return an exit code; argument parsing lives in `main.rs`.

pub mod config;
pub mod hospital;
pub mod prompt;
pub mod record;
pub mod render;
pub mod reset;
