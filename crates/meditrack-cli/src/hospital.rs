//! # Hospital Subcommand
//!
//! - `list` — hospitals with their record counts
//! - `add` — register a hospital
//! - `delete` — remove a hospital (its records are kept)

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use meditrack_core::DeleteOutcome;

use crate::config::Config;
use crate::render::render_hospitals;

/// Arguments for the `meditrack hospital` subcommand.
#[derive(Args, Debug)]
pub struct HospitalArgs {
    #[command(subcommand)]
    pub command: HospitalCommand,
}

/// Hospital subcommands.
#[derive(Subcommand, Debug)]
pub enum HospitalCommand {
    /// List hospitals.
    List,

    /// Register a new hospital.
    Add {
        /// Hospital name.
        #[arg(long)]
        name: String,
        /// Location (optional).
        #[arg(long, default_value = "")]
        location: String,
    },

    /// Delete a hospital. Records that reference it are kept.
    Delete {
        /// Hospital identifier.
        id: String,
    },
}

/// Execute the hospital subcommand.
pub fn run_hospital(args: &HospitalArgs, config: &Config) -> Result<u8> {
    let mut store = config.open_store()?;

    match &args.command {
        HospitalCommand::List => {
            print!("{}", render_hospitals(store.hospitals(), store.records()));
        }

        HospitalCommand::Add { name, location } => {
            store.open_hospital_modal();
            if let Some(draft) = store.hospital_draft_mut() {
                draft.name = name.clone();
                draft.location = location.clone();
            }
            if let Some(hospital) = store.save_hospital()? {
                println!("Added hospital {} ({})", hospital.name, hospital.id);
            }
        }

        HospitalCommand::Delete { id } => match store.delete_hospital(id, &config.prompt())? {
            DeleteOutcome::Deleted => println!("Deleted hospital {id}"),
            DeleteOutcome::Declined => println!("Cancelled"),
            DeleteOutcome::NotFound => bail!("no hospital with id {id}"),
        },
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &tempfile::TempDir) -> Config {
        Config {
            db_path: dir.path().join("hospitals.db"),
            assume_yes: true,
        }
    }

    #[test]
    fn test_add_then_delete() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);

        let add = HospitalArgs {
            command: HospitalCommand::Add {
                name: "Harbor Clinic".into(),
                location: "Docklands".into(),
            },
        };
        assert_eq!(run_hospital(&add, &config).unwrap(), 0);

        let store = config.open_store().unwrap();
        assert_eq!(store.hospitals().len(), 4);

        let delete = HospitalArgs {
            command: HospitalCommand::Delete { id: "h3".into() },
        };
        run_hospital(&delete, &config).unwrap();
        assert_eq!(config.open_store().unwrap().hospitals().len(), 3);
    }

    #[test]
    fn test_blank_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let add = HospitalArgs {
            command: HospitalCommand::Add {
                name: " ".into(),
                location: String::new(),
            },
        };
        assert!(run_hospital(&add, &config(&dir)).is_err());
    }

    #[test]
    fn test_delete_unknown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let delete = HospitalArgs {
            command: HospitalCommand::Delete { id: "nope".into() },
        };
        assert!(run_hospital(&delete, &config(&dir)).is_err());
    }
}
