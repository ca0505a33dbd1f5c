//! # Record Subcommand
//!
//! - `list` — filtered, sorted view of patient records
//! - `add` — record a visit
//! - `edit` — replace a record's fields (unspecified fields keep their value)
//! - `set-next-visit` / `comment` — inline edits of a single field
//! - `delete` — remove a record

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use meditrack_core::{
    is_iso_date, Database, DeleteOutcome, FilterPatch, HospitalSelector, RecordDraft, RecordPatch,
    RecordStatus, RecordStore, SortField, SortOrder, SortSpec,
};

use crate::config::Config;
use crate::render::render_view;

/// Arguments for the `meditrack record` subcommand.
#[derive(Args, Debug)]
pub struct RecordArgs {
    #[command(subcommand)]
    pub command: RecordCommand,
}

/// Record subcommands.
#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Show records for a hospital (or all), filtered and sorted.
    List(ListArgs),

    /// Record a new patient visit.
    ///
    /// Hospital defaults to the first registered one, visit date to today.
    Add(RecordFields),

    /// Edit an existing record.
    Edit {
        /// Record identifier.
        id: String,
        #[command(flatten)]
        fields: RecordFields,
    },

    /// Set or clear the next visit date.
    SetNextVisit {
        /// Record identifier.
        id: String,
        /// Date as YYYY-MM-DD; empty clears it.
        #[arg(value_parser = parse_optional_date)]
        date: String,
    },

    /// Replace the doctor's comments.
    Comment {
        /// Record identifier.
        id: String,
        /// New comment text.
        text: String,
    },

    /// Delete a record.
    Delete {
        /// Record identifier.
        id: String,
    },
}

/// View options for `record list`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Hospital identifier, or "all".
    #[arg(long, default_value = "all")]
    pub hospital: String,
    /// Search name, phone, and diagnosis.
    #[arg(long)]
    pub search: Option<String>,
    /// Earliest visit date (inclusive), YYYY-MM-DD.
    #[arg(long, value_parser = parse_optional_date)]
    pub from: Option<String>,
    /// Latest visit date (inclusive), YYYY-MM-DD.
    #[arg(long, value_parser = parse_optional_date)]
    pub to: Option<String>,
    /// Sort column: visitDate, patientName, nextVisitDate.
    #[arg(long)]
    pub sort: Option<SortField>,
    /// Sort direction: asc or desc.
    #[arg(long)]
    pub order: Option<SortOrder>,
}

/// Record form fields. Unset fields keep the form's current value.
#[derive(Args, Debug, Default, Clone)]
pub struct RecordFields {
    /// Hospital identifier.
    #[arg(long)]
    pub hospital: Option<String>,
    /// Visit date as YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,
    /// Patient name.
    #[arg(long)]
    pub name: Option<String>,
    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// Diagnosis.
    #[arg(long)]
    pub diagnosis: Option<String>,
    /// Clinical findings.
    #[arg(long)]
    pub findings: Option<String>,
    /// Next visit date as YYYY-MM-DD; empty clears it.
    #[arg(long, value_parser = parse_optional_date)]
    pub next_visit: Option<String>,
    /// Doctor's comments.
    #[arg(long)]
    pub comments: Option<String>,
    /// Status: active, follow-up, completed.
    #[arg(long)]
    pub status: Option<RecordStatus>,
}

impl RecordFields {
    fn apply_to(&self, draft: &mut RecordDraft) {
        fn set(slot: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(&mut draft.hospital_id, &self.hospital);
        set(&mut draft.visit_date, &self.date);
        set(&mut draft.patient_name, &self.name);
        set(&mut draft.phone_number, &self.phone);
        set(&mut draft.diagnosis, &self.diagnosis);
        set(&mut draft.clinical_findings, &self.findings);
        set(&mut draft.next_visit_date, &self.next_visit);
        set(&mut draft.doctor_comments, &self.comments);
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

/// Execute the record subcommand.
pub fn run_record(args: &RecordArgs, config: &Config) -> Result<u8> {
    let mut store = config.open_store()?;

    match &args.command {
        RecordCommand::List(list) => {
            apply_view_options(&mut store, list)?;
            print!("{}", render_view(&store, &store.view()));
        }

        RecordCommand::Add(fields) => {
            if let Some(hospital) = &fields.hospital {
                store.select_hospital(hospital.as_str());
            }
            store.open_add_record();
            submit_form(&mut store, fields, config)?;
        }

        RecordCommand::Edit { id, fields } => {
            if !store.open_edit_record(id) {
                bail!("no record with id {id}");
            }
            submit_form(&mut store, fields, config)?;
        }

        RecordCommand::SetNextVisit { id, date } => {
            quick_update(&mut store, id, RecordPatch::next_visit_date(date.as_str()))?;
        }

        RecordCommand::Comment { id, text } => {
            quick_update(&mut store, id, RecordPatch::doctor_comments(text.as_str()))?;
        }

        RecordCommand::Delete { id } => match store.delete_record(id, &config.prompt())? {
            DeleteOutcome::Deleted => println!("Deleted record {id}"),
            DeleteOutcome::Declined => println!("Cancelled"),
            DeleteOutcome::NotFound => bail!("no record with id {id}"),
        },
    }

    Ok(0)
}

/// Push list options into the controller's scope, filter, and sort state.
pub fn apply_view_options(store: &mut RecordStore<Database>, list: &ListArgs) -> Result<()> {
    store.select_hospital(HospitalSelector::from(list.hospital.as_str()));
    store.set_filters(FilterPatch {
        search_query: list.search.clone(),
        hospital_id: None,
        start_date: list.from.clone(),
        end_date: list.to.clone(),
    })?;

    let current = store.sort();
    store.sort_by(SortSpec::new(
        list.sort.unwrap_or(current.field),
        list.order.unwrap_or(current.order),
    ));
    Ok(())
}

fn parse_date(value: &str) -> Result<String, String> {
    if is_iso_date(value) {
        Ok(value.to_string())
    } else {
        Err(format!("expected a date as YYYY-MM-DD, got {value:?}"))
    }
}

fn parse_optional_date(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Ok(String::new())
    } else {
        parse_date(value)
    }
}

fn submit_form(store: &mut RecordStore<Database>, fields: &RecordFields, config: &Config) -> Result<()> {
    if let Some(draft) = store.record_draft_mut() {
        fields.apply_to(draft);
    }
    if let Some(record) = store.save_record(&config.prompt())? {
        println!("Saved record {} for {}", record.id, record.patient_name);
    }
    Ok(())
}

fn quick_update(store: &mut RecordStore<Database>, id: &str, patch: RecordPatch) -> Result<()> {
    if !store.quick_update(id, patch)? {
        bail!("no record with id {id}");
    }
    println!("Updated record {id}");
    Ok(())
}
