//! MediTrack Core Library
//!
//! Local-first patient-record manager for small clinics: hospitals, patient
//! visits recorded against them, and a filtered/sorted view over the visits.
//!
//! # Architecture
//!
//! ```text
//!   Front end (CLI / native app via FFI)
//!          │ intents: select, add, edit, quick-edit, delete, filter, sort, forms
//!          ▼
//!   ┌──────────────────────────────┐
//!   │   RecordStore (controller)   │── view() ──► compute_view(records, scope, filters, sort)
//!   └──────────────┬───────────────┘
//!                  │ write-through, whole collection, after every mutation
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │  kv_store (SQLite)           │  meditrack_hospitals / meditrack_records
//!   └──────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite key-value persistence, collection load/save, seed data
//! - [`models`]: Domain types (Hospital, PatientRecord, filters, sort)
//! - [`query`]: Pure view computation
//! - [`controller`]: Application state and mutations

pub mod controller;
pub mod db;
pub mod models;
pub mod query;

// Re-export commonly used types
pub use controller::{
    ControllerError, DeleteOutcome, HospitalModal, PreConfirmed, Prompt, RecordModal,
    RecordStore,
};
pub use db::{CollectionKey, Database, KeyValueStore};
pub use models::{
    is_iso_date, FilterPatch, FilterState, Hospital, HospitalDraft, HospitalSelector,
    PatientRecord, RecordDraft, RecordPatch, RecordStatus, SortField, SortOrder, SortSpec,
};
pub use query::compute_view;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MediTrackError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<db::DbError> for MediTrackError {
    fn from(e: db::DbError) -> Self {
        MediTrackError::DatabaseError(e.to_string())
    }
}

impl From<ControllerError> for MediTrackError {
    fn from(e: ControllerError) -> Self {
        match e {
            ControllerError::Validation { .. } => MediTrackError::ValidationError(e.to_string()),
            ControllerError::Database(e) => e.into(),
        }
    }
}

impl From<models::UnknownStatus> for MediTrackError {
    fn from(e: models::UnknownStatus) -> Self {
        MediTrackError::InvalidInput(e.to_string())
    }
}

impl From<models::UnknownSort> for MediTrackError {
    fn from(e: models::UnknownSort) -> Self {
        MediTrackError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for MediTrackError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MediTrackError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path and load its collections.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<MediTrackCore>, MediTrackError> {
    let db = Database::open(&path)?;
    MediTrackCore::wrap(db)
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<MediTrackCore>, MediTrackError> {
    let db = Database::open_in_memory()?;
    MediTrackCore::wrap(db)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe controller wrapper for FFI.
///
/// Deletes assume the host has already asked the user to confirm.
#[derive(uniffi::Object)]
pub struct MediTrackCore {
    store: Arc<Mutex<RecordStore<Database>>>,
}

impl MediTrackCore {
    fn wrap(db: Database) -> Result<Arc<Self>, MediTrackError> {
        let store = RecordStore::load(db)?;
        Ok(Arc::new(Self {
            store: Arc::new(Mutex::new(store)),
        }))
    }
}

#[uniffi::export]
impl MediTrackCore {
    // =========================================================================
    // View
    // =========================================================================

    /// Filtered, sorted records for the current scope.
    pub fn view(&self) -> Result<Vec<FfiPatientRecord>, MediTrackError> {
        let store = self.store.lock()?;
        Ok(store
            .view()
            .into_iter()
            .map(|r| {
                let label = store.hospital_label(&r.hospital_id).to_string();
                FfiPatientRecord::from_record(r, label)
            })
            .collect())
    }

    /// Current scope, filters, sort, and heading.
    pub fn view_state(&self) -> Result<FfiViewState, MediTrackError> {
        let store = self.store.lock()?;
        let filters = store.filters();
        let record_modal = store.record_modal();
        Ok(FfiViewState {
            selected_hospital: store.selected().to_string(),
            title: store.dashboard_title().to_string(),
            search_query: filters.search_query.clone(),
            start_date: filters.start_date.clone(),
            end_date: filters.end_date.clone(),
            sort_field: store.sort().field.to_string(),
            sort_order: store.sort().order.to_string(),
            visible_count: store.view().len() as u32,
            record_form_open: record_modal.is_open(),
            record_form_title: record_modal.title().map(str::to_string),
            editing_record_id: record_modal.editing().map(str::to_string),
            hospital_form_open: store.hospital_modal().is_open(),
        })
    }

    /// All hospitals in collection order.
    pub fn hospitals(&self) -> Result<Vec<FfiHospital>, MediTrackError> {
        let store = self.store.lock()?;
        Ok(store.hospitals().iter().cloned().map(Into::into).collect())
    }

    // =========================================================================
    // Scope, Filters, Sort
    // =========================================================================

    /// Select a hospital by ID, or `"all"`.
    pub fn select_hospital(&self, selector: String) -> Result<(), MediTrackError> {
        let mut store = self.store.lock()?;
        store.select_hospital(selector);
        Ok(())
    }

    /// Update filters; `None` leaves a filter unchanged. Date bounds must be
    /// empty or `YYYY-MM-DD`.
    pub fn set_filters(
        &self,
        search_query: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<(), MediTrackError> {
        let mut store = self.store.lock()?;
        store.set_filters(FilterPatch {
            search_query,
            hospital_id: None,
            start_date,
            end_date,
        })?;
        Ok(())
    }

    pub fn clear_filters(&self) -> Result<(), MediTrackError> {
        let mut store = self.store.lock()?;
        store.clear_filters();
        Ok(())
    }

    /// Sort by a column name; returns the resulting direction.
    pub fn set_sort(&self, field: String) -> Result<String, MediTrackError> {
        let field: SortField = field.parse()?;
        let mut store = self.store.lock()?;
        Ok(store.set_sort(field).order.to_string())
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Add a record; returns it with its new ID.
    pub fn add_record(&self, draft: FfiRecordDraft) -> Result<FfiPatientRecord, MediTrackError> {
        let draft: RecordDraft = draft.try_into()?;
        let mut store = self.store.lock()?;
        let record = store.add_record(draft)?;
        let label = store.hospital_label(&record.hospital_id).to_string();
        Ok(FfiPatientRecord::from_record(record, label))
    }

    /// Replace a record's fields. Returns false if the ID is unknown.
    pub fn update_record(&self, id: String, draft: FfiRecordDraft) -> Result<bool, MediTrackError> {
        let draft: RecordDraft = draft.try_into()?;
        let mut store = self.store.lock()?;
        Ok(store.update_record(&id, draft)?)
    }

    /// Set the next-visit date inline. Returns false if the ID is unknown.
    pub fn set_next_visit_date(&self, id: String, date: String) -> Result<bool, MediTrackError> {
        let mut store = self.store.lock()?;
        Ok(store.quick_update(&id, RecordPatch::next_visit_date(date))?)
    }

    /// Set the doctor's comments inline. Returns false if the ID is unknown.
    pub fn set_doctor_comments(&self, id: String, comments: String) -> Result<bool, MediTrackError> {
        let mut store = self.store.lock()?;
        Ok(store.quick_update(&id, RecordPatch::doctor_comments(comments))?)
    }

    /// Delete a record. Returns false if the ID is unknown.
    pub fn delete_record(&self, id: String) -> Result<bool, MediTrackError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_record(&id, &PreConfirmed)?.is_deleted())
    }

    // =========================================================================
    // Record Form
    // =========================================================================

    /// Open the record form pre-filled for a new visit.
    pub fn open_add_record(&self) -> Result<FfiRecordForm, MediTrackError> {
        let mut store = self.store.lock()?;
        let draft = store.open_add_record();
        Ok(FfiRecordForm {
            editing: None,
            title: store.record_modal().title().unwrap_or_default().to_string(),
            draft: FfiRecordDraft::from(&draft),
        })
    }

    /// Open the record form on a copy of record `id`. `None` if it does not exist.
    pub fn open_edit_record(&self, id: String) -> Result<Option<FfiRecordForm>, MediTrackError> {
        let mut store = self.store.lock()?;
        if !store.open_edit_record(&id) {
            return Ok(None);
        }
        Ok(FfiRecordForm::from_modal(store.record_modal()))
    }

    /// The open record form, if any.
    pub fn record_form(&self) -> Result<Option<FfiRecordForm>, MediTrackError> {
        let store = self.store.lock()?;
        Ok(FfiRecordForm::from_modal(store.record_modal()))
    }

    /// Replace the open form's contents. Returns false if no form is open.
    pub fn update_record_form(&self, draft: FfiRecordDraft) -> Result<bool, MediTrackError> {
        let draft: RecordDraft = draft.try_into()?;
        let mut store = self.store.lock()?;
        let Some(slot) = store.record_draft_mut() else {
            return Ok(false);
        };
        *slot = draft;
        Ok(true)
    }

    /// Submit the open record form.
    ///
    /// A validation failure leaves the form open and is returned as
    /// `ValidationError`. `None` if no form was open or the edited record is gone.
    pub fn save_record(&self) -> Result<Option<FfiPatientRecord>, MediTrackError> {
        let mut store = self.store.lock()?;
        let Some(record) = store.save_record(&PreConfirmed)? else {
            return Ok(None);
        };
        let label = store.hospital_label(&record.hospital_id).to_string();
        Ok(Some(FfiPatientRecord::from_record(record, label)))
    }

    /// Close the record form, discarding its draft.
    pub fn cancel_record(&self) -> Result<(), MediTrackError> {
        let mut store = self.store.lock()?;
        store.cancel_record();
        Ok(())
    }

    // =========================================================================
    // Hospital Operations
    // =========================================================================

    pub fn add_hospital(&self, name: String, location: String) -> Result<FfiHospital, MediTrackError> {
        let mut store = self.store.lock()?;
        let hospital = store.add_hospital(HospitalDraft::new(name, location))?;
        Ok(hospital.into())
    }

    /// Delete a hospital; its records are kept. Returns false if the ID is unknown.
    pub fn delete_hospital(&self, id: String) -> Result<bool, MediTrackError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_hospital(&id, &PreConfirmed)?.is_deleted())
    }

    // =========================================================================
    // Hospital Form
    // =========================================================================

    pub fn open_hospital_modal(&self) -> Result<(), MediTrackError> {
        let mut store = self.store.lock()?;
        store.open_hospital_modal();
        Ok(())
    }

    /// Set the hospital form's fields. Returns false if the form is closed.
    pub fn update_hospital_form(&self, name: String, location: String) -> Result<bool, MediTrackError> {
        let mut store = self.store.lock()?;
        let Some(slot) = store.hospital_draft_mut() else {
            return Ok(false);
        };
        *slot = HospitalDraft::new(name, location);
        Ok(true)
    }

    /// Submit the hospital form. `None` if it was not open.
    pub fn save_hospital(&self) -> Result<Option<FfiHospital>, MediTrackError> {
        let mut store = self.store.lock()?;
        Ok(store.save_hospital()?.map(Into::into))
    }

    pub fn close_hospital_modal(&self) -> Result<(), MediTrackError> {
        let mut store = self.store.lock()?;
        store.close_hospital_modal();
        Ok(())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe hospital.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHospital {
    pub id: String,
    pub name: String,
    pub location: String,
    pub color: String,
}

impl From<Hospital> for FfiHospital {
    fn from(hospital: Hospital) -> Self {
        Self {
            id: hospital.id,
            name: hospital.name,
            location: hospital.location,
            color: hospital.color,
        }
    }
}

/// FFI-safe patient record with its resolved hospital name.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientRecord {
    pub id: String,
    pub hospital_id: String,
    pub hospital_name: String,
    pub visit_date: String,
    pub patient_name: String,
    pub phone_number: String,
    pub diagnosis: String,
    pub clinical_findings: String,
    pub next_visit_date: String,
    pub doctor_comments: String,
    pub status: String,
}

impl FfiPatientRecord {
    fn from_record(record: PatientRecord, hospital_name: String) -> Self {
        Self {
            id: record.id,
            hospital_id: record.hospital_id,
            hospital_name,
            visit_date: record.visit_date,
            patient_name: record.patient_name,
            phone_number: record.phone_number,
            diagnosis: record.diagnosis,
            clinical_findings: record.clinical_findings,
            next_visit_date: record.next_visit_date,
            doctor_comments: record.doctor_comments,
            status: record.status.to_string(),
        }
    }
}

/// FFI-safe record form contents.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecordDraft {
    pub hospital_id: String,
    pub visit_date: String,
    pub patient_name: String,
    pub phone_number: String,
    pub diagnosis: String,
    pub clinical_findings: String,
    pub next_visit_date: String,
    pub doctor_comments: String,
    pub status: String,
}

impl From<&RecordDraft> for FfiRecordDraft {
    fn from(draft: &RecordDraft) -> Self {
        Self {
            hospital_id: draft.hospital_id.clone(),
            visit_date: draft.visit_date.clone(),
            patient_name: draft.patient_name.clone(),
            phone_number: draft.phone_number.clone(),
            diagnosis: draft.diagnosis.clone(),
            clinical_findings: draft.clinical_findings.clone(),
            next_visit_date: draft.next_visit_date.clone(),
            doctor_comments: draft.doctor_comments.clone(),
            status: draft.status.to_string(),
        }
    }
}

impl TryFrom<FfiRecordDraft> for RecordDraft {
    type Error = MediTrackError;

    fn try_from(draft: FfiRecordDraft) -> Result<Self, Self::Error> {
        let status = if draft.status.trim().is_empty() {
            RecordStatus::default()
        } else {
            draft.status.parse()?
        };
        Ok(RecordDraft {
            hospital_id: draft.hospital_id,
            visit_date: draft.visit_date,
            patient_name: draft.patient_name,
            phone_number: draft.phone_number,
            diagnosis: draft.diagnosis,
            clinical_findings: draft.clinical_findings,
            next_visit_date: draft.next_visit_date,
            doctor_comments: draft.doctor_comments,
            status,
        })
    }
}

/// FFI-safe open record form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecordForm {
    /// ID of the record being edited; `None` for a new record
    pub editing: Option<String>,
    pub title: String,
    pub draft: FfiRecordDraft,
}

impl FfiRecordForm {
    fn from_modal(modal: &RecordModal) -> Option<Self> {
        let draft = modal.draft()?;
        Some(Self {
            editing: modal.editing().map(str::to_string),
            title: modal.title().unwrap_or_default().to_string(),
            draft: draft.into(),
        })
    }
}

/// FFI-safe snapshot of the non-collection state.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiViewState {
    pub selected_hospital: String,
    pub title: String,
    pub search_query: String,
    pub start_date: String,
    pub end_date: String,
    pub sort_field: String,
    pub sort_order: String,
    pub visible_count: u32,
    pub record_form_open: bool,
    pub record_form_title: Option<String>,
    pub editing_record_id: Option<String>,
    pub hospital_form_open: bool,
}
