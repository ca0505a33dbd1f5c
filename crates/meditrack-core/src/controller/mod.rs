//! Application state controller.
//!
//! [`RecordStore`] owns the authoritative collections plus the selection,
//! filter, sort, and modal state. Every mutation is applied in memory and
//! then written through to the backing [`KeyValueStore`] as a whole
//! collection before the call returns.

mod modal;
mod prompt;

pub use modal::*;
pub use prompt::*;

use thiserror::Error;

use crate::db::{self, DbError, KeyValueStore};
use crate::models::{
    FilterPatch, FilterState, Hospital, HospitalDraft, HospitalSelector, PatientRecord,
    RecordDraft, RecordPatch, RecordStatus, SortField, SortSpec,
};
use crate::query;

/// Controller errors.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Blank required fields and malformed dates, by wire name
    #[error("{}", describe_validation(.missing, .invalid))]
    Validation {
        missing: Vec<&'static str>,
        invalid: Vec<&'static str>,
    },

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Result of a confirmed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user answered no; nothing changed
    Declined,
    /// No entity with that ID; nothing changed
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

/// In-memory state with write-through persistence.
pub struct RecordStore<S: KeyValueStore> {
    store: S,
    hospitals: Vec<Hospital>,
    records: Vec<PatientRecord>,
    selected: HospitalSelector,
    filters: FilterState,
    sort: SortSpec,
    record_modal: RecordModal,
    hospital_modal: HospitalModal,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load both collections (or seed data) from `store`.
    pub fn load(store: S) -> ControllerResult<Self> {
        let hospitals = db::load_hospitals(&store)?;
        let records = db::load_records(&store)?;
        tracing::debug!(
            hospitals = hospitals.len(),
            records = records.len(),
            "record store loaded"
        );

        Ok(Self {
            store,
            hospitals,
            records,
            selected: HospitalSelector::All,
            filters: FilterState::default(),
            sort: SortSpec::default(),
            record_modal: RecordModal::Closed,
            hospital_modal: HospitalModal::Closed,
        })
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// All records in collection order (newest insert first).
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn record(&self, id: &str) -> Option<&PatientRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn selected(&self) -> &HospitalSelector {
        &self.selected
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn record_modal(&self) -> &RecordModal {
        &self.record_modal
    }

    pub fn hospital_modal(&self) -> &HospitalModal {
        &self.hospital_modal
    }

    /// Filtered, sorted records for the current scope. Computed on each call.
    pub fn view(&self) -> Vec<PatientRecord> {
        query::compute_view(&self.records, &self.selected, &self.filters, self.sort)
    }

    /// Display name of a hospital reference, `Unknown` if it no longer exists.
    pub fn hospital_label(&self, hospital_id: &str) -> &str {
        query::hospital_label(&self.hospitals, hospital_id)
    }

    pub fn dashboard_title(&self) -> &str {
        query::dashboard_title(&self.hospitals, &self.selected)
    }

    // =========================================================================
    // Scope, Filters, Sort
    // =========================================================================

    /// Change the active hospital scope.
    pub fn select_hospital(&mut self, selector: impl Into<HospitalSelector>) {
        self.selected = selector.into();
    }

    /// Merge a partial filter update. Malformed date bounds reject the whole
    /// update.
    pub fn set_filters(&mut self, patch: FilterPatch) -> ControllerResult<()> {
        validate(Vec::new(), patch.invalid_fields())?;
        self.filters.apply(patch);
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// Sort by `field`, flipping direction if it is already active.
    pub fn set_sort(&mut self, field: SortField) -> SortSpec {
        self.sort = self.sort.toggled_by(field);
        self.sort
    }

    /// Set column and direction outright.
    pub fn sort_by(&mut self, spec: SortSpec) {
        self.sort = spec;
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Create a record from `draft` and put it at the front of the collection.
    pub fn add_record(&mut self, draft: RecordDraft) -> ControllerResult<PatientRecord> {
        validate_draft(&draft)?;

        let record = draft.into_record(self.fresh_record_id());
        self.records.insert(0, record.clone());
        self.persist_records()?;

        tracing::info!(record_id = %record.id, hospital_id = %record.hospital_id, "record added");
        Ok(record)
    }

    /// Replace every field of record `id` except the ID.
    ///
    /// Returns `false` without writing if no such record exists, before the
    /// draft is validated.
    pub fn update_record(&mut self, id: &str, draft: RecordDraft) -> ControllerResult<bool> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            tracing::debug!(record_id = id, "update skipped, record not found");
            return Ok(false);
        };
        validate_draft(&draft)?;

        self.records[index] = draft.into_record(id.to_string());
        self.persist_records()?;
        Ok(true)
    }

    /// Merge `patch` into record `id`, leaving every other field alone.
    ///
    /// Returns `false` without writing if no such record exists.
    pub fn quick_update(&mut self, id: &str, patch: RecordPatch) -> ControllerResult<bool> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            tracing::debug!(record_id = id, "quick update skipped, record not found");
            return Ok(false);
        };
        validate(patch.missing_fields(), patch.invalid_fields())?;

        patch.apply_to(&mut self.records[index]);
        self.persist_records()?;
        Ok(true)
    }

    /// Remove record `id` after the user confirms.
    pub fn delete_record(&mut self, id: &str, prompt: &dyn Prompt) -> ControllerResult<DeleteOutcome> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        if !prompt.confirm(CONFIRM_DELETE_RECORD) {
            return Ok(DeleteOutcome::Declined);
        }

        self.records.remove(index);
        self.persist_records()?;

        tracing::info!(record_id = id, "record deleted");
        Ok(DeleteOutcome::Deleted)
    }

    // =========================================================================
    // Record Form
    // =========================================================================

    /// Open the form on a blank draft: today's date, the scoped hospital (or
    /// the first one), status active. Returns the pre-filled draft.
    pub fn open_add_record(&mut self) -> RecordDraft {
        let hospital_id = match &self.selected {
            HospitalSelector::Hospital(id) => id.clone(),
            HospitalSelector::All => self
                .hospitals
                .first()
                .map(|h| h.id.clone())
                .unwrap_or_default(),
        };

        let draft = RecordDraft {
            hospital_id,
            visit_date: today(),
            status: RecordStatus::Active,
            ..RecordDraft::default()
        };
        self.record_modal = RecordModal::Open {
            editing: None,
            draft: draft.clone(),
        };
        draft
    }

    /// Open the form on a copy of record `id`. Returns `false` if it does not exist.
    pub fn open_edit_record(&mut self, id: &str) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };
        let draft = RecordDraft::from(record);
        self.record_modal = RecordModal::Open {
            editing: Some(id.to_string()),
            draft,
        };
        true
    }

    /// Draft of the open record form.
    pub fn record_draft_mut(&mut self) -> Option<&mut RecordDraft> {
        self.record_modal.draft_mut()
    }

    /// Submit the open record form.
    ///
    /// On missing fields or malformed dates the user is notified, the form
    /// stays open, and the validation error is returned. On success the form closes. Returns the
    /// saved record, or `None` if no form was open or the edited record has
    /// since disappeared.
    pub fn save_record(&mut self, prompt: &dyn Prompt) -> ControllerResult<Option<PatientRecord>> {
        let (editing, draft) = match &self.record_modal {
            RecordModal::Open { editing, draft } => (editing.clone(), draft.clone()),
            RecordModal::Closed => return Ok(None),
        };

        if let Err(e) = validate_draft(&draft) {
            if let ControllerError::Validation { missing, .. } = &e {
                prompt.notify(if missing.is_empty() {
                    NOTICE_INVALID_DATES
                } else {
                    NOTICE_REQUIRED_FIELDS
                });
            }
            return Err(e);
        }

        let saved = match editing {
            Some(id) => {
                if self.update_record(&id, draft)? {
                    self.record(&id).cloned()
                } else {
                    None
                }
            }
            None => Some(self.add_record(draft)?),
        };

        self.record_modal = RecordModal::Closed;
        Ok(saved)
    }

    /// Close the record form, discarding the draft.
    pub fn cancel_record(&mut self) {
        self.record_modal = RecordModal::Closed;
    }

    // =========================================================================
    // Hospital Operations
    // =========================================================================

    /// Create a hospital and append it to the collection.
    pub fn add_hospital(&mut self, draft: HospitalDraft) -> ControllerResult<Hospital> {
        validate(draft.missing_fields(), Vec::new())?;

        let hospital = Hospital::new(draft);
        self.hospitals.push(hospital.clone());
        self.persist_hospitals()?;

        tracing::info!(hospital_id = %hospital.id, name = %hospital.name, "hospital added");
        Ok(hospital)
    }

    /// Remove hospital `id` after the user confirms. Records that reference it
    /// are kept as-is. Resets the scope to all hospitals if it was selected.
    pub fn delete_hospital(&mut self, id: &str, prompt: &dyn Prompt) -> ControllerResult<DeleteOutcome> {
        let Some(index) = self.hospitals.iter().position(|h| h.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        if !prompt.confirm(CONFIRM_DELETE_HOSPITAL) {
            return Ok(DeleteOutcome::Declined);
        }

        self.hospitals.remove(index);
        if self.selected.hospital_id() == Some(id) {
            self.selected = HospitalSelector::All;
        }
        self.persist_hospitals()?;

        let orphaned = self.records.iter().filter(|r| r.hospital_id == id).count();
        tracing::info!(hospital_id = id, orphaned, "hospital deleted");
        Ok(DeleteOutcome::Deleted)
    }

    // =========================================================================
    // Hospital Form
    // =========================================================================

    pub fn open_hospital_modal(&mut self) {
        self.hospital_modal = HospitalModal::Open {
            draft: HospitalDraft::default(),
        };
    }

    pub fn hospital_draft_mut(&mut self) -> Option<&mut HospitalDraft> {
        self.hospital_modal.draft_mut()
    }

    /// Submit the hospital form. On success the form closes.
    pub fn save_hospital(&mut self) -> ControllerResult<Option<Hospital>> {
        let draft = match &self.hospital_modal {
            HospitalModal::Open { draft } => draft.clone(),
            HospitalModal::Closed => return Ok(None),
        };

        let hospital = self.add_hospital(draft)?;
        self.hospital_modal = HospitalModal::Closed;
        Ok(Some(hospital))
    }

    pub fn close_hospital_modal(&mut self) {
        self.hospital_modal = HospitalModal::Closed;
    }

    // =========================================================================
    // Write-through
    // =========================================================================

    fn persist_records(&self) -> ControllerResult<()> {
        db::save_records(&self.store, &self.records)?;
        Ok(())
    }

    fn persist_hospitals(&self) -> ControllerResult<()> {
        db::save_hospitals(&self.store, &self.hospitals)?;
        Ok(())
    }

    fn fresh_record_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.record(&id).is_none() {
                return id;
            }
        }
    }
}

fn validate(missing: Vec<&'static str>, invalid: Vec<&'static str>) -> ControllerResult<()> {
    if missing.is_empty() && invalid.is_empty() {
        Ok(())
    } else {
        Err(ControllerError::Validation { missing, invalid })
    }
}

fn validate_draft(draft: &RecordDraft) -> ControllerResult<()> {
    validate(draft.missing_fields(), draft.invalid_fields())
}

fn describe_validation(missing: &[&str], invalid: &[&str]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("Missing required fields: {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        parts.push(format!("Dates must be YYYY-MM-DD: {}", invalid.join(", ")));
    }
    parts.join("; ")
}

/// Today's date as `YYYY-MM-DD` (UTC).
fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{load_hospitals, load_records, Database};
    use std::cell::RefCell;

    /// Scripted prompt that records what it was asked.
    struct ScriptedPrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
        notices: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
                notices: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn setup_store() -> RecordStore<Database> {
        RecordStore::load(Database::open_in_memory().unwrap()).unwrap()
    }

    fn draft(name: &str, hospital_id: &str, visit_date: &str) -> RecordDraft {
        RecordDraft {
            patient_name: name.into(),
            hospital_id: hospital_id.into(),
            visit_date: visit_date.into(),
            ..RecordDraft::default()
        }
    }

    #[test]
    fn test_load_uses_seed() {
        let store = setup_store();
        assert_eq!(store.hospitals().len(), 3);
        assert_eq!(store.records().len(), 4);
        assert!(store.selected().is_all());
        assert_eq!(store.sort(), SortSpec::default());
    }

    #[test]
    fn test_add_record_prepends_and_persists() {
        let mut store = setup_store();
        let record = store.add_record(draft("Ann Lee", "h2", "2024-02-01")).unwrap();

        assert_eq!(store.records()[0], record);
        assert_eq!(store.records().len(), 5);
        assert_eq!(load_records(store.store()).unwrap(), store.records());
    }

    #[test]
    fn test_add_record_rejects_blank_name() {
        let mut store = setup_store();
        let before = store.records().to_vec();

        let err = store.add_record(draft("  ", "h1", "2024-02-01")).unwrap_err();
        match err {
            ControllerError::Validation { missing, invalid } => {
                assert_eq!(missing, vec!["patientName"]);
                assert!(invalid.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_add_record_rejects_unpadded_date() {
        let mut store = setup_store();

        let err = store.add_record(draft("Ann Lee", "h2", "2023-9-5")).unwrap_err();
        match err {
            ControllerError::Validation { missing, invalid } => {
                assert!(missing.is_empty());
                assert_eq!(invalid, vec!["visitDate"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.records().len(), 4);
        assert_eq!(load_records(store.store()).unwrap().len(), 4);
    }

    #[test]
    fn test_add_record_rejects_malformed_next_visit() {
        let mut store = setup_store();
        let mut bad = draft("Ann Lee", "h2", "2024-02-01");
        bad.next_visit_date = "next week".into();

        let err = store.add_record(bad).unwrap_err();
        assert_eq!(err.to_string(), "Dates must be YYYY-MM-DD: nextVisitDate");
        assert_eq!(store.records().len(), 4);
    }

    #[test]
    fn test_update_record_keeps_id() {
        let mut store = setup_store();
        let mut replacement = RecordDraft::from(store.record("r3").unwrap());
        replacement.status = RecordStatus::FollowUp;
        replacement.next_visit_date = "2023-11-15".into();

        assert!(store.update_record("r3", replacement).unwrap());

        let updated = store.record("r3").unwrap();
        assert_eq!(updated.status, RecordStatus::FollowUp);
        assert_eq!(updated.next_visit_date, "2023-11-15");
        assert_eq!(load_records(store.store()).unwrap(), store.records());
    }

    #[test]
    fn test_update_missing_record_is_noop() {
        let mut store = setup_store();
        let before = store.records().to_vec();

        assert!(!store.update_record("nope", draft("X", "h1", "2024-01-01")).unwrap());
        assert!(!store.quick_update("nope", RecordPatch::doctor_comments("x")).unwrap());
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_update_missing_record_ignores_blank_draft() {
        let mut store = setup_store();

        assert!(!store.update_record("nope", RecordDraft::default()).unwrap());
        assert!(!store.quick_update("nope", RecordPatch::next_visit_date("bad")).unwrap());
        assert!(matches!(
            store.update_record("r1", RecordDraft::default()),
            Err(ControllerError::Validation { .. })
        ));
    }

    #[test]
    fn test_quick_update_rejects_malformed_date() {
        let mut store = setup_store();

        assert!(matches!(
            store.quick_update("r3", RecordPatch::next_visit_date("2023-11-5")),
            Err(ControllerError::Validation { .. })
        ));
        assert_eq!(store.record("r3").unwrap().next_visit_date, "");

        assert!(store.quick_update("r1", RecordPatch::next_visit_date("")).unwrap());
        assert_eq!(store.record("r1").unwrap().next_visit_date, "");
    }

    #[test]
    fn test_quick_update_changes_one_field() {
        let mut store = setup_store();
        let before = store.records().to_vec();

        assert!(store.quick_update("r2", RecordPatch::doctor_comments("x")).unwrap());

        for (old, new) in before.iter().zip(store.records()) {
            if old.id == "r2" {
                assert_eq!(new.doctor_comments, "x");
                assert_eq!(
                    PatientRecord {
                        doctor_comments: old.doctor_comments.clone(),
                        ..new.clone()
                    },
                    *old
                );
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_delete_record_requires_confirmation() {
        let mut store = setup_store();

        let declined = ScriptedPrompt::answering(false);
        assert_eq!(store.delete_record("r1", &declined).unwrap(), DeleteOutcome::Declined);
        assert_eq!(store.records().len(), 4);
        assert_eq!(*declined.asked.borrow(), vec![CONFIRM_DELETE_RECORD.to_string()]);

        let accepted = ScriptedPrompt::answering(true);
        assert_eq!(store.delete_record("r1", &accepted).unwrap(), DeleteOutcome::Deleted);
        assert!(store.record("r1").is_none());
        assert_eq!(load_records(store.store()).unwrap().len(), 3);
    }

    #[test]
    fn test_delete_missing_record_does_not_prompt() {
        let mut store = setup_store();
        let prompt = ScriptedPrompt::answering(true);

        assert_eq!(store.delete_record("nope", &prompt).unwrap(), DeleteOutcome::NotFound);
        assert!(prompt.asked.borrow().is_empty());
    }

    #[test]
    fn test_add_hospital_appends_with_default_color() {
        let mut store = setup_store();
        let hospital = store.add_hospital(HospitalDraft::new("Lakeside", "")).unwrap();

        assert_eq!(store.hospitals().last(), Some(&hospital));
        assert_eq!(hospital.color, crate::models::DEFAULT_HOSPITAL_COLOR);
        assert_eq!(load_hospitals(store.store()).unwrap().len(), 4);
    }

    #[test]
    fn test_add_hospital_rejects_blank_name() {
        let mut store = setup_store();
        assert!(matches!(
            store.add_hospital(HospitalDraft::new("", "Nowhere")),
            Err(ControllerError::Validation { .. })
        ));
        assert_eq!(store.hospitals().len(), 3);
    }

    #[test]
    fn test_delete_selected_hospital_resets_scope_and_orphans_records() {
        let mut store = setup_store();
        store.select_hospital("h1");

        let outcome = store.delete_hospital("h1", &PreConfirmed).unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(store.selected().is_all());
        assert_eq!(store.records().len(), 4);
        assert_eq!(store.hospital_label("h1"), query::UNKNOWN_HOSPITAL);
        assert_eq!(load_hospitals(store.store()).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_other_hospital_keeps_scope() {
        let mut store = setup_store();
        store.select_hospital("h1");

        store.delete_hospital("h2", &PreConfirmed).unwrap();
        assert_eq!(store.selected(), &HospitalSelector::hospital("h1"));
    }

    #[test]
    fn test_declined_hospital_delete() {
        let mut store = setup_store();
        let prompt = ScriptedPrompt::answering(false);

        assert_eq!(store.delete_hospital("h3", &prompt).unwrap(), DeleteOutcome::Declined);
        assert_eq!(store.hospitals().len(), 3);
        assert_eq!(*prompt.asked.borrow(), vec![CONFIRM_DELETE_HOSPITAL.to_string()]);
    }

    #[test]
    fn test_set_sort_toggles() {
        let mut store = setup_store();
        assert_eq!(store.set_sort(SortField::VisitDate).order, crate::models::SortOrder::Asc);

        let spec = store.set_sort(SortField::PatientName);
        assert_eq!(spec, SortSpec::new(SortField::PatientName, crate::models::SortOrder::Desc));
    }

    #[test]
    fn test_filters_and_clear() {
        let mut store = setup_store();
        store.set_filters(FilterPatch::search("smith")).unwrap();
        assert_eq!(store.view().len(), 1);

        store.clear_filters();
        assert!(store.filters().is_cleared());
        assert_eq!(store.view().len(), 4);
    }

    #[test]
    fn test_malformed_filter_bounds_are_rejected() {
        let mut store = setup_store();
        store.set_filters(FilterPatch::date_range("2023-10-21", "")).unwrap();

        let err = store
            .set_filters(FilterPatch::date_range("2023-9-1", "2023-10-31"))
            .unwrap_err();
        assert!(matches!(err, ControllerError::Validation { ref invalid, .. } if invalid == &vec!["startDate"]));
        assert_eq!(store.filters().start_date, "2023-10-21");
        assert_eq!(store.filters().end_date, "");
    }

    #[test]
    fn test_add_form_prefills_scope() {
        let mut store = setup_store();
        store.open_add_record();
        let draft = store.record_modal().draft().unwrap();
        assert_eq!(draft.hospital_id, "h1");
        assert_eq!(draft.visit_date, today());
        assert_eq!(draft.status, RecordStatus::Active);

        store.select_hospital("h3");
        store.open_add_record();
        assert_eq!(store.record_modal().draft().unwrap().hospital_id, "h3");
    }

    #[test]
    fn test_save_form_with_missing_fields_notifies_and_stays_open() {
        let mut store = setup_store();
        let prompt = ScriptedPrompt::answering(true);
        store.open_add_record();

        assert!(store.save_record(&prompt).is_err());
        assert!(store.record_modal().is_open());
        assert_eq!(*prompt.notices.borrow(), vec![NOTICE_REQUIRED_FIELDS.to_string()]);
        assert_eq!(store.records().len(), 4);
    }

    #[test]
    fn test_save_form_with_malformed_date_notifies_and_stays_open() {
        let mut store = setup_store();
        let prompt = ScriptedPrompt::answering(true);
        store.open_add_record();
        let form = store.record_draft_mut().unwrap();
        form.patient_name = "Ann Lee".into();
        form.visit_date = "2023-9-5".into();

        assert!(store.save_record(&prompt).is_err());
        assert!(store.record_modal().is_open());
        assert_eq!(*prompt.notices.borrow(), vec![NOTICE_INVALID_DATES.to_string()]);
        assert_eq!(store.records().len(), 4);
    }

    #[test]
    fn test_save_new_record_from_form() {
        let mut store = setup_store();
        store.open_add_record();
        store.record_draft_mut().unwrap().patient_name = "Ann Lee".into();

        let saved = store.save_record(&PreConfirmed).unwrap().unwrap();

        assert_eq!(saved.patient_name, "Ann Lee");
        assert!(!store.record_modal().is_open());
        assert_eq!(store.records()[0].id, saved.id);
    }

    #[test]
    fn test_edit_form_round_trip() {
        let mut store = setup_store();
        assert!(store.open_edit_record("r4"));
        assert_eq!(store.record_modal().editing(), Some("r4"));

        store.record_draft_mut().unwrap().diagnosis = "Cluster headache".into();
        let saved = store.save_record(&PreConfirmed).unwrap().unwrap();

        assert_eq!(saved.id, "r4");
        assert_eq!(store.record("r4").unwrap().diagnosis, "Cluster headache");
        assert_eq!(store.records().len(), 4);
    }

    #[test]
    fn test_cancel_form_discards_draft() {
        let mut store = setup_store();
        store.open_edit_record("r1");
        store.record_draft_mut().unwrap().patient_name = "Changed".into();
        store.cancel_record();

        assert!(!store.record_modal().is_open());
        assert_eq!(store.record("r1").unwrap().patient_name, "John Doe");
        assert!(!store.open_edit_record("nope"));
    }

    #[test]
    fn test_hospital_form() {
        let mut store = setup_store();
        assert_eq!(store.save_hospital().unwrap(), None);

        store.open_hospital_modal();
        store.hospital_draft_mut().unwrap().name = "Harbor Clinic".into();
        let hospital = store.save_hospital().unwrap().unwrap();

        assert_eq!(hospital.name, "Harbor Clinic");
        assert!(!store.hospital_modal().is_open());
        assert_eq!(store.hospitals().len(), 4);
    }
}
