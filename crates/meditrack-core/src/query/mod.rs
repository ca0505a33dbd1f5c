//! Record view computation.
//!
//! Pipeline: hospital scope → text search → visit-date range → stable sort.
//! Every call recomputes from scratch; inputs are never mutated.

use std::cmp::Ordering;

use crate::models::{
    FilterState, Hospital, HospitalSelector, PatientRecord, SortOrder, SortSpec,
};

/// Label shown for records whose hospital no longer exists.
pub const UNKNOWN_HOSPITAL: &str = "Unknown";

/// Compute the filtered, sorted records for display.
pub fn compute_view(
    records: &[PatientRecord],
    selector: &HospitalSelector,
    filters: &FilterState,
    sort: SortSpec,
) -> Vec<PatientRecord> {
    let needle = filters.search_query.to_lowercase();

    let mut view: Vec<PatientRecord> = records
        .iter()
        .filter(|r| matches_selector(r, selector))
        .filter(|r| matches_search(r, &needle))
        .filter(|r| matches_date_range(r, &filters.start_date, &filters.end_date))
        .cloned()
        .collect();

    // sort_by is stable: equal keys keep their collection order
    view.sort_by(|a, b| compare(a, b, sort));
    view
}

/// Hospital scope check.
pub fn matches_selector(record: &PatientRecord, selector: &HospitalSelector) -> bool {
    selector.includes(&record.hospital_id)
}

/// Case-insensitive substring match over name, phone, and diagnosis.
/// `needle` must already be lowercased; empty matches everything.
pub fn matches_search(record: &PatientRecord, needle: &str) -> bool {
    needle.is_empty()
        || [&record.patient_name, &record.phone_number, &record.diagnosis]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Inclusive visit-date bounds. Empty bounds are open.
pub fn matches_date_range(record: &PatientRecord, start: &str, end: &str) -> bool {
    // YYYY-MM-DD compares chronologically as plain strings
    (start.is_empty() || record.visit_date.as_str() >= start)
        && (end.is_empty() || record.visit_date.as_str() <= end)
}

fn compare(a: &PatientRecord, b: &PatientRecord, sort: SortSpec) -> Ordering {
    let ordering = sort.field.key(a).cmp(sort.field.key(b));
    match sort.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Resolve a record's hospital reference to a display name.
pub fn hospital_label<'a>(hospitals: &'a [Hospital], hospital_id: &str) -> &'a str {
    hospitals
        .iter()
        .find(|h| h.id == hospital_id)
        .map(|h| h.name.as_str())
        .unwrap_or(UNKNOWN_HOSPITAL)
}

/// Heading for the current scope.
pub fn dashboard_title<'a>(hospitals: &'a [Hospital], selector: &HospitalSelector) -> &'a str {
    match selector {
        HospitalSelector::All => "All Patients Dashboard",
        HospitalSelector::Hospital(id) => hospitals
            .iter()
            .find(|h| &h.id == id)
            .map(|h| h.name.as_str())
            .unwrap_or("Hospital Dashboard"),
    }
}
